//! Business logic on top of the storage abstraction.

pub mod dashboard;
pub mod numbering;
pub mod projeler;
pub mod teklifler;
pub mod totals;
pub mod users;
