use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reserved high-water mark per document numbering scope (`FT`, `ST`, `P`).
/// Bumped atomically before the numbered record is inserted, so a failed
/// insert leaves a gap in the sequence but never a duplicate.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_counters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub scope: String,
    pub value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
