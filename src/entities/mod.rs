//! Sea-ORM entity definitions, one module per table.

pub mod cari_hareket;
pub mod cari_hesap;
pub mod document_counter;
pub mod gorev;
pub mod proje;
pub mod teklif;
pub mod teklif_kalemi;
pub mod user;
pub mod yetkili_kisi;
