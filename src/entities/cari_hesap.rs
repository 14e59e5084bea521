use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer/supplier account. Accounts are never hard-deleted; the
/// `is_active` flag soft-deletes them out of list and search results.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "cari_hesaplar")]
#[schema(as = CariHesap)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub firma_adi: String,
    pub cari_tipi: CariTipi,
    pub bolge: Option<String>,
    pub telefon: Option<String>,
    pub email: Option<String>,
    pub adres: Option<String>,
    pub vergi_no: Option<String>,
    pub vergi_dairesi: Option<String>,
    pub notlar: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Whether the account is a buyer, a seller, or both.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum CariTipi {
    #[sea_orm(string_value = "alici")]
    Alici,
    #[sea_orm(string_value = "satici")]
    Satici,
    #[sea_orm(string_value = "her_ikisi")]
    HerIkisi,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::yetkili_kisi::Entity")]
    YetkiliKisiler,
    #[sea_orm(has_many = "super::cari_hareket::Entity")]
    CariHareketler,
    #[sea_orm(has_many = "super::teklif::Entity")]
    Teklifler,
    #[sea_orm(has_many = "super::proje::Entity")]
    Projeler,
}

impl Related<super::yetkili_kisi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YetkiliKisiler.def()
    }
}

impl Related<super::cari_hareket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CariHareketler.def()
    }
}

impl Related<super::teklif::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teklifler.def()
    }
}

impl Related<super::proje::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projeler.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
