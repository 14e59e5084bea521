use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ledger movement against an account. `bakiye` is the running balance as
/// posted by the client; it is stored verbatim and never recomputed here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "cari_hareketler")]
#[schema(as = CariHareket)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cari_hesap_id: i32,
    pub hareket_tipi: HareketTipi,
    pub tutar: Decimal,
    pub bakiye: Decimal,
    pub aciklama: Option<String>,
    pub tarih: DateTime<Utc>,
    pub proje_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum HareketTipi {
    /// Credit in favour of the account.
    #[sea_orm(string_value = "alacak")]
    Alacak,
    /// Debit against the account.
    #[sea_orm(string_value = "borc")]
    Borc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cari_hesap::Entity",
        from = "Column::CariHesapId",
        to = "super::cari_hesap::Column::Id"
    )]
    CariHesap,
    #[sea_orm(
        belongs_to = "super::proje::Entity",
        from = "Column::ProjeId",
        to = "super::proje::Column::Id"
    )]
    Proje,
}

impl Related<super::cari_hesap::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CariHesap.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
