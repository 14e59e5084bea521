use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Project tied to an account, optionally sourced from a quote.
/// `proje_no` is allocated from the global `P` document counter.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "projeler")]
#[schema(as = Proje)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub proje_no: String,
    pub cari_hesap_id: i32,
    pub teklif_id: Option<i32>,
    pub proje_adi: String,
    pub durum: ProjeDurumu,
    pub baslangic_tarihi: NaiveDate,
    pub bitis_tarihi: Option<NaiveDate>,
    pub butce: Decimal,
    pub harcanan: Decimal,
    pub tamamlanma_yuzdesi: i32,
    pub sorumlu: Option<String>,
    pub aciklama: Option<String>,
    pub notlar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ProjeDurumu {
    #[sea_orm(string_value = "devam_ediyor")]
    DevamEdiyor,
    #[sea_orm(string_value = "tamamlandi")]
    Tamamlandi,
    #[sea_orm(string_value = "iptal")]
    Iptal,
    #[sea_orm(string_value = "beklemede")]
    Beklemede,
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
        belongs_to = "super::teklif::Entity",
        from = "Column::TeklifId",
        to = "super::teklif::Column::Id"
    )]
    Teklif,
    #[sea_orm(has_many = "super::gorev::Entity")]
    Gorevler,
}

impl Related<super::cari_hesap::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CariHesap.def()
    }
}

impl Related<super::gorev::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gorevler.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
