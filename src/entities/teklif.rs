use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Price quote. `teklif_no` is allocated from the document counter for the
/// quote's type (`FT` outgoing, `ST` incoming); `toplam_tutar` is recomputed
/// from the line items on every save.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "teklifler")]
#[schema(as = Teklif)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub teklif_no: String,
    pub cari_hesap_id: i32,
    pub yetkili_kisi_id: Option<i32>,
    pub teklif_tipi: TeklifTipi,
    pub konu: String,
    pub durum: TeklifDurumu,
    pub odeme_sartlari: Option<String>,
    pub gecerlilik_suresi: Option<String>,
    pub para_birimi: String,
    pub toplam_tutar: Decimal,
    pub notlar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum TeklifTipi {
    /// Outgoing quote, numbered `FT####`.
    #[sea_orm(string_value = "verilen")]
    Verilen,
    /// Incoming quote, numbered `ST####`.
    #[sea_orm(string_value = "alinan")]
    Alinan,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum TeklifDurumu {
    #[sea_orm(string_value = "beklemede")]
    Beklemede,
    #[sea_orm(string_value = "onaylandi")]
    Onaylandi,
    #[sea_orm(string_value = "kaybedildi")]
    Kaybedildi,
    #[sea_orm(string_value = "iptal")]
    Iptal,
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
        belongs_to = "super::yetkili_kisi::Entity",
        from = "Column::YetkiliKisiId",
        to = "super::yetkili_kisi::Column::Id"
    )]
    YetkiliKisi,
    #[sea_orm(has_many = "super::teklif_kalemi::Entity")]
    Kalemler,
}

impl Related<super::cari_hesap::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CariHesap.def()
    }
}

impl Related<super::teklif_kalemi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kalemler.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
