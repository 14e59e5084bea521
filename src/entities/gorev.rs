use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Task/to-do item. `sira` is the manual sort order maintained by the board
/// view; `etiketler` and `dosyalar` are JSON arrays of strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "gorevler")]
#[schema(as = Gorev)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub baslik: String,
    pub aciklama: Option<String>,
    pub durum: GorevDurumu,
    pub oncelik: GorevOnceligi,
    pub baslangic_tarihi: Option<NaiveDate>,
    pub bitis_tarihi: Option<NaiveDate>,
    pub son_tarih: Option<NaiveDate>,
    pub atanan: Option<String>,
    pub cari_hesap_id: Option<i32>,
    pub proje_id: Option<i32>,
    pub sira: i32,
    #[sea_orm(column_type = "Json")]
    pub etiketler: Json,
    #[sea_orm(column_type = "Json")]
    pub dosyalar: Json,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum GorevDurumu {
    #[sea_orm(string_value = "beklemede")]
    Beklemede,
    #[sea_orm(string_value = "devam_ediyor")]
    DevamEdiyor,
    #[sea_orm(string_value = "tamamlandi")]
    Tamamlandi,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum GorevOnceligi {
    #[sea_orm(string_value = "dusuk")]
    Dusuk,
    #[sea_orm(string_value = "orta")]
    Orta,
    #[sea_orm(string_value = "yuksek")]
    Yuksek,
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

impl Related<super::proje::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proje.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
