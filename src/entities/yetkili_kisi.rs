use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Named contact person at an account.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "yetkili_kisiler")]
#[schema(as = YetkiliKisi)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cari_hesap_id: i32,
    pub ad_soyad: String,
    pub unvan: Option<String>,
    pub departman: Option<String>,
    pub telefon: Option<String>,
    pub email: Option<String>,
    pub notlar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cari_hesap::Entity",
        from = "Column::CariHesapId",
        to = "super::cari_hesap::Column::Id"
    )]
    CariHesap,
}

impl Related<super::cari_hesap::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CariHesap.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
