use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quote line item. The derived columns hold the calculator's output at the
/// time of last save: `tutar` = miktar x birim_fiyat, `net_tutar` = tutar -
/// indirim, `toplam` = net_tutar plus VAT.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "teklif_kalemleri")]
#[schema(as = TeklifKalemi)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub teklif_id: i32,
    pub urun_hizmet_adi: String,
    pub miktar: Decimal,
    pub birim: String,
    pub birim_fiyat: Decimal,
    pub tutar: Decimal,
    pub indirim: Decimal,
    pub net_tutar: Decimal,
    pub kdv_orani: Decimal,
    pub toplam: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teklif::Entity",
        from = "Column::TeklifId",
        to = "super::teklif::Column::Id"
    )]
    Teklif,
}

impl Related<super::teklif::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teklif.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
