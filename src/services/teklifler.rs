//! Quote service: document numbering, line-item totals and the compound
//! quote + kalemler writes.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;

use super::numbering::{self, DocumentScope};
use super::totals::{self, KalemInput};
use crate::entities::{teklif, teklif_kalemi};
use crate::errors::ServiceError;
use crate::storage::{
    KalemRecord, NewTeklif, NewTeklifKalemi, Storage, TeklifFilter, TeklifPatch, TeklifRecord,
    TeklifUpdateRequest,
};

/// Quote with its line items nested, as served by the detail endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeklifDetay {
    #[serde(flatten)]
    pub teklif: teklif::Model,
    pub kalemler: Vec<teklif_kalemi::Model>,
}

#[derive(Clone)]
pub struct TeklifService {
    storage: Arc<dyn Storage>,
}

impl TeklifService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list(&self, filter: &TeklifFilter) -> Result<Vec<teklif::Model>, ServiceError> {
        self.storage.list_teklifler(filter).await
    }

    pub async fn get_detay(&self, id: i32) -> Result<Option<TeklifDetay>, ServiceError> {
        let Some(teklif) = self.storage.get_teklif(id).await? else {
            return Ok(None);
        };
        let kalemler = self.storage.list_teklif_kalemleri(id).await?;
        Ok(Some(TeklifDetay { teklif, kalemler }))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewTeklif) -> Result<TeklifDetay, ServiceError> {
        let scope = DocumentScope::from(input.teklif_tipi);
        let seq = self.storage.next_document_number(scope).await?;
        let teklif_no = numbering::format_number(scope, seq);

        let kalemler = compute_kalemler(&input.kalemler);
        let toplam_tutar = kalemler.iter().map(|k| k.toplam).sum();

        let record = TeklifRecord {
            teklif_no: teklif_no.clone(),
            cari_hesap_id: input.cari_hesap_id,
            yetkili_kisi_id: input.yetkili_kisi_id,
            teklif_tipi: input.teklif_tipi,
            konu: input.konu,
            durum: input.durum.unwrap_or(teklif::TeklifDurumu::Beklemede),
            odeme_sartlari: input.odeme_sartlari,
            gecerlilik_suresi: input.gecerlilik_suresi,
            para_birimi: input.para_birimi,
            toplam_tutar,
            notlar: input.notlar,
        };

        let model = self.storage.insert_teklif(record, kalemler).await?;
        info!(teklif_no = %teklif_no, teklif_id = model.id, "quote created");
        let kalemler = self.storage.list_teklif_kalemleri(model.id).await?;
        Ok(TeklifDetay {
            teklif: model,
            kalemler,
        })
    }

    /// Partial update. A supplied `kalemler` array replaces the line set and
    /// recomputes the stored grand total.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i32,
        request: TeklifUpdateRequest,
    ) -> Result<Option<TeklifDetay>, ServiceError> {
        let (kalem_records, toplam_tutar) = match &request.kalemler {
            Some(yeni_kalemler) => {
                let records = compute_kalemler(yeni_kalemler);
                let toplam = records.iter().map(|k| k.toplam).sum();
                (Some(records), Some(toplam))
            }
            None => (None, None),
        };

        let patch = TeklifPatch {
            cari_hesap_id: request.cari_hesap_id,
            yetkili_kisi_id: request.yetkili_kisi_id,
            konu: request.konu,
            durum: request.durum,
            odeme_sartlari: request.odeme_sartlari,
            gecerlilik_suresi: request.gecerlilik_suresi,
            para_birimi: request.para_birimi,
            toplam_tutar,
            notlar: request.notlar,
        };

        let Some(updated) = self.storage.update_teklif(id, patch, kalem_records).await? else {
            return Ok(None);
        };
        let kalemler = self.storage.list_teklif_kalemleri(id).await?;
        Ok(Some(TeklifDetay {
            teklif: updated,
            kalemler,
        }))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.storage.delete_teklif(id).await?;
        if deleted {
            info!(teklif_id = id, "quote and its line items deleted");
        }
        Ok(deleted)
    }
}

fn compute_kalemler(inputs: &[NewTeklifKalemi]) -> Vec<KalemRecord> {
    inputs
        .iter()
        .map(|kalem| {
            let hesap = totals::kalem_totals(&KalemInput {
                miktar: kalem.miktar,
                birim_fiyat: kalem.birim_fiyat,
                indirim: kalem.indirim,
                kdv_orani: kalem.kdv_orani,
            });
            KalemRecord {
                urun_hizmet_adi: kalem.urun_hizmet_adi.clone(),
                miktar: kalem.miktar,
                birim: kalem.birim.clone(),
                birim_fiyat: kalem.birim_fiyat,
                tutar: hesap.tutar,
                indirim: kalem.indirim,
                net_tutar: hesap.net_tutar,
                kdv_orani: kalem.kdv_orani,
                toplam: hesap.toplam,
            }
        })
        .collect()
}
