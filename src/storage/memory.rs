//! Map-backed storage for running without a configured database.
//!
//! Ships with a handful of seeded sample records so the client has something
//! to render on first start. The two-step quote writes are plain sequential
//! map operations here; only the per-scope document counters are atomic.

use chrono::Utc;
use dashmap::DashMap;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;

use super::{
    matches_ci, CariHesapUpdate, GorevFilter, GorevUpdate, KalemRecord, NewCariHareket,
    NewCariHesap, NewGorev, NewYetkiliKisi, ProjeFilter, ProjeRecord, ProjeUpdate, Storage,
    TeklifFilter, TeklifPatch, TeklifRecord, YetkiliKisiUpdate,
};
use crate::entities::{
    cari_hareket,
    cari_hesap::{self, CariTipi},
    gorev::{self, GorevDurumu, GorevOnceligi},
    proje::{self, ProjeDurumu},
    teklif::{self, TeklifDurumu, TeklifTipi},
    teklif_kalemi, user, yetkili_kisi,
};
use crate::errors::ServiceError;
use crate::services::numbering::{self, DocumentScope};

#[derive(Default)]
struct IdCounters {
    cari_hesap: AtomicI32,
    yetkili_kisi: AtomicI32,
    cari_hareket: AtomicI32,
    teklif: AtomicI32,
    teklif_kalemi: AtomicI32,
    proje: AtomicI32,
    gorev: AtomicI32,
    user: AtomicI32,
}

impl IdCounters {
    fn next(counter: &AtomicI32) -> i32 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

pub struct MemStorage {
    cari_hesaplar: DashMap<i32, cari_hesap::Model>,
    yetkili_kisiler: DashMap<i32, yetkili_kisi::Model>,
    cari_hareketler: DashMap<i32, cari_hareket::Model>,
    teklifler: DashMap<i32, teklif::Model>,
    teklif_kalemleri: DashMap<i32, teklif_kalemi::Model>,
    projeler: DashMap<i32, proje::Model>,
    gorevler: DashMap<i32, gorev::Model>,
    users: DashMap<i32, user::Model>,
    document_counters: DashMap<String, i32>,
    ids: IdCounters,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Empty store, no sample data. Used by tests.
    pub fn new() -> Self {
        Self {
            cari_hesaplar: DashMap::new(),
            yetkili_kisiler: DashMap::new(),
            cari_hareketler: DashMap::new(),
            teklifler: DashMap::new(),
            teklif_kalemleri: DashMap::new(),
            projeler: DashMap::new(),
            gorevler: DashMap::new(),
            users: DashMap::new(),
            document_counters: DashMap::new(),
            ids: IdCounters::default(),
        }
    }

    /// Store pre-populated with sample records for database-less development.
    pub fn seeded() -> Self {
        let store = Self::new();
        let now = Utc::now();

        let hesap_id = IdCounters::next(&store.ids.cari_hesap);
        store.cari_hesaplar.insert(
            hesap_id,
            cari_hesap::Model {
                id: hesap_id,
                firma_adi: "Demir Metal San. Tic. Ltd. Şti.".to_string(),
                cari_tipi: CariTipi::Alici,
                bolge: Some("İstanbul".to_string()),
                telefon: Some("0212 555 10 20".to_string()),
                email: Some("info@demirmetal.example".to_string()),
                adres: Some("İkitelli OSB, Başakşehir".to_string()),
                vergi_no: Some("1234567890".to_string()),
                vergi_dairesi: Some("İkitelli".to_string()),
                notlar: None,
                is_active: true,
                created_at: now,
                updated_at: now,
            },
        );

        let hesap2_id = IdCounters::next(&store.ids.cari_hesap);
        store.cari_hesaplar.insert(
            hesap2_id,
            cari_hesap::Model {
                id: hesap2_id,
                firma_adi: "Yılmaz Makine A.Ş.".to_string(),
                cari_tipi: CariTipi::HerIkisi,
                bolge: Some("Ankara".to_string()),
                telefon: Some("0312 555 30 40".to_string()),
                email: Some("satis@yilmazmakine.example".to_string()),
                adres: None,
                vergi_no: None,
                vergi_dairesi: None,
                notlar: Some("Tedarikçi ve müşteri".to_string()),
                is_active: true,
                created_at: now,
                updated_at: now,
            },
        );

        let kisi_id = IdCounters::next(&store.ids.yetkili_kisi);
        store.yetkili_kisiler.insert(
            kisi_id,
            yetkili_kisi::Model {
                id: kisi_id,
                cari_hesap_id: hesap_id,
                ad_soyad: "Ahmet Demir".to_string(),
                unvan: Some("Satın Alma Müdürü".to_string()),
                departman: Some("Satın Alma".to_string()),
                telefon: Some("0532 555 11 22".to_string()),
                email: Some("ahmet@demirmetal.example".to_string()),
                notlar: None,
                created_at: now,
                updated_at: now,
            },
        );

        let proje_id = IdCounters::next(&store.ids.proje);
        store.projeler.insert(
            proje_id,
            proje::Model {
                id: proje_id,
                proje_no: numbering::format_number(DocumentScope::Proje, 1),
                cari_hesap_id: hesap_id,
                teklif_id: None,
                proje_adi: "Depo raf sistemi kurulumu".to_string(),
                durum: ProjeDurumu::DevamEdiyor,
                baslangic_tarihi: now.date_naive(),
                bitis_tarihi: None,
                butce: dec!(150000),
                harcanan: dec!(42500),
                tamamlanma_yuzdesi: 30,
                sorumlu: Some("Mehmet Yılmaz".to_string()),
                aciklama: None,
                notlar: None,
                created_at: now,
                updated_at: now,
            },
        );
        store.document_counters.insert("P".to_string(), 1);

        let gorev_id = IdCounters::next(&store.ids.gorev);
        store.gorevler.insert(
            gorev_id,
            gorev::Model {
                id: gorev_id,
                baslik: "Keşif randevusu ayarla".to_string(),
                aciklama: Some("Depo ölçüleri için yerinde keşif".to_string()),
                durum: GorevDurumu::Beklemede,
                oncelik: GorevOnceligi::Yuksek,
                baslangic_tarihi: Some(now.date_naive()),
                bitis_tarihi: None,
                son_tarih: None,
                atanan: Some("Mehmet Yılmaz".to_string()),
                cari_hesap_id: Some(hesap_id),
                proje_id: Some(proje_id),
                sira: 0,
                etiketler: serde_json::Value::from(vec!["keşif".to_string()]),
                dosyalar: serde_json::Value::Array(vec![]),
                created_at: now,
                updated_at: now,
            },
        );

        store
    }

    fn seed_scan(&self, scope: DocumentScope) -> i32 {
        match scope {
            DocumentScope::TeklifVerilen | DocumentScope::TeklifAlinan => {
                let numbers: Vec<String> = self
                    .teklifler
                    .iter()
                    .filter(|t| DocumentScope::from(t.teklif_tipi) == scope)
                    .map(|t| t.teklif_no.clone())
                    .collect();
                numbering::max_suffix(scope, numbers.iter().map(String::as_str))
            }
            DocumentScope::Proje => {
                let numbers: Vec<String> =
                    self.projeler.iter().map(|p| p.proje_no.clone()).collect();
                numbering::max_suffix(scope, numbers.iter().map(String::as_str))
            }
        }
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn list_cari_hesaplar(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<cari_hesap::Model>, ServiceError> {
        let needle = search.map(str::to_lowercase);
        let mut hesaplar: Vec<_> = self
            .cari_hesaplar
            .iter()
            .filter(|h| h.is_active)
            .filter(|h| match &needle {
                None => true,
                Some(q) => {
                    matches_ci(&h.firma_adi, q)
                        || h.bolge.as_deref().is_some_and(|v| matches_ci(v, q))
                        || h.telefon.as_deref().is_some_and(|v| matches_ci(v, q))
                        || h.email.as_deref().is_some_and(|v| matches_ci(v, q))
                }
            })
            .map(|h| h.clone())
            .collect();
        hesaplar.sort_by_key(|h| h.id);
        Ok(hesaplar)
    }

    async fn get_cari_hesap(&self, id: i32) -> Result<Option<cari_hesap::Model>, ServiceError> {
        Ok(self.cari_hesaplar.get(&id).map(|h| h.clone()))
    }

    async fn create_cari_hesap(
        &self,
        input: NewCariHesap,
    ) -> Result<cari_hesap::Model, ServiceError> {
        let now = Utc::now();
        let id = IdCounters::next(&self.ids.cari_hesap);
        let model = cari_hesap::Model {
            id,
            firma_adi: input.firma_adi,
            cari_tipi: input.cari_tipi,
            bolge: input.bolge,
            telefon: input.telefon,
            email: input.email,
            adres: input.adres,
            vergi_no: input.vergi_no,
            vergi_dairesi: input.vergi_dairesi,
            notlar: input.notlar,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.cari_hesaplar.insert(id, model.clone());
        Ok(model)
    }

    async fn update_cari_hesap(
        &self,
        id: i32,
        patch: CariHesapUpdate,
    ) -> Result<Option<cari_hesap::Model>, ServiceError> {
        let Some(mut entry) = self.cari_hesaplar.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = patch.firma_adi {
            entry.firma_adi = v;
        }
        if let Some(v) = patch.cari_tipi {
            entry.cari_tipi = v;
        }
        if let Some(v) = patch.bolge {
            entry.bolge = Some(v);
        }
        if let Some(v) = patch.telefon {
            entry.telefon = Some(v);
        }
        if let Some(v) = patch.email {
            entry.email = Some(v);
        }
        if let Some(v) = patch.adres {
            entry.adres = Some(v);
        }
        if let Some(v) = patch.vergi_no {
            entry.vergi_no = Some(v);
        }
        if let Some(v) = patch.vergi_dairesi {
            entry.vergi_dairesi = Some(v);
        }
        if let Some(v) = patch.notlar {
            entry.notlar = Some(v);
        }
        if let Some(v) = patch.is_active {
            entry.is_active = v;
        }
        entry.updated_at = Utc::now();
        Ok(Some(entry.clone()))
    }

    async fn deactivate_cari_hesap(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(mut entry) = self.cari_hesaplar.get_mut(&id) else {
            return Ok(false);
        };
        entry.is_active = false;
        entry.updated_at = Utc::now();
        Ok(true)
    }

    async fn list_yetkili_kisiler(
        &self,
        cari_hesap_id: i32,
    ) -> Result<Vec<yetkili_kisi::Model>, ServiceError> {
        let mut kisiler: Vec<_> = self
            .yetkili_kisiler
            .iter()
            .filter(|k| k.cari_hesap_id == cari_hesap_id)
            .map(|k| k.clone())
            .collect();
        kisiler.sort_by_key(|k| k.id);
        Ok(kisiler)
    }

    async fn create_yetkili_kisi(
        &self,
        cari_hesap_id: i32,
        input: NewYetkiliKisi,
    ) -> Result<yetkili_kisi::Model, ServiceError> {
        let now = Utc::now();
        let id = IdCounters::next(&self.ids.yetkili_kisi);
        let model = yetkili_kisi::Model {
            id,
            cari_hesap_id,
            ad_soyad: input.ad_soyad,
            unvan: input.unvan,
            departman: input.departman,
            telefon: input.telefon,
            email: input.email,
            notlar: input.notlar,
            created_at: now,
            updated_at: now,
        };
        self.yetkili_kisiler.insert(id, model.clone());
        Ok(model)
    }

    async fn update_yetkili_kisi(
        &self,
        id: i32,
        patch: YetkiliKisiUpdate,
    ) -> Result<Option<yetkili_kisi::Model>, ServiceError> {
        let Some(mut entry) = self.yetkili_kisiler.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = patch.ad_soyad {
            entry.ad_soyad = v;
        }
        if let Some(v) = patch.unvan {
            entry.unvan = Some(v);
        }
        if let Some(v) = patch.departman {
            entry.departman = Some(v);
        }
        if let Some(v) = patch.telefon {
            entry.telefon = Some(v);
        }
        if let Some(v) = patch.email {
            entry.email = Some(v);
        }
        if let Some(v) = patch.notlar {
            entry.notlar = Some(v);
        }
        entry.updated_at = Utc::now();
        Ok(Some(entry.clone()))
    }

    async fn delete_yetkili_kisi(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.yetkili_kisiler.remove(&id).is_some())
    }

    async fn list_cari_hareketler(
        &self,
        cari_hesap_id: i32,
    ) -> Result<Vec<cari_hareket::Model>, ServiceError> {
        let mut hareketler: Vec<_> = self
            .cari_hareketler
            .iter()
            .filter(|h| h.cari_hesap_id == cari_hesap_id)
            .map(|h| h.clone())
            .collect();
        hareketler.sort_by_key(|h| h.id);
        Ok(hareketler)
    }

    async fn create_cari_hareket(
        &self,
        cari_hesap_id: i32,
        input: NewCariHareket,
    ) -> Result<cari_hareket::Model, ServiceError> {
        let now = Utc::now();
        let id = IdCounters::next(&self.ids.cari_hareket);
        let model = cari_hareket::Model {
            id,
            cari_hesap_id,
            hareket_tipi: input.hareket_tipi,
            tutar: input.tutar,
            bakiye: input.bakiye,
            aciklama: input.aciklama,
            tarih: input.tarih.unwrap_or(now),
            proje_id: input.proje_id,
            created_at: now,
            updated_at: now,
        };
        self.cari_hareketler.insert(id, model.clone());
        Ok(model)
    }

    async fn delete_cari_hareket(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.cari_hareketler.remove(&id).is_some())
    }

    async fn list_teklifler(
        &self,
        filter: &TeklifFilter,
    ) -> Result<Vec<teklif::Model>, ServiceError> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut teklifler: Vec<_> = self
            .teklifler
            .iter()
            .filter(|t| filter.tur.map_or(true, |tur| t.teklif_tipi == tur))
            .filter(|t| match &needle {
                None => true,
                Some(q) => matches_ci(&t.teklif_no, q) || matches_ci(&t.konu, q),
            })
            .map(|t| t.clone())
            .collect();
        teklifler.sort_by_key(|t| t.id);
        Ok(teklifler)
    }

    async fn get_teklif(&self, id: i32) -> Result<Option<teklif::Model>, ServiceError> {
        Ok(self.teklifler.get(&id).map(|t| t.clone()))
    }

    async fn list_teklif_kalemleri(
        &self,
        teklif_id: i32,
    ) -> Result<Vec<teklif_kalemi::Model>, ServiceError> {
        let mut kalemler: Vec<_> = self
            .teklif_kalemleri
            .iter()
            .filter(|k| k.teklif_id == teklif_id)
            .map(|k| k.clone())
            .collect();
        kalemler.sort_by_key(|k| k.id);
        Ok(kalemler)
    }

    async fn insert_teklif(
        &self,
        record: TeklifRecord,
        kalemler: Vec<KalemRecord>,
    ) -> Result<teklif::Model, ServiceError> {
        let now = Utc::now();
        let id = IdCounters::next(&self.ids.teklif);
        let model = teklif::Model {
            id,
            teklif_no: record.teklif_no,
            cari_hesap_id: record.cari_hesap_id,
            yetkili_kisi_id: record.yetkili_kisi_id,
            teklif_tipi: record.teklif_tipi,
            konu: record.konu,
            durum: record.durum,
            odeme_sartlari: record.odeme_sartlari,
            gecerlilik_suresi: record.gecerlilik_suresi,
            para_birimi: record.para_birimi,
            toplam_tutar: record.toplam_tutar,
            notlar: record.notlar,
            created_at: now,
            updated_at: now,
        };
        self.teklifler.insert(id, model.clone());
        self.insert_kalemler(id, kalemler, now);
        Ok(model)
    }

    async fn update_teklif(
        &self,
        id: i32,
        patch: TeklifPatch,
        kalemler: Option<Vec<KalemRecord>>,
    ) -> Result<Option<teklif::Model>, ServiceError> {
        let updated = {
            let Some(mut entry) = self.teklifler.get_mut(&id) else {
                return Ok(None);
            };
            if let Some(v) = patch.cari_hesap_id {
                entry.cari_hesap_id = v;
            }
            if let Some(v) = patch.yetkili_kisi_id {
                entry.yetkili_kisi_id = Some(v);
            }
            if let Some(v) = patch.konu {
                entry.konu = v;
            }
            if let Some(v) = patch.durum {
                entry.durum = v;
            }
            if let Some(v) = patch.odeme_sartlari {
                entry.odeme_sartlari = Some(v);
            }
            if let Some(v) = patch.gecerlilik_suresi {
                entry.gecerlilik_suresi = Some(v);
            }
            if let Some(v) = patch.para_birimi {
                entry.para_birimi = v;
            }
            if let Some(v) = patch.toplam_tutar {
                entry.toplam_tutar = v;
            }
            if let Some(v) = patch.notlar {
                entry.notlar = Some(v);
            }
            entry.updated_at = Utc::now();
            entry.clone()
        };

        if let Some(kalemler) = kalemler {
            self.teklif_kalemleri.retain(|_, k| k.teklif_id != id);
            self.insert_kalemler(id, kalemler, Utc::now());
        }
        Ok(Some(updated))
    }

    async fn delete_teklif(&self, id: i32) -> Result<bool, ServiceError> {
        // Line items first, matching the SQL backend's delete order.
        self.teklif_kalemleri.retain(|_, k| k.teklif_id != id);
        Ok(self.teklifler.remove(&id).is_some())
    }

    async fn list_projeler(&self, filter: &ProjeFilter) -> Result<Vec<proje::Model>, ServiceError> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut projeler: Vec<_> = self
            .projeler
            .iter()
            .filter(|p| filter.durum.map_or(true, |d| p.durum == d))
            .filter(|p| match &needle {
                None => true,
                Some(q) => {
                    matches_ci(&p.proje_no, q)
                        || matches_ci(&p.proje_adi, q)
                        || p.sorumlu.as_deref().is_some_and(|v| matches_ci(v, q))
                }
            })
            .map(|p| p.clone())
            .collect();
        projeler.sort_by_key(|p| p.id);
        Ok(projeler)
    }

    async fn get_proje(&self, id: i32) -> Result<Option<proje::Model>, ServiceError> {
        Ok(self.projeler.get(&id).map(|p| p.clone()))
    }

    async fn insert_proje(&self, record: ProjeRecord) -> Result<proje::Model, ServiceError> {
        let now = Utc::now();
        let id = IdCounters::next(&self.ids.proje);
        let input = record.input;
        let model = proje::Model {
            id,
            proje_no: record.proje_no,
            cari_hesap_id: input.cari_hesap_id,
            teklif_id: input.teklif_id,
            proje_adi: input.proje_adi,
            durum: input.durum.unwrap_or(ProjeDurumu::DevamEdiyor),
            baslangic_tarihi: input.baslangic_tarihi,
            bitis_tarihi: input.bitis_tarihi,
            butce: input.butce,
            harcanan: input.harcanan,
            tamamlanma_yuzdesi: input.tamamlanma_yuzdesi,
            sorumlu: input.sorumlu,
            aciklama: input.aciklama,
            notlar: input.notlar,
            created_at: now,
            updated_at: now,
        };
        self.projeler.insert(id, model.clone());
        Ok(model)
    }

    async fn update_proje(
        &self,
        id: i32,
        patch: ProjeUpdate,
    ) -> Result<Option<proje::Model>, ServiceError> {
        let Some(mut entry) = self.projeler.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = patch.cari_hesap_id {
            entry.cari_hesap_id = v;
        }
        if let Some(v) = patch.teklif_id {
            entry.teklif_id = Some(v);
        }
        if let Some(v) = patch.proje_adi {
            entry.proje_adi = v;
        }
        if let Some(v) = patch.durum {
            entry.durum = v;
        }
        if let Some(v) = patch.baslangic_tarihi {
            entry.baslangic_tarihi = v;
        }
        if let Some(v) = patch.bitis_tarihi {
            entry.bitis_tarihi = Some(v);
        }
        if let Some(v) = patch.butce {
            entry.butce = v;
        }
        if let Some(v) = patch.harcanan {
            entry.harcanan = v;
        }
        if let Some(v) = patch.tamamlanma_yuzdesi {
            entry.tamamlanma_yuzdesi = v;
        }
        if let Some(v) = patch.sorumlu {
            entry.sorumlu = Some(v);
        }
        if let Some(v) = patch.aciklama {
            entry.aciklama = Some(v);
        }
        if let Some(v) = patch.notlar {
            entry.notlar = Some(v);
        }
        entry.updated_at = Utc::now();
        Ok(Some(entry.clone()))
    }

    async fn delete_proje(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.projeler.remove(&id).is_some())
    }

    async fn list_gorevler(&self, filter: &GorevFilter) -> Result<Vec<gorev::Model>, ServiceError> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        let mut gorevler: Vec<_> = self
            .gorevler
            .iter()
            .filter(|g| filter.durum.map_or(true, |d| g.durum == d))
            .filter(|g| filter.cari_id.map_or(true, |c| g.cari_hesap_id == Some(c)))
            .filter(|g| filter.proje_id.map_or(true, |p| g.proje_id == Some(p)))
            .filter(|g| match &needle {
                None => true,
                Some(q) => {
                    matches_ci(&g.baslik, q)
                        || g.aciklama.as_deref().is_some_and(|v| matches_ci(v, q))
                        || g.atanan.as_deref().is_some_and(|v| matches_ci(v, q))
                }
            })
            .map(|g| g.clone())
            .collect();
        gorevler.sort_by_key(|g| (g.sira, g.id));
        Ok(gorevler)
    }

    async fn get_gorev(&self, id: i32) -> Result<Option<gorev::Model>, ServiceError> {
        Ok(self.gorevler.get(&id).map(|g| g.clone()))
    }

    async fn create_gorev(&self, input: NewGorev) -> Result<gorev::Model, ServiceError> {
        let now = Utc::now();
        let id = IdCounters::next(&self.ids.gorev);
        let model = gorev::Model {
            id,
            baslik: input.baslik,
            aciklama: input.aciklama,
            durum: input.durum.unwrap_or(GorevDurumu::Beklemede),
            oncelik: input.oncelik.unwrap_or(GorevOnceligi::Orta),
            baslangic_tarihi: input.baslangic_tarihi,
            bitis_tarihi: input.bitis_tarihi,
            son_tarih: input.son_tarih,
            atanan: input.atanan,
            cari_hesap_id: input.cari_hesap_id,
            proje_id: input.proje_id,
            sira: input.sira,
            etiketler: serde_json::Value::from(input.etiketler),
            dosyalar: serde_json::Value::from(input.dosyalar),
            created_at: now,
            updated_at: now,
        };
        self.gorevler.insert(id, model.clone());
        Ok(model)
    }

    async fn update_gorev(
        &self,
        id: i32,
        patch: GorevUpdate,
    ) -> Result<Option<gorev::Model>, ServiceError> {
        let Some(mut entry) = self.gorevler.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(v) = patch.baslik {
            entry.baslik = v;
        }
        if let Some(v) = patch.aciklama {
            entry.aciklama = Some(v);
        }
        if let Some(v) = patch.durum {
            entry.durum = v;
        }
        if let Some(v) = patch.oncelik {
            entry.oncelik = v;
        }
        if let Some(v) = patch.baslangic_tarihi {
            entry.baslangic_tarihi = Some(v);
        }
        if let Some(v) = patch.bitis_tarihi {
            entry.bitis_tarihi = Some(v);
        }
        if let Some(v) = patch.son_tarih {
            entry.son_tarih = Some(v);
        }
        if let Some(v) = patch.atanan {
            entry.atanan = Some(v);
        }
        if let Some(v) = patch.cari_hesap_id {
            entry.cari_hesap_id = Some(v);
        }
        if let Some(v) = patch.proje_id {
            entry.proje_id = Some(v);
        }
        if let Some(v) = patch.sira {
            entry.sira = v;
        }
        if let Some(v) = patch.etiketler {
            entry.etiketler = serde_json::Value::from(v);
        }
        if let Some(v) = patch.dosyalar {
            entry.dosyalar = serde_json::Value::from(v);
        }
        entry.updated_at = Utc::now();
        Ok(Some(entry.clone()))
    }

    async fn delete_gorev(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.gorevler.remove(&id).is_some())
    }

    async fn next_document_number(&self, scope: DocumentScope) -> Result<i32, ServiceError> {
        let mut entry = self
            .document_counters
            .entry(scope.to_string())
            .or_insert_with(|| self.seed_scan(scope));
        *entry += 1;
        Ok(*entry)
    }

    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<user::Model, ServiceError> {
        if self.users.iter().any(|u| u.username == username) {
            return Err(ServiceError::Conflict(format!(
                "username '{}' already exists",
                username
            )));
        }
        let id = IdCounters::next(&self.ids.user);
        let model = user::Model {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        self.users.insert(id, model.clone());
        Ok(model)
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, ServiceError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.clone()))
    }
}

impl MemStorage {
    fn insert_kalemler(&self, teklif_id: i32, kalemler: Vec<KalemRecord>, now: chrono::DateTime<Utc>) {
        for kalem in kalemler {
            let kalem_id = IdCounters::next(&self.ids.teklif_kalemi);
            self.teklif_kalemleri.insert(
                kalem_id,
                teklif_kalemi::Model {
                    id: kalem_id,
                    teklif_id,
                    urun_hizmet_adi: kalem.urun_hizmet_adi,
                    miktar: kalem.miktar,
                    birim: kalem.birim,
                    birim_fiyat: kalem.birim_fiyat,
                    tutar: kalem.tutar,
                    indirim: kalem.indirim,
                    net_tutar: kalem.net_tutar,
                    kdv_orani: kalem.kdv_orani,
                    toplam: kalem.toplam,
                    created_at: now,
                    updated_at: now,
                },
            );
        }
    }
}
