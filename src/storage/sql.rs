//! Sea-ORM backed storage. Compound quote writes run inside transactions;
//! document numbers are reserved through a compare-and-swap counter bump
//! before the insert, so a failed insert can leave a gap in the sequence but
//! never a duplicate.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseTransaction, DbErr,
    EntityTrait, NotSet, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

use super::{
    CariHesapUpdate, GorevFilter, GorevUpdate, KalemRecord, NewCariHareket, NewCariHesap, NewGorev,
    NewYetkiliKisi, ProjeFilter, ProjeRecord, ProjeUpdate, Storage, TeklifFilter, TeklifPatch,
    TeklifRecord, YetkiliKisiUpdate,
};
use crate::db::DbPool;
use crate::entities::{
    cari_hareket, cari_hesap, document_counter,
    gorev::{self, GorevDurumu, GorevOnceligi},
    proje::{self, ProjeDurumu},
    teklif, teklif_kalemi, user, yetkili_kisi,
};
use crate::errors::ServiceError;
use crate::services::numbering::{self, DocumentScope};

pub struct SqlStorage {
    db: Arc<DbPool>,
}

impl SqlStorage {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    async fn scan_max_suffix<C: ConnectionTrait>(
        &self,
        conn: &C,
        scope: DocumentScope,
    ) -> Result<i32, ServiceError> {
        let numbers: Vec<String> = match scope {
            DocumentScope::TeklifVerilen | DocumentScope::TeklifAlinan => {
                let tipi = match scope {
                    DocumentScope::TeklifVerilen => teklif::TeklifTipi::Verilen,
                    _ => teklif::TeklifTipi::Alinan,
                };
                teklif::Entity::find()
                    .filter(teklif::Column::TeklifTipi.eq(tipi))
                    .all(conn)
                    .await?
                    .into_iter()
                    .map(|t| t.teklif_no)
                    .collect()
            }
            DocumentScope::Proje => proje::Entity::find()
                .all(conn)
                .await?
                .into_iter()
                .map(|p| p.proje_no)
                .collect(),
        };
        Ok(numbering::max_suffix(
            scope,
            numbers.iter().map(String::as_str),
        ))
    }

    async fn insert_kalemler(
        txn: &DatabaseTransaction,
        teklif_id: i32,
        kalemler: Vec<KalemRecord>,
    ) -> Result<(), ServiceError> {
        let now = Utc::now();
        for kalem in kalemler {
            teklif_kalemi::ActiveModel {
                id: NotSet,
                teklif_id: Set(teklif_id),
                urun_hizmet_adi: Set(kalem.urun_hizmet_adi),
                miktar: Set(kalem.miktar),
                birim: Set(kalem.birim),
                birim_fiyat: Set(kalem.birim_fiyat),
                tutar: Set(kalem.tutar),
                indirim: Set(kalem.indirim),
                net_tutar: Set(kalem.net_tutar),
                kdv_orani: Set(kalem.kdv_orani),
                toplam: Set(kalem.toplam),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(txn)
            .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for SqlStorage {
    async fn list_cari_hesaplar(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<cari_hesap::Model>, ServiceError> {
        let mut query = cari_hesap::Entity::find()
            .filter(cari_hesap::Column::IsActive.eq(true))
            .order_by_asc(cari_hesap::Column::Id);
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(cari_hesap::Column::FirmaAdi.contains(term))
                    .add(cari_hesap::Column::Bolge.contains(term))
                    .add(cari_hesap::Column::Telefon.contains(term))
                    .add(cari_hesap::Column::Email.contains(term)),
            );
        }
        Ok(query.all(&*self.db).await?)
    }

    async fn get_cari_hesap(&self, id: i32) -> Result<Option<cari_hesap::Model>, ServiceError> {
        Ok(cari_hesap::Entity::find_by_id(id).one(&*self.db).await?)
    }

    async fn create_cari_hesap(
        &self,
        input: NewCariHesap,
    ) -> Result<cari_hesap::Model, ServiceError> {
        let now = Utc::now();
        let model = cari_hesap::ActiveModel {
            id: NotSet,
            firma_adi: Set(input.firma_adi),
            cari_tipi: Set(input.cari_tipi),
            bolge: Set(input.bolge),
            telefon: Set(input.telefon),
            email: Set(input.email),
            adres: Set(input.adres),
            vergi_no: Set(input.vergi_no),
            vergi_dairesi: Set(input.vergi_dairesi),
            notlar: Set(input.notlar),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?;
        Ok(model)
    }

    async fn update_cari_hesap(
        &self,
        id: i32,
        patch: CariHesapUpdate,
    ) -> Result<Option<cari_hesap::Model>, ServiceError> {
        let Some(existing) = cari_hesap::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };
        let mut active: cari_hesap::ActiveModel = existing.into();
        if let Some(v) = patch.firma_adi {
            active.firma_adi = Set(v);
        }
        if let Some(v) = patch.cari_tipi {
            active.cari_tipi = Set(v);
        }
        if let Some(v) = patch.bolge {
            active.bolge = Set(Some(v));
        }
        if let Some(v) = patch.telefon {
            active.telefon = Set(Some(v));
        }
        if let Some(v) = patch.email {
            active.email = Set(Some(v));
        }
        if let Some(v) = patch.adres {
            active.adres = Set(Some(v));
        }
        if let Some(v) = patch.vergi_no {
            active.vergi_no = Set(Some(v));
        }
        if let Some(v) = patch.vergi_dairesi {
            active.vergi_dairesi = Set(Some(v));
        }
        if let Some(v) = patch.notlar {
            active.notlar = Set(Some(v));
        }
        if let Some(v) = patch.is_active {
            active.is_active = Set(v);
        }
        active.updated_at = Set(Utc::now());
        Ok(Some(active.update(&*self.db).await?))
    }

    async fn deactivate_cari_hesap(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(existing) = cari_hesap::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(false);
        };
        let mut active: cari_hesap::ActiveModel = existing.into();
        active.is_active = Set(false);
        active.updated_at = Set(Utc::now());
        active.update(&*self.db).await?;
        Ok(true)
    }

    async fn list_yetkili_kisiler(
        &self,
        cari_hesap_id: i32,
    ) -> Result<Vec<yetkili_kisi::Model>, ServiceError> {
        Ok(yetkili_kisi::Entity::find()
            .filter(yetkili_kisi::Column::CariHesapId.eq(cari_hesap_id))
            .order_by_asc(yetkili_kisi::Column::Id)
            .all(&*self.db)
            .await?)
    }

    async fn create_yetkili_kisi(
        &self,
        cari_hesap_id: i32,
        input: NewYetkiliKisi,
    ) -> Result<yetkili_kisi::Model, ServiceError> {
        let now = Utc::now();
        Ok(yetkili_kisi::ActiveModel {
            id: NotSet,
            cari_hesap_id: Set(cari_hesap_id),
            ad_soyad: Set(input.ad_soyad),
            unvan: Set(input.unvan),
            departman: Set(input.departman),
            telefon: Set(input.telefon),
            email: Set(input.email),
            notlar: Set(input.notlar),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?)
    }

    async fn update_yetkili_kisi(
        &self,
        id: i32,
        patch: YetkiliKisiUpdate,
    ) -> Result<Option<yetkili_kisi::Model>, ServiceError> {
        let Some(existing) = yetkili_kisi::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };
        let mut active: yetkili_kisi::ActiveModel = existing.into();
        if let Some(v) = patch.ad_soyad {
            active.ad_soyad = Set(v);
        }
        if let Some(v) = patch.unvan {
            active.unvan = Set(Some(v));
        }
        if let Some(v) = patch.departman {
            active.departman = Set(Some(v));
        }
        if let Some(v) = patch.telefon {
            active.telefon = Set(Some(v));
        }
        if let Some(v) = patch.email {
            active.email = Set(Some(v));
        }
        if let Some(v) = patch.notlar {
            active.notlar = Set(Some(v));
        }
        active.updated_at = Set(Utc::now());
        Ok(Some(active.update(&*self.db).await?))
    }

    async fn delete_yetkili_kisi(&self, id: i32) -> Result<bool, ServiceError> {
        let res = yetkili_kisi::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_cari_hareketler(
        &self,
        cari_hesap_id: i32,
    ) -> Result<Vec<cari_hareket::Model>, ServiceError> {
        Ok(cari_hareket::Entity::find()
            .filter(cari_hareket::Column::CariHesapId.eq(cari_hesap_id))
            .order_by_asc(cari_hareket::Column::Id)
            .all(&*self.db)
            .await?)
    }

    async fn create_cari_hareket(
        &self,
        cari_hesap_id: i32,
        input: NewCariHareket,
    ) -> Result<cari_hareket::Model, ServiceError> {
        let now = Utc::now();
        Ok(cari_hareket::ActiveModel {
            id: NotSet,
            cari_hesap_id: Set(cari_hesap_id),
            hareket_tipi: Set(input.hareket_tipi),
            tutar: Set(input.tutar),
            bakiye: Set(input.bakiye),
            aciklama: Set(input.aciklama),
            tarih: Set(input.tarih.unwrap_or(now)),
            proje_id: Set(input.proje_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?)
    }

    async fn delete_cari_hareket(&self, id: i32) -> Result<bool, ServiceError> {
        let res = cari_hareket::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_teklifler(
        &self,
        filter: &TeklifFilter,
    ) -> Result<Vec<teklif::Model>, ServiceError> {
        let mut query = teklif::Entity::find().order_by_asc(teklif::Column::Id);
        if let Some(tur) = filter.tur {
            query = query.filter(teklif::Column::TeklifTipi.eq(tur));
        }
        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(teklif::Column::TeklifNo.contains(term))
                    .add(teklif::Column::Konu.contains(term)),
            );
        }
        Ok(query.all(&*self.db).await?)
    }

    async fn get_teklif(&self, id: i32) -> Result<Option<teklif::Model>, ServiceError> {
        Ok(teklif::Entity::find_by_id(id).one(&*self.db).await?)
    }

    async fn list_teklif_kalemleri(
        &self,
        teklif_id: i32,
    ) -> Result<Vec<teklif_kalemi::Model>, ServiceError> {
        Ok(teklif_kalemi::Entity::find()
            .filter(teklif_kalemi::Column::TeklifId.eq(teklif_id))
            .order_by_asc(teklif_kalemi::Column::Id)
            .all(&*self.db)
            .await?)
    }

    async fn insert_teklif(
        &self,
        record: TeklifRecord,
        kalemler: Vec<KalemRecord>,
    ) -> Result<teklif::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let now = Utc::now();
        let model = teklif::ActiveModel {
            id: NotSet,
            teklif_no: Set(record.teklif_no),
            cari_hesap_id: Set(record.cari_hesap_id),
            yetkili_kisi_id: Set(record.yetkili_kisi_id),
            teklif_tipi: Set(record.teklif_tipi),
            konu: Set(record.konu),
            durum: Set(record.durum),
            odeme_sartlari: Set(record.odeme_sartlari),
            gecerlilik_suresi: Set(record.gecerlilik_suresi),
            para_birimi: Set(record.para_birimi),
            toplam_tutar: Set(record.toplam_tutar),
            notlar: Set(record.notlar),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
        Self::insert_kalemler(&txn, model.id, kalemler).await?;
        txn.commit().await?;
        Ok(model)
    }

    async fn update_teklif(
        &self,
        id: i32,
        patch: TeklifPatch,
        kalemler: Option<Vec<KalemRecord>>,
    ) -> Result<Option<teklif::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(existing) = teklif::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let mut active: teklif::ActiveModel = existing.into();
        if let Some(v) = patch.cari_hesap_id {
            active.cari_hesap_id = Set(v);
        }
        if let Some(v) = patch.yetkili_kisi_id {
            active.yetkili_kisi_id = Set(Some(v));
        }
        if let Some(v) = patch.konu {
            active.konu = Set(v);
        }
        if let Some(v) = patch.durum {
            active.durum = Set(v);
        }
        if let Some(v) = patch.odeme_sartlari {
            active.odeme_sartlari = Set(Some(v));
        }
        if let Some(v) = patch.gecerlilik_suresi {
            active.gecerlilik_suresi = Set(Some(v));
        }
        if let Some(v) = patch.para_birimi {
            active.para_birimi = Set(v);
        }
        if let Some(v) = patch.toplam_tutar {
            active.toplam_tutar = Set(v);
        }
        if let Some(v) = patch.notlar {
            active.notlar = Set(Some(v));
        }
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        if let Some(kalemler) = kalemler {
            teklif_kalemi::Entity::delete_many()
                .filter(teklif_kalemi::Column::TeklifId.eq(id))
                .exec(&txn)
                .await?;
            Self::insert_kalemler(&txn, id, kalemler).await?;
        }
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete_teklif(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        teklif_kalemi::Entity::delete_many()
            .filter(teklif_kalemi::Column::TeklifId.eq(id))
            .exec(&txn)
            .await?;
        let res = teklif::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_projeler(&self, filter: &ProjeFilter) -> Result<Vec<proje::Model>, ServiceError> {
        let mut query = proje::Entity::find().order_by_asc(proje::Column::Id);
        if let Some(durum) = filter.durum {
            query = query.filter(proje::Column::Durum.eq(durum));
        }
        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(proje::Column::ProjeNo.contains(term))
                    .add(proje::Column::ProjeAdi.contains(term))
                    .add(proje::Column::Sorumlu.contains(term)),
            );
        }
        Ok(query.all(&*self.db).await?)
    }

    async fn get_proje(&self, id: i32) -> Result<Option<proje::Model>, ServiceError> {
        Ok(proje::Entity::find_by_id(id).one(&*self.db).await?)
    }

    async fn insert_proje(&self, record: ProjeRecord) -> Result<proje::Model, ServiceError> {
        let now = Utc::now();
        let input = record.input;
        Ok(proje::ActiveModel {
            id: NotSet,
            proje_no: Set(record.proje_no),
            cari_hesap_id: Set(input.cari_hesap_id),
            teklif_id: Set(input.teklif_id),
            proje_adi: Set(input.proje_adi),
            durum: Set(input.durum.unwrap_or(ProjeDurumu::DevamEdiyor)),
            baslangic_tarihi: Set(input.baslangic_tarihi),
            bitis_tarihi: Set(input.bitis_tarihi),
            butce: Set(input.butce),
            harcanan: Set(input.harcanan),
            tamamlanma_yuzdesi: Set(input.tamamlanma_yuzdesi),
            sorumlu: Set(input.sorumlu),
            aciklama: Set(input.aciklama),
            notlar: Set(input.notlar),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?)
    }

    async fn update_proje(
        &self,
        id: i32,
        patch: ProjeUpdate,
    ) -> Result<Option<proje::Model>, ServiceError> {
        let Some(existing) = proje::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };
        let mut active: proje::ActiveModel = existing.into();
        if let Some(v) = patch.cari_hesap_id {
            active.cari_hesap_id = Set(v);
        }
        if let Some(v) = patch.teklif_id {
            active.teklif_id = Set(Some(v));
        }
        if let Some(v) = patch.proje_adi {
            active.proje_adi = Set(v);
        }
        if let Some(v) = patch.durum {
            active.durum = Set(v);
        }
        if let Some(v) = patch.baslangic_tarihi {
            active.baslangic_tarihi = Set(v);
        }
        if let Some(v) = patch.bitis_tarihi {
            active.bitis_tarihi = Set(Some(v));
        }
        if let Some(v) = patch.butce {
            active.butce = Set(v);
        }
        if let Some(v) = patch.harcanan {
            active.harcanan = Set(v);
        }
        if let Some(v) = patch.tamamlanma_yuzdesi {
            active.tamamlanma_yuzdesi = Set(v);
        }
        if let Some(v) = patch.sorumlu {
            active.sorumlu = Set(Some(v));
        }
        if let Some(v) = patch.aciklama {
            active.aciklama = Set(Some(v));
        }
        if let Some(v) = patch.notlar {
            active.notlar = Set(Some(v));
        }
        active.updated_at = Set(Utc::now());
        Ok(Some(active.update(&*self.db).await?))
    }

    async fn delete_proje(&self, id: i32) -> Result<bool, ServiceError> {
        let res = proje::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_gorevler(&self, filter: &GorevFilter) -> Result<Vec<gorev::Model>, ServiceError> {
        let mut query = gorev::Entity::find()
            .order_by_asc(gorev::Column::Sira)
            .order_by_asc(gorev::Column::Id);
        if let Some(durum) = filter.durum {
            query = query.filter(gorev::Column::Durum.eq(durum));
        }
        if let Some(cari_id) = filter.cari_id {
            query = query.filter(gorev::Column::CariHesapId.eq(cari_id));
        }
        if let Some(proje_id) = filter.proje_id {
            query = query.filter(gorev::Column::ProjeId.eq(proje_id));
        }
        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(gorev::Column::Baslik.contains(term))
                    .add(gorev::Column::Aciklama.contains(term))
                    .add(gorev::Column::Atanan.contains(term)),
            );
        }
        Ok(query.all(&*self.db).await?)
    }

    async fn get_gorev(&self, id: i32) -> Result<Option<gorev::Model>, ServiceError> {
        Ok(gorev::Entity::find_by_id(id).one(&*self.db).await?)
    }

    async fn create_gorev(&self, input: NewGorev) -> Result<gorev::Model, ServiceError> {
        let now = Utc::now();
        Ok(gorev::ActiveModel {
            id: NotSet,
            baslik: Set(input.baslik),
            aciklama: Set(input.aciklama),
            durum: Set(input.durum.unwrap_or(GorevDurumu::Beklemede)),
            oncelik: Set(input.oncelik.unwrap_or(GorevOnceligi::Orta)),
            baslangic_tarihi: Set(input.baslangic_tarihi),
            bitis_tarihi: Set(input.bitis_tarihi),
            son_tarih: Set(input.son_tarih),
            atanan: Set(input.atanan),
            cari_hesap_id: Set(input.cari_hesap_id),
            proje_id: Set(input.proje_id),
            sira: Set(input.sira),
            etiketler: Set(serde_json::Value::from(input.etiketler)),
            dosyalar: Set(serde_json::Value::from(input.dosyalar)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await?)
    }

    async fn update_gorev(
        &self,
        id: i32,
        patch: GorevUpdate,
    ) -> Result<Option<gorev::Model>, ServiceError> {
        let Some(existing) = gorev::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };
        let mut active: gorev::ActiveModel = existing.into();
        if let Some(v) = patch.baslik {
            active.baslik = Set(v);
        }
        if let Some(v) = patch.aciklama {
            active.aciklama = Set(Some(v));
        }
        if let Some(v) = patch.durum {
            active.durum = Set(v);
        }
        if let Some(v) = patch.oncelik {
            active.oncelik = Set(v);
        }
        if let Some(v) = patch.baslangic_tarihi {
            active.baslangic_tarihi = Set(Some(v));
        }
        if let Some(v) = patch.bitis_tarihi {
            active.bitis_tarihi = Set(Some(v));
        }
        if let Some(v) = patch.son_tarih {
            active.son_tarih = Set(Some(v));
        }
        if let Some(v) = patch.atanan {
            active.atanan = Set(Some(v));
        }
        if let Some(v) = patch.cari_hesap_id {
            active.cari_hesap_id = Set(Some(v));
        }
        if let Some(v) = patch.proje_id {
            active.proje_id = Set(Some(v));
        }
        if let Some(v) = patch.sira {
            active.sira = Set(v);
        }
        if let Some(v) = patch.etiketler {
            active.etiketler = Set(serde_json::Value::from(v));
        }
        if let Some(v) = patch.dosyalar {
            active.dosyalar = Set(serde_json::Value::from(v));
        }
        active.updated_at = Set(Utc::now());
        Ok(Some(active.update(&*self.db).await?))
    }

    async fn delete_gorev(&self, id: i32) -> Result<bool, ServiceError> {
        let res = gorev::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Compare-and-swap loop. Each round reads the counter and then issues a
    /// single guarded UPDATE (`value = next WHERE scope = ? AND value = old`),
    /// so two concurrent writers can never commit the same value: the loser's
    /// guard matches zero rows and it retries against the fresh counter. The
    /// first-use seed insert races the same way via ON CONFLICT DO NOTHING.
    async fn next_document_number(&self, scope: DocumentScope) -> Result<i32, ServiceError> {
        loop {
            match document_counter::Entity::find_by_id(scope.prefix())
                .one(&*self.db)
                .await?
            {
                Some(counter) => {
                    let next = counter.value + 1;
                    let res = document_counter::Entity::update_many()
                        .col_expr(document_counter::Column::Value, Expr::value(next))
                        .filter(document_counter::Column::Scope.eq(scope.prefix()))
                        .filter(document_counter::Column::Value.eq(counter.value))
                        .exec(&*self.db)
                        .await?;
                    if res.rows_affected == 1 {
                        return Ok(next);
                    }
                }
                None => {
                    let seed = self.scan_max_suffix(&*self.db, scope).await? + 1;
                    let inserted = document_counter::Entity::insert(document_counter::ActiveModel {
                        scope: Set(scope.prefix().to_string()),
                        value: Set(seed),
                    })
                    .on_conflict(
                        OnConflict::column(document_counter::Column::Scope)
                            .do_nothing()
                            .to_owned(),
                    )
                    .exec(&*self.db)
                    .await;
                    match inserted {
                        Ok(_) => return Ok(seed),
                        // Another writer seeded the scope first; take the
                        // CAS path against its counter.
                        Err(DbErr::RecordNotInserted) => {}
                        Err(err) => return Err(err.into()),
                    }
                }
            }
        }
    }

    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<user::Model, ServiceError> {
        let existing = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(format!(
                "username '{}' already exists",
                username
            )));
        }
        Ok(user::ActiveModel {
            id: NotSet,
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.db)
        .await?)
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&*self.db)
            .await?)
    }
}
