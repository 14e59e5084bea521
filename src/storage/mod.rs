//! Storage abstraction: one trait, two interchangeable backends.
//!
//! [`SqlStorage`] persists through sea-orm; [`MemStorage`] keeps seeded maps
//! for running without a configured database. Callers must not be able to
//! tell them apart. Derived quote amounts and document numbers are computed
//! by the services; backends only persist what they are handed, except for
//! [`Storage::next_document_number`], which is the atomic per-scope
//! increment-and-reserve both backends implement natively.

mod memory;
mod sql;

pub use memory::MemStorage;
pub use sql::SqlStorage;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::entities::{
    cari_hareket::{self, HareketTipi},
    cari_hesap::{self, CariTipi},
    gorev::{self, GorevDurumu, GorevOnceligi},
    proje::{self, ProjeDurumu},
    teklif::{self, TeklifDurumu, TeklifTipi},
    teklif_kalemi, user, yetkili_kisi,
};
use crate::errors::ServiceError;
use crate::services::numbering::DocumentScope;

#[async_trait]
pub trait Storage: Send + Sync {
    // --- cari hesaplar (soft-deleted via is_active) ---

    /// Active accounts, optionally narrowed by a case-insensitive substring
    /// match over firma_adi, bolge, telefon and email.
    async fn list_cari_hesaplar(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<cari_hesap::Model>, ServiceError>;
    async fn get_cari_hesap(&self, id: i32) -> Result<Option<cari_hesap::Model>, ServiceError>;
    async fn create_cari_hesap(
        &self,
        input: NewCariHesap,
    ) -> Result<cari_hesap::Model, ServiceError>;
    async fn update_cari_hesap(
        &self,
        id: i32,
        patch: CariHesapUpdate,
    ) -> Result<Option<cari_hesap::Model>, ServiceError>;
    async fn deactivate_cari_hesap(&self, id: i32) -> Result<bool, ServiceError>;

    // --- yetkili kisiler ---

    async fn list_yetkili_kisiler(
        &self,
        cari_hesap_id: i32,
    ) -> Result<Vec<yetkili_kisi::Model>, ServiceError>;
    async fn create_yetkili_kisi(
        &self,
        cari_hesap_id: i32,
        input: NewYetkiliKisi,
    ) -> Result<yetkili_kisi::Model, ServiceError>;
    async fn update_yetkili_kisi(
        &self,
        id: i32,
        patch: YetkiliKisiUpdate,
    ) -> Result<Option<yetkili_kisi::Model>, ServiceError>;
    async fn delete_yetkili_kisi(&self, id: i32) -> Result<bool, ServiceError>;

    // --- cari hareketler ---

    async fn list_cari_hareketler(
        &self,
        cari_hesap_id: i32,
    ) -> Result<Vec<cari_hareket::Model>, ServiceError>;
    async fn create_cari_hareket(
        &self,
        cari_hesap_id: i32,
        input: NewCariHareket,
    ) -> Result<cari_hareket::Model, ServiceError>;
    async fn delete_cari_hareket(&self, id: i32) -> Result<bool, ServiceError>;

    // --- teklifler + kalemler ---

    async fn list_teklifler(
        &self,
        filter: &TeklifFilter,
    ) -> Result<Vec<teklif::Model>, ServiceError>;
    async fn get_teklif(&self, id: i32) -> Result<Option<teklif::Model>, ServiceError>;
    async fn list_teklif_kalemleri(
        &self,
        teklif_id: i32,
    ) -> Result<Vec<teklif_kalemi::Model>, ServiceError>;
    /// Persists a quote together with its computed line records. Transactional
    /// on the SQL backend.
    async fn insert_teklif(
        &self,
        record: TeklifRecord,
        kalemler: Vec<KalemRecord>,
    ) -> Result<teklif::Model, ServiceError>;
    /// Applies a partial update; when `kalemler` is `Some`, the existing line
    /// set is replaced wholesale.
    async fn update_teklif(
        &self,
        id: i32,
        patch: TeklifPatch,
        kalemler: Option<Vec<KalemRecord>>,
    ) -> Result<Option<teklif::Model>, ServiceError>;
    /// Deletes the quote's line items, then the quote.
    async fn delete_teklif(&self, id: i32) -> Result<bool, ServiceError>;

    // --- projeler ---

    async fn list_projeler(&self, filter: &ProjeFilter) -> Result<Vec<proje::Model>, ServiceError>;
    async fn get_proje(&self, id: i32) -> Result<Option<proje::Model>, ServiceError>;
    async fn insert_proje(&self, record: ProjeRecord) -> Result<proje::Model, ServiceError>;
    async fn update_proje(
        &self,
        id: i32,
        patch: ProjeUpdate,
    ) -> Result<Option<proje::Model>, ServiceError>;
    async fn delete_proje(&self, id: i32) -> Result<bool, ServiceError>;

    // --- gorevler ---

    async fn list_gorevler(&self, filter: &GorevFilter) -> Result<Vec<gorev::Model>, ServiceError>;
    async fn get_gorev(&self, id: i32) -> Result<Option<gorev::Model>, ServiceError>;
    async fn create_gorev(&self, input: NewGorev) -> Result<gorev::Model, ServiceError>;
    async fn update_gorev(
        &self,
        id: i32,
        patch: GorevUpdate,
    ) -> Result<Option<gorev::Model>, ServiceError>;
    async fn delete_gorev(&self, id: i32) -> Result<bool, ServiceError>;

    // --- document numbering ---

    /// Reserves and returns the next sequence value for `scope`. Atomic per
    /// scope; seeded from existing records on first use.
    async fn next_document_number(&self, scope: DocumentScope) -> Result<i32, ServiceError>;

    // --- users ---

    /// Fails with [`ServiceError::Conflict`] when the username is taken.
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<user::Model, ServiceError>;
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, ServiceError>;
}

// --- validation helpers for Decimal fields (validator's range works on
// --- primitive numbers only) ---

fn validate_positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("must_be_positive"));
    }
    Ok(())
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("must_not_be_negative"));
    }
    Ok(())
}

fn validate_kdv_orani(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::from(100) {
        return Err(ValidationError::new("kdv_orani_out_of_range"));
    }
    Ok(())
}

fn validate_yuzde(value: i32) -> Result<(), ValidationError> {
    if !(0..=100).contains(&value) {
        return Err(ValidationError::new("yuzde_out_of_range"));
    }
    Ok(())
}

fn default_para_birimi() -> String {
    "TRY".to_string()
}

fn default_birim() -> String {
    "adet".to_string()
}

// --- cari hesap inputs ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCariHesap {
    #[validate(length(min = 1, max = 200, message = "Firma adı 1-200 karakter olmalı"))]
    pub firma_adi: String,
    pub cari_tipi: CariTipi,
    pub bolge: Option<String>,
    pub telefon: Option<String>,
    #[validate(email(message = "Geçersiz e-posta adresi"))]
    pub email: Option<String>,
    pub adres: Option<String>,
    pub vergi_no: Option<String>,
    pub vergi_dairesi: Option<String>,
    pub notlar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CariHesapUpdate {
    #[validate(length(min = 1, max = 200, message = "Firma adı 1-200 karakter olmalı"))]
    pub firma_adi: Option<String>,
    pub cari_tipi: Option<CariTipi>,
    pub bolge: Option<String>,
    pub telefon: Option<String>,
    #[validate(email(message = "Geçersiz e-posta adresi"))]
    pub email: Option<String>,
    pub adres: Option<String>,
    pub vergi_no: Option<String>,
    pub vergi_dairesi: Option<String>,
    pub notlar: Option<String>,
    pub is_active: Option<bool>,
}

// --- yetkili kisi inputs ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewYetkiliKisi {
    #[validate(length(min = 1, max = 200, message = "Ad soyad 1-200 karakter olmalı"))]
    pub ad_soyad: String,
    pub unvan: Option<String>,
    pub departman: Option<String>,
    pub telefon: Option<String>,
    #[validate(email(message = "Geçersiz e-posta adresi"))]
    pub email: Option<String>,
    pub notlar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YetkiliKisiUpdate {
    #[validate(length(min = 1, max = 200, message = "Ad soyad 1-200 karakter olmalı"))]
    pub ad_soyad: Option<String>,
    pub unvan: Option<String>,
    pub departman: Option<String>,
    pub telefon: Option<String>,
    #[validate(email(message = "Geçersiz e-posta adresi"))]
    pub email: Option<String>,
    pub notlar: Option<String>,
}

// --- cari hareket inputs ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCariHareket {
    pub hareket_tipi: HareketTipi,
    #[validate(custom = "validate_positive")]
    pub tutar: Decimal,
    /// Running balance as maintained by the client; stored verbatim.
    pub bakiye: Decimal,
    pub aciklama: Option<String>,
    pub tarih: Option<DateTime<Utc>>,
    pub proje_id: Option<i32>,
}

// --- teklif inputs ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTeklifKalemi {
    #[validate(length(min = 1, max = 300, message = "Ürün/hizmet adı 1-300 karakter olmalı"))]
    pub urun_hizmet_adi: String,
    #[validate(custom = "validate_positive")]
    pub miktar: Decimal,
    #[serde(default = "default_birim")]
    pub birim: String,
    #[validate(custom = "validate_non_negative")]
    pub birim_fiyat: Decimal,
    #[serde(default)]
    #[validate(custom = "validate_non_negative")]
    pub indirim: Decimal,
    #[serde(default)]
    #[validate(custom = "validate_kdv_orani")]
    pub kdv_orani: Decimal,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTeklif {
    pub cari_hesap_id: i32,
    pub yetkili_kisi_id: Option<i32>,
    pub teklif_tipi: TeklifTipi,
    #[validate(length(min = 1, max = 300, message = "Konu 1-300 karakter olmalı"))]
    pub konu: String,
    pub durum: Option<TeklifDurumu>,
    pub odeme_sartlari: Option<String>,
    pub gecerlilik_suresi: Option<String>,
    #[serde(default = "default_para_birimi")]
    pub para_birimi: String,
    pub notlar: Option<String>,
    #[serde(default)]
    #[validate]
    pub kalemler: Vec<NewTeklifKalemi>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeklifUpdateRequest {
    pub cari_hesap_id: Option<i32>,
    pub yetkili_kisi_id: Option<i32>,
    #[validate(length(min = 1, max = 300, message = "Konu 1-300 karakter olmalı"))]
    pub konu: Option<String>,
    pub durum: Option<TeklifDurumu>,
    pub odeme_sartlari: Option<String>,
    pub gecerlilik_suresi: Option<String>,
    pub para_birimi: Option<String>,
    pub notlar: Option<String>,
    /// When present, replaces the quote's line items and triggers a totals
    /// recomputation.
    #[validate]
    pub kalemler: Option<Vec<NewTeklifKalemi>>,
}

/// Fully-computed quote row, ready to persist. Built by the quote service
/// after number allocation and totals computation.
#[derive(Debug, Clone)]
pub struct TeklifRecord {
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
}

/// Fully-computed line row belonging to a [`TeklifRecord`].
#[derive(Debug, Clone)]
pub struct KalemRecord {
    pub urun_hizmet_adi: String,
    pub miktar: Decimal,
    pub birim: String,
    pub birim_fiyat: Decimal,
    pub tutar: Decimal,
    pub indirim: Decimal,
    pub net_tutar: Decimal,
    pub kdv_orani: Decimal,
    pub toplam: Decimal,
}

/// Storage-level quote patch; `toplam_tutar` is set by the service when the
/// line set is replaced.
#[derive(Debug, Clone, Default)]
pub struct TeklifPatch {
    pub cari_hesap_id: Option<i32>,
    pub yetkili_kisi_id: Option<i32>,
    pub konu: Option<String>,
    pub durum: Option<TeklifDurumu>,
    pub odeme_sartlari: Option<String>,
    pub gecerlilik_suresi: Option<String>,
    pub para_birimi: Option<String>,
    pub toplam_tutar: Option<Decimal>,
    pub notlar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TeklifFilter {
    /// Quote type filter (`verilen` / `alinan`).
    pub tur: Option<TeklifTipi>,
    /// Case-insensitive substring over teklif_no and konu.
    pub search: Option<String>,
}

// --- proje inputs ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProje {
    pub cari_hesap_id: i32,
    pub teklif_id: Option<i32>,
    #[validate(length(min = 1, max = 300, message = "Proje adı 1-300 karakter olmalı"))]
    pub proje_adi: String,
    pub durum: Option<ProjeDurumu>,
    pub baslangic_tarihi: NaiveDate,
    pub bitis_tarihi: Option<NaiveDate>,
    #[serde(default)]
    #[validate(custom = "validate_non_negative")]
    pub butce: Decimal,
    #[serde(default)]
    #[validate(custom = "validate_non_negative")]
    pub harcanan: Decimal,
    #[serde(default)]
    #[validate(custom = "validate_yuzde")]
    pub tamamlanma_yuzdesi: i32,
    pub sorumlu: Option<String>,
    pub aciklama: Option<String>,
    pub notlar: Option<String>,
}

/// Project row with its allocated number, ready to persist.
#[derive(Debug, Clone)]
pub struct ProjeRecord {
    pub proje_no: String,
    pub input: NewProje,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjeUpdate {
    pub cari_hesap_id: Option<i32>,
    pub teklif_id: Option<i32>,
    #[validate(length(min = 1, max = 300, message = "Proje adı 1-300 karakter olmalı"))]
    pub proje_adi: Option<String>,
    pub durum: Option<ProjeDurumu>,
    pub baslangic_tarihi: Option<NaiveDate>,
    pub bitis_tarihi: Option<NaiveDate>,
    #[validate(custom = "validate_non_negative")]
    pub butce: Option<Decimal>,
    #[validate(custom = "validate_non_negative")]
    pub harcanan: Option<Decimal>,
    #[validate(custom = "validate_yuzde")]
    pub tamamlanma_yuzdesi: Option<i32>,
    pub sorumlu: Option<String>,
    pub aciklama: Option<String>,
    pub notlar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProjeFilter {
    pub durum: Option<ProjeDurumu>,
    /// Case-insensitive substring over proje_no, proje_adi and sorumlu.
    pub search: Option<String>,
}

// --- gorev inputs ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGorev {
    #[validate(length(min = 1, max = 300, message = "Başlık 1-300 karakter olmalı"))]
    pub baslik: String,
    pub aciklama: Option<String>,
    pub durum: Option<GorevDurumu>,
    pub oncelik: Option<GorevOnceligi>,
    pub baslangic_tarihi: Option<NaiveDate>,
    pub bitis_tarihi: Option<NaiveDate>,
    pub son_tarih: Option<NaiveDate>,
    pub atanan: Option<String>,
    pub cari_hesap_id: Option<i32>,
    pub proje_id: Option<i32>,
    #[serde(default)]
    pub sira: i32,
    #[serde(default)]
    pub etiketler: Vec<String>,
    #[serde(default)]
    pub dosyalar: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GorevUpdate {
    #[validate(length(min = 1, max = 300, message = "Başlık 1-300 karakter olmalı"))]
    pub baslik: Option<String>,
    pub aciklama: Option<String>,
    pub durum: Option<GorevDurumu>,
    pub oncelik: Option<GorevOnceligi>,
    pub baslangic_tarihi: Option<NaiveDate>,
    pub bitis_tarihi: Option<NaiveDate>,
    pub son_tarih: Option<NaiveDate>,
    pub atanan: Option<String>,
    pub cari_hesap_id: Option<i32>,
    pub proje_id: Option<i32>,
    pub sira: Option<i32>,
    pub etiketler: Option<Vec<String>>,
    pub dosyalar: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GorevFilter {
    pub durum: Option<GorevDurumu>,
    pub cari_id: Option<i32>,
    pub proje_id: Option<i32>,
    /// Case-insensitive substring over baslik, aciklama and atanan.
    pub search: Option<String>,
}

/// Case-insensitive substring match used by both backends' search paths.
pub(crate) fn matches_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
