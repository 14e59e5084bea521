//! Behavioral tests against the in-memory backend through the `Storage`
//! trait and the services that sit on top of it.

use std::sync::Arc;

use isletme_api::entities::cari_hesap::CariTipi;
use isletme_api::entities::teklif::TeklifTipi;
use isletme_api::services::numbering::DocumentScope;
use isletme_api::services::projeler::ProjeService;
use isletme_api::services::teklifler::TeklifService;
use isletme_api::storage::{
    CariHesapUpdate, MemStorage, NewCariHesap, NewProje, NewTeklif, NewTeklifKalemi, Storage,
    TeklifFilter,
};
use rust_decimal_macros::dec;

fn hesap(firma_adi: &str, bolge: Option<&str>) -> NewCariHesap {
    NewCariHesap {
        firma_adi: firma_adi.to_string(),
        cari_tipi: CariTipi::Alici,
        bolge: bolge.map(str::to_string),
        telefon: None,
        email: None,
        adres: None,
        vergi_no: None,
        vergi_dairesi: None,
        notlar: None,
    }
}

fn teklif(tipi: TeklifTipi, konu: &str) -> NewTeklif {
    NewTeklif {
        cari_hesap_id: 1,
        yetkili_kisi_id: None,
        teklif_tipi: tipi,
        konu: konu.to_string(),
        durum: None,
        odeme_sartlari: None,
        gecerlilik_suresi: None,
        para_birimi: "TRY".to_string(),
        notlar: None,
        kalemler: vec![NewTeklifKalemi {
            urun_hizmet_adi: "Montaj hizmeti".to_string(),
            miktar: dec!(2),
            birim: "adet".to_string(),
            birim_fiyat: dec!(100),
            indirim: dec!(10),
            kdv_orani: dec!(20),
        }],
    }
}

fn proje(adi: &str) -> NewProje {
    NewProje {
        cari_hesap_id: 1,
        teklif_id: None,
        proje_adi: adi.to_string(),
        durum: None,
        baslangic_tarihi: chrono::Utc::now().date_naive(),
        bitis_tarihi: None,
        butce: dec!(1000),
        harcanan: dec!(0),
        tamamlanma_yuzdesi: 0,
        sorumlu: None,
        aciklama: None,
        notlar: None,
    }
}

#[tokio::test]
async fn account_search_is_case_insensitive() {
    let store = MemStorage::new();
    store
        .create_cari_hesap(hesap("Demir Metal", Some("İstanbul")))
        .await
        .unwrap();
    store
        .create_cari_hesap(hesap("Yılmaz Makine", Some("Ankara")))
        .await
        .unwrap();

    let by_name = store.list_cari_hesaplar(Some("demir")).await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].firma_adi, "Demir Metal");

    let by_region = store.list_cari_hesaplar(Some("ankara")).await.unwrap();
    assert_eq!(by_region.len(), 1);
    assert_eq!(by_region[0].firma_adi, "Yılmaz Makine");

    let none = store.list_cari_hesaplar(Some("izmir")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn deactivated_account_leaves_list_but_stays_fetchable() {
    let store = MemStorage::new();
    let a = store.create_cari_hesap(hesap("A", None)).await.unwrap();
    store.create_cari_hesap(hesap("B", None)).await.unwrap();

    assert!(store.deactivate_cari_hesap(a.id).await.unwrap());
    let listed = store.list_cari_hesaplar(None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].firma_adi, "B");

    let fetched = store.get_cari_hesap(a.id).await.unwrap().unwrap();
    assert!(!fetched.is_active);
}

#[tokio::test]
async fn partial_update_preserves_unspecified_fields() {
    let store = MemStorage::new();
    let created = store
        .create_cari_hesap(hesap("Demir Metal", Some("İstanbul")))
        .await
        .unwrap();

    let patch = CariHesapUpdate {
        telefon: Some("0212 555 10 20".to_string()),
        ..CariHesapUpdate::default()
    };
    let updated = store
        .update_cari_hesap(created.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.telefon.as_deref(), Some("0212 555 10 20"));
    assert_eq!(updated.firma_adi, "Demir Metal");
    assert_eq!(updated.bolge.as_deref(), Some("İstanbul"));
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn lists_come_back_in_id_order() {
    let store = MemStorage::new();
    for name in ["C", "A", "B"] {
        store.create_cari_hesap(hesap(name, None)).await.unwrap();
    }
    let listed = store.list_cari_hesaplar(None).await.unwrap();
    let ids: Vec<i32> = listed.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn sequential_quotes_number_from_one() {
    let storage = Arc::new(MemStorage::new());
    let service = TeklifService::new(storage);

    for expected in ["FT0001", "FT0002", "FT0003"] {
        let detay = service
            .create(teklif(TeklifTipi::Verilen, "Raf sistemi"))
            .await
            .unwrap();
        assert_eq!(detay.teklif.teklif_no, expected);
    }
}

#[tokio::test]
async fn quote_scopes_count_independently() {
    let storage = Arc::new(MemStorage::new());
    let teklifler = TeklifService::new(storage.clone());
    let projeler = ProjeService::new(storage);

    let verilen = teklifler
        .create(teklif(TeklifTipi::Verilen, "Satış"))
        .await
        .unwrap();
    let alinan = teklifler
        .create(teklif(TeklifTipi::Alinan, "Alım"))
        .await
        .unwrap();
    let p = projeler.create(proje("Kurulum")).await.unwrap();

    assert_eq!(verilen.teklif.teklif_no, "FT0001");
    assert_eq!(alinan.teklif.teklif_no, "ST0001");
    assert_eq!(p.proje_no, "P0001");
}

#[tokio::test]
async fn counter_seeds_from_existing_numbers() {
    let storage = Arc::new(MemStorage::new());
    let service = TeklifService::new(storage.clone());

    // Simulate pre-existing data by creating quotes, then asking the raw
    // counter for the next value of an untouched scope.
    service
        .create(teklif(TeklifTipi::Verilen, "Birinci"))
        .await
        .unwrap();
    service
        .create(teklif(TeklifTipi::Verilen, "İkinci"))
        .await
        .unwrap();

    assert_eq!(
        storage
            .next_document_number(DocumentScope::TeklifVerilen)
            .await
            .unwrap(),
        3
    );
    assert_eq!(
        storage
            .next_document_number(DocumentScope::Proje)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn quote_create_computes_line_amounts_and_grand_total() {
    let storage = Arc::new(MemStorage::new());
    let service = TeklifService::new(storage);

    let detay = service
        .create(teklif(TeklifTipi::Verilen, "Raf sistemi"))
        .await
        .unwrap();

    assert_eq!(detay.teklif.toplam_tutar, dec!(228));
    assert_eq!(detay.kalemler.len(), 1);
    let kalem = &detay.kalemler[0];
    assert_eq!(kalem.tutar, dec!(200));
    assert_eq!(kalem.net_tutar, dec!(190));
    assert_eq!(kalem.toplam, dec!(228));
}

#[tokio::test]
async fn replacing_lines_recomputes_the_total() {
    let storage = Arc::new(MemStorage::new());
    let service = TeklifService::new(storage);

    let detay = service
        .create(teklif(TeklifTipi::Verilen, "Raf sistemi"))
        .await
        .unwrap();

    let update = isletme_api::storage::TeklifUpdateRequest {
        kalemler: Some(vec![NewTeklifKalemi {
            urun_hizmet_adi: "Nakliye".to_string(),
            miktar: dec!(1),
            birim: "sefer".to_string(),
            birim_fiyat: dec!(500),
            indirim: dec!(0),
            kdv_orani: dec!(0),
        }]),
        ..Default::default()
    };
    let updated = service
        .update(detay.teklif.id, update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.teklif.toplam_tutar, dec!(500));
    assert_eq!(updated.kalemler.len(), 1);
    assert_eq!(updated.kalemler[0].urun_hizmet_adi, "Nakliye");
}

#[tokio::test]
async fn deleting_a_quote_removes_its_lines() {
    let storage = Arc::new(MemStorage::new());
    let service = TeklifService::new(storage.clone());

    let detay = service
        .create(teklif(TeklifTipi::Verilen, "Raf sistemi"))
        .await
        .unwrap();
    let id = detay.teklif.id;

    assert!(service.delete(id).await.unwrap());
    assert!(storage.get_teklif(id).await.unwrap().is_none());
    assert!(storage.list_teklif_kalemleri(id).await.unwrap().is_empty());
    // Second delete is a no-op.
    assert!(!service.delete(id).await.unwrap());
}

#[tokio::test]
async fn quote_list_filters_by_type_and_search() {
    let storage = Arc::new(MemStorage::new());
    let service = TeklifService::new(storage.clone());

    service
        .create(teklif(TeklifTipi::Verilen, "Raf sistemi"))
        .await
        .unwrap();
    service
        .create(teklif(TeklifTipi::Alinan, "Hammadde alımı"))
        .await
        .unwrap();

    let verilen = storage
        .list_teklifler(&TeklifFilter {
            tur: Some(TeklifTipi::Verilen),
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(verilen.len(), 1);
    assert_eq!(verilen[0].konu, "Raf sistemi");

    let by_no = storage
        .list_teklifler(&TeklifFilter {
            tur: None,
            search: Some("st0001".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(by_no.len(), 1);
    assert_eq!(by_no[0].teklif_no, "ST0001");
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let store = MemStorage::new();
    store.create_user("ayse", "hash-1").await.unwrap();
    let err = store.create_user("ayse", "hash-2").await.unwrap_err();
    assert!(matches!(
        err,
        isletme_api::errors::ServiceError::Conflict(_)
    ));
}

#[tokio::test]
async fn task_status_only_update_keeps_other_fields() {
    use isletme_api::entities::gorev::{GorevDurumu, GorevOnceligi};
    use isletme_api::storage::{GorevUpdate, NewGorev};

    let store = MemStorage::new();
    let created = store
        .create_gorev(NewGorev {
            baslik: "Keşif randevusu ayarla".to_string(),
            aciklama: Some("Depo ölçüleri için yerinde keşif".to_string()),
            durum: Some(GorevDurumu::Beklemede),
            oncelik: Some(GorevOnceligi::Yuksek),
            baslangic_tarihi: None,
            bitis_tarihi: None,
            son_tarih: None,
            atanan: Some("Mehmet Yılmaz".to_string()),
            cari_hesap_id: None,
            proje_id: None,
            sira: 3,
            etiketler: vec!["keşif".to_string()],
            dosyalar: vec![],
        })
        .await
        .unwrap();

    let patch = GorevUpdate {
        durum: Some(GorevDurumu::Tamamlandi),
        ..GorevUpdate::default()
    };
    let updated = store
        .update_gorev(created.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.durum, GorevDurumu::Tamamlandi);
    assert_eq!(updated.baslik, created.baslik);
    assert_eq!(updated.oncelik, GorevOnceligi::Yuksek);
    assert_eq!(updated.atanan, created.atanan);
    assert_eq!(updated.sira, 3);
    assert_eq!(updated.etiketler, created.etiketler);
}

#[tokio::test]
async fn concurrent_reservations_stay_unique() {
    let storage = Arc::new(MemStorage::new());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage
                .next_document_number(DocumentScope::Proje)
                .await
                .unwrap()
        }));
    }
    let mut values = Vec::new();
    for handle in handles {
        values.push(handle.await.unwrap());
    }
    values.sort_unstable();
    assert_eq!(values, (1..=8).collect::<Vec<i32>>());
}
