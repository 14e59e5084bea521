//! HTTP surface tests: the full router over the in-memory backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use isletme_api::config::AppConfig;
use isletme_api::storage::MemStorage;
use isletme_api::{app, AppState};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn test_config() -> AppConfig {
    AppConfig {
        database_url: None,
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        log_level: "warn".to_string(),
        log_json: false,
        auto_migrate: false,
        jwt_secret: "test-secret-not-for-production".to_string(),
        jwt_expiration: 3600,
        cors_allowed_origin: None,
    }
}

fn empty_app() -> axum::Router {
    app(AppState::new(Arc::new(MemStorage::new()), test_config()))
}

fn seeded_app() -> axum::Router {
    app(AppState::new(Arc::new(MemStorage::seeded()), test_config()))
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(json) => builder.body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn decimal(value: &Value) -> Decimal {
    serde_json::from_value(value.clone()).unwrap()
}

#[tokio::test]
async fn health_reports_memory_backend() {
    let response = empty_app()
        .oneshot(request("GET", "/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn create_account_returns_201_with_camel_case_body() {
    let response = empty_app()
        .oneshot(request(
            "POST",
            "/api/cari-hesaplar",
            Some(json!({
                "firmaAdi": "Demir Metal",
                "cariTipi": "alici",
                "bolge": "İstanbul"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["firmaAdi"], "Demir Metal");
    assert_eq!(body["cariTipi"], "alici");
    assert_eq!(body["isActive"], true);
}

#[tokio::test]
async fn invalid_email_is_rejected_with_400() {
    let response = empty_app()
        .oneshot(request(
            "POST",
            "/api/cari-hesaplar",
            Some(json!({
                "firmaAdi": "Demir Metal",
                "cariTipi": "alici",
                "email": "not-an-email"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn unknown_account_is_404() {
    let response = empty_app()
        .oneshot(request("GET", "/api/cari-hesaplar/999", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_account_disappears_from_the_list() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(request("DELETE", "/api/cari-hesaplar/1", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request("GET", "/api/cari-hesaplar", None))
        .await
        .unwrap();
    let body = body_json(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_i64().unwrap())
        .collect();
    assert!(!ids.contains(&1));
}

#[tokio::test]
async fn contacts_under_unknown_account_are_404() {
    let response = empty_app()
        .oneshot(request(
            "POST",
            "/api/cari-hesaplar/42/yetkili-kisiler",
            Some(json!({ "adSoyad": "Ahmet Demir" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quote_create_numbers_and_totals_server_side() {
    let response = empty_app()
        .oneshot(request(
            "POST",
            "/api/teklifler",
            Some(json!({
                "cariHesapId": 1,
                "teklifTipi": "verilen",
                "konu": "Depo raf sistemi",
                "kalemler": [{
                    "urunHizmetAdi": "Raf montajı",
                    "miktar": "2",
                    "birimFiyat": "100",
                    "indirim": "10",
                    "kdvOrani": "20"
                }]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["teklifNo"], "FT0001");
    assert_eq!(body["durum"], "beklemede");
    assert_eq!(decimal(&body["toplamTutar"]), dec!(228));
    let kalemler = body["kalemler"].as_array().unwrap();
    assert_eq!(kalemler.len(), 1);
    assert_eq!(decimal(&kalemler[0]["netTutar"]), dec!(190));
}

#[tokio::test]
async fn quote_delete_then_get_is_404() {
    let app = empty_app();
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/teklifler",
            Some(json!({
                "cariHesapId": 1,
                "teklifTipi": "alinan",
                "konu": "Hammadde"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/api/teklifler/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request("GET", &format!("/api/teklifler/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_create_allocates_the_next_p_number() {
    // The seed data already holds P0001.
    let response = seeded_app()
        .oneshot(request(
            "POST",
            "/api/projeler",
            Some(json!({
                "cariHesapId": 1,
                "projeAdi": "Vinç revizyonu",
                "baslangicTarihi": "2026-09-01"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["projeNo"], "P0002");
    assert_eq!(body["durum"], "devam_ediyor");
}

#[tokio::test]
async fn task_filters_narrow_the_list() {
    let response = seeded_app()
        .oneshot(request("GET", "/api/gorevler?durum=tamamlandi", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_completion_percentage_is_400() {
    let response = seeded_app()
        .oneshot(request(
            "POST",
            "/api/projeler",
            Some(json!({
                "cariHesapId": 1,
                "projeAdi": "Vinç revizyonu",
                "baslangicTarihi": "2026-09-01",
                "tamamlanmaYuzdesi": 120
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_counts_the_seeded_records() {
    let response = seeded_app()
        .oneshot(request("GET", "/api/dashboard/stats", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["cariHesapSayisi"], 2);
    assert_eq!(body["projeSayisi"], 1);
    assert_eq!(body["gorevSayisi"], 1);
    assert_eq!(body["teklifSayisi"], 0);
    assert_eq!(body["projeDurumlari"]["devam_ediyor"], 1);
}

#[tokio::test]
async fn dashboard_accepts_a_period_window() {
    let response = seeded_app()
        .oneshot(request("GET", "/api/dashboard/stats?period=today", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // Seed data is created "now", so it falls inside today's window.
    assert_eq!(body["cariHesapSayisi"], 2);
}

#[tokio::test]
async fn login_round_trip() {
    let app = empty_app();

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/users",
            Some(json!({ "username": "ayse", "password": "gizli-parola" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["username"], "ayse");
    assert!(body.get("passwordHash").is_none());

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "ayse", "password": "yanlis" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "ayse", "password": "gizli-parola" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "ayse");
}

#[tokio::test]
async fn duplicate_username_is_409() {
    let app = empty_app();
    let register = || {
        request(
            "POST",
            "/api/users",
            Some(json!({ "username": "ayse", "password": "gizli-parola" })),
        )
    };
    let first = app.clone().oneshot(register()).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = app.oneshot(register()).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}
