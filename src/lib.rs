//! İşletme takip API'si: cari hesaplar, teklifler, projeler ve görevler
//! için HTTP/JSON servis katmanı.

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod storage;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers::AppServices;
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: AppConfig) -> Self {
        let services = AppServices::new(storage.clone(), &config);
        Self {
            storage,
            config,
            services,
        }
    }
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let backend = if state.config.database_url.is_some() {
        "database"
    } else {
        "memory"
    };
    Json(serde_json::json!({
        "status": "ok",
        "backend": backend,
        "timestamp": chrono::Utc::now(),
    }))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    match config
        .cors_allowed_origin
        .as_deref()
        .map(str::parse::<HeaderValue>)
    {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any),
        Some(Err(_)) => {
            warn!("invalid cors_allowed_origin value; falling back to permissive CORS");
            CorsLayer::permissive()
        }
        None => CorsLayer::permissive(),
    }
}

/// Builds the full application router over the given state.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .route("/health", get(health))
        .nest("/api/cari-hesaplar", handlers::cari_hesaplar::routes())
        .nest(
            "/api/yetkili-kisiler",
            handlers::cari_hesaplar::yetkili_kisi_routes(),
        )
        .nest(
            "/api/cari-hareketler",
            handlers::cari_hesaplar::hareket_routes(),
        )
        .nest("/api/teklifler", handlers::teklifler::routes())
        .nest("/api/projeler", handlers::projeler::routes())
        .nest("/api/gorevler", handlers::gorevler::routes())
        .nest("/api/dashboard", handlers::dashboard::routes())
        .nest("/api/users", handlers::auth::user_routes())
        .nest("/api/auth", handlers::auth::auth_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
