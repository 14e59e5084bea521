use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, put},
    Router,
};
use serde::Deserialize;

use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::errors::ServiceError;
use crate::storage::{
    CariHesapUpdate, NewCariHareket, NewCariHesap, NewYetkiliKisi, YetkiliKisiUpdate,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

async fn list_cari_hesaplar(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let hesaplar = state
        .storage
        .list_cari_hesaplar(params.search.as_deref())
        .await?;
    Ok(success_response(hesaplar))
}

async fn get_cari_hesap(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let hesap = state
        .storage
        .get_cari_hesap(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("cari hesap", id))?;
    Ok(success_response(hesap))
}

async fn create_cari_hesap(
    State(state): State<AppState>,
    Json(input): Json<NewCariHesap>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&input)?;
    let hesap = state.storage.create_cari_hesap(input).await?;
    Ok(created_response(hesap))
}

async fn update_cari_hesap(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<CariHesapUpdate>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&patch)?;
    let hesap = state
        .storage
        .update_cari_hesap(id, patch)
        .await?
        .ok_or_else(|| ServiceError::not_found("cari hesap", id))?;
    Ok(success_response(hesap))
}

/// Soft delete: flips `is_active` off instead of removing the row.
async fn delete_cari_hesap(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    if !state.storage.deactivate_cari_hesap(id).await? {
        return Err(ServiceError::not_found("cari hesap", id));
    }
    Ok(no_content_response())
}

async fn list_yetkili_kisiler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .storage
        .get_cari_hesap(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("cari hesap", id))?;
    let kisiler = state.storage.list_yetkili_kisiler(id).await?;
    Ok(success_response(kisiler))
}

async fn create_yetkili_kisi(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<NewYetkiliKisi>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&input)?;
    state
        .storage
        .get_cari_hesap(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("cari hesap", id))?;
    let kisi = state.storage.create_yetkili_kisi(id, input).await?;
    Ok(created_response(kisi))
}

async fn update_yetkili_kisi(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<YetkiliKisiUpdate>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&patch)?;
    let kisi = state
        .storage
        .update_yetkili_kisi(id, patch)
        .await?
        .ok_or_else(|| ServiceError::not_found("yetkili kişi", id))?;
    Ok(success_response(kisi))
}

async fn delete_yetkili_kisi(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    if !state.storage.delete_yetkili_kisi(id).await? {
        return Err(ServiceError::not_found("yetkili kişi", id));
    }
    Ok(no_content_response())
}

async fn list_cari_hareketler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .storage
        .get_cari_hesap(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("cari hesap", id))?;
    let hareketler = state.storage.list_cari_hareketler(id).await?;
    Ok(success_response(hareketler))
}

async fn create_cari_hareket(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<NewCariHareket>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&input)?;
    state
        .storage
        .get_cari_hesap(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("cari hesap", id))?;
    let hareket = state.storage.create_cari_hareket(id, input).await?;
    Ok(created_response(hareket))
}

async fn delete_cari_hareket(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    if !state.storage.delete_cari_hareket(id).await? {
        return Err(ServiceError::not_found("cari hareket", id));
    }
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cari_hesaplar).post(create_cari_hesap))
        .route(
            "/:id",
            get(get_cari_hesap)
                .put(update_cari_hesap)
                .delete(delete_cari_hesap),
        )
        .route(
            "/:id/yetkili-kisiler",
            get(list_yetkili_kisiler).post(create_yetkili_kisi),
        )
        .route(
            "/:id/hareketler",
            get(list_cari_hareketler).post(create_cari_hareket),
        )
}

pub fn yetkili_kisi_routes() -> Router<AppState> {
    Router::new().route("/:id", put(update_yetkili_kisi).delete(delete_yetkili_kisi))
}

pub fn hareket_routes() -> Router<AppState> {
    Router::new().route("/:id", delete(delete_cari_hareket))
}
