use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};

use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::errors::ServiceError;
use crate::storage::{NewProje, ProjeFilter, ProjeUpdate};
use crate::AppState;

async fn list_projeler(
    State(state): State<AppState>,
    Query(filter): Query<ProjeFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let projeler = state.storage.list_projeler(&filter).await?;
    Ok(success_response(projeler))
}

async fn get_proje(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let proje = state
        .storage
        .get_proje(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("proje", id))?;
    Ok(success_response(proje))
}

async fn create_proje(
    State(state): State<AppState>,
    Json(input): Json<NewProje>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&input)?;
    let proje = state.services.projeler.create(input).await?;
    Ok(created_response(proje))
}

async fn update_proje(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ProjeUpdate>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&patch)?;
    let proje = state
        .storage
        .update_proje(id, patch)
        .await?
        .ok_or_else(|| ServiceError::not_found("proje", id))?;
    Ok(success_response(proje))
}

async fn delete_proje(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    if !state.storage.delete_proje(id).await? {
        return Err(ServiceError::not_found("proje", id));
    }
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projeler).post(create_proje))
        .route(
            "/:id",
            get(get_proje).put(update_proje).delete(delete_proje),
        )
}
