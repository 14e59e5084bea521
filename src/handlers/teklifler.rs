use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};

use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::errors::ServiceError;
use crate::storage::{NewTeklif, TeklifFilter, TeklifUpdateRequest};
use crate::AppState;

async fn list_teklifler(
    State(state): State<AppState>,
    Query(filter): Query<TeklifFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let teklifler = state.services.teklifler.list(&filter).await?;
    Ok(success_response(teklifler))
}

/// Detail response nests the quote's line items.
async fn get_teklif(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let detay = state
        .services
        .teklifler
        .get_detay(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("teklif", id))?;
    Ok(success_response(detay))
}

async fn create_teklif(
    State(state): State<AppState>,
    Json(input): Json<NewTeklif>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&input)?;
    let detay = state.services.teklifler.create(input).await?;
    Ok(created_response(detay))
}

async fn update_teklif(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<TeklifUpdateRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&request)?;
    let detay = state
        .services
        .teklifler
        .update(id, request)
        .await?
        .ok_or_else(|| ServiceError::not_found("teklif", id))?;
    Ok(success_response(detay))
}

async fn delete_teklif(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    if !state.services.teklifler.delete(id).await? {
        return Err(ServiceError::not_found("teklif", id));
    }
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teklifler).post(create_teklif))
        .route(
            "/:id",
            get(get_teklif).put(update_teklif).delete(delete_teklif),
        )
}
