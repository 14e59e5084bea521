use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};

use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::errors::ServiceError;
use crate::storage::{GorevFilter, GorevUpdate, NewGorev};
use crate::AppState;

async fn list_gorevler(
    State(state): State<AppState>,
    Query(filter): Query<GorevFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let gorevler = state.storage.list_gorevler(&filter).await?;
    Ok(success_response(gorevler))
}

async fn get_gorev(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let gorev = state
        .storage
        .get_gorev(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("görev", id))?;
    Ok(success_response(gorev))
}

async fn create_gorev(
    State(state): State<AppState>,
    Json(input): Json<NewGorev>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&input)?;
    let gorev = state.storage.create_gorev(input).await?;
    Ok(created_response(gorev))
}

async fn update_gorev(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<GorevUpdate>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&patch)?;
    let gorev = state
        .storage
        .update_gorev(id, patch)
        .await?
        .ok_or_else(|| ServiceError::not_found("görev", id))?;
    Ok(success_response(gorev))
}

async fn delete_gorev(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    if !state.storage.delete_gorev(id).await? {
        return Err(ServiceError::not_found("görev", id));
    }
    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_gorevler).post(create_gorev))
        .route(
            "/:id",
            get(get_gorev).put(update_gorev).delete(delete_gorev),
        )
}
