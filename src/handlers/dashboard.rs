use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;

use super::common::success_response;
use crate::errors::ServiceError;
use crate::services::dashboard::Period;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub period: Option<Period>,
}

async fn stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let stats = state.services.dashboard.stats(params.period).await?;
    Ok(success_response(stats))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}
