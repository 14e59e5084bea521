use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::{created_response, success_response, validate_input};
use crate::entities::user::SafeUser;
use crate::errors::ServiceError;
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 64, message = "Kullanıcı adı 3-64 karakter olmalı"))]
    pub username: String,
    #[validate(length(min = 8, message = "Parola en az 8 karakter olmalı"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Kullanıcı adı gerekli"))]
    pub username: String,
    #[validate(length(min = 1, message = "Parola gerekli"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: SafeUser,
}

async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&request)?;
    let user = state
        .services
        .users
        .register(&request.username, &request.password)
        .await?;
    Ok(created_response(user))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&request)?;
    let (token, user) = state
        .services
        .users
        .login(&request.username, &request.password)
        .await?;
    Ok(success_response(LoginResponse { token, user }))
}

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user))
}

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
