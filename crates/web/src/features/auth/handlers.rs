use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{WebError, WebResult};

use super::services::{self, AuthState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token for the admin endpoints", body = LoginResponse),
        (status = 401, description = "Wrong credentials or login disabled")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> WebResult<Json<LoginResponse>> {
    let token = services::login(&state, &req.username, &req.password)
        .ok_or(WebError::Unauthorized)?;

    Ok(Json(LoginResponse { token }))
}
