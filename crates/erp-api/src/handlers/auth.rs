// ============================================================================
// ERP API - Auth Handlers
// File: crates/erp-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (register, login)

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use erp_core::services::AuthResult;

use crate::error::{domain_error, validation_error, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Register request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub company_name: String,
}

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register handler - POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResult>>), ApiFailure> {
    if payload.email.is_empty() || payload.password.is_empty() || payload.company_name.is_empty() {
        return Err(validation_error("All fields are required"));
    }

    let result = state
        .auth
        .register(&payload.email, &payload.password, &payload.company_name)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(result))))
}

/// Login handler - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResult>>, ApiFailure> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(validation_error("Email and password required"));
    }

    let result = state
        .auth
        .login(&payload.email, &payload.password)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(result)))
}
