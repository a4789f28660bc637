// ============================================================================
// ERP API - Tenant Handlers
// File: crates/erp-api/src/handlers/tenants.rs
// ============================================================================
//! Tenant routes: the super-admin listing plus per-tenant reads and
//! lifecycle administration.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use erp_core::authorization::Session;
use erp_core::domain::{SubscriptionPlan, Tenant};

use crate::error::{domain_error, validation_error, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

/// List all tenants - GET /api/tenants (superadmin only)
pub async fn list_tenants(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<ApiResponse<Vec<Tenant>>>, ApiFailure> {
    let tenants = state
        .tenants
        .list_tenants(&session)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(tenants)))
}

/// Get tenant info - GET /api/tenants/{id} (self or superadmin)
pub async fn get_tenant(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Tenant>>, ApiFailure> {
    let tenant = state
        .tenants
        .get_tenant(&session, &id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(tenant)))
}

/// Activate tenant - PUT /api/tenants/{id}/activate (superadmin only)
pub async fn activate_tenant(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Tenant>>, ApiFailure> {
    let tenant = state
        .tenants
        .activate_tenant(&session, &id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(tenant)))
}

/// Suspend tenant - PUT /api/tenants/{id}/suspend (superadmin only)
pub async fn suspend_tenant(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Tenant>>, ApiFailure> {
    let tenant = state
        .tenants
        .suspend_tenant(&session, &id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(tenant)))
}

#[derive(Debug, Deserialize)]
pub struct UpgradePlanRequest {
    pub plan: String,
}

/// Upgrade tenant plan - PUT /api/tenants/{id}/plan (superadmin only)
pub async fn upgrade_plan(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpgradePlanRequest>,
) -> Result<Json<ApiResponse<Tenant>>, ApiFailure> {
    let plan = SubscriptionPlan::from_str(&payload.plan)
        .ok_or_else(|| validation_error("Unknown subscription plan"))?;

    let tenant = state
        .tenants
        .upgrade_plan(&session, &id, plan)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(tenant)))
}
