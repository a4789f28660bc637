// ============================================================================
// ERP API - Customer Handlers
// File: crates/erp-api/src/handlers/customers.rs
// ============================================================================
//! Tenant-scoped customer CRUD. The tenant id is always taken from the
//! session, never from the request body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use erp_core::authorization::{authorize, Session};
use erp_core::domain::{Customer, CustomerUpdate};
use erp_core::error::DomainError;
use erp_shared::types::{Action, Resource};

use crate::error::{domain_error, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// List customers - GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<ApiResponse<Vec<Customer>>>, ApiFailure> {
    authorize(&session, Resource::Customer, Action::List).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let customers = state
        .customers
        .list_by_tenant(&tenant_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(customers)))
}

/// Create customer - POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Customer>>), ApiFailure> {
    authorize(&session, Resource::Customer, Action::Create).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let customer = Customer::new(tenant_id, payload.name, payload.email, payload.phone)
        .map_err(|e| domain_error(DomainError::from(e)))?;

    let created = state
        .customers
        .create(&customer)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// Update customer - PUT /api/customers/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<Customer>>, ApiFailure> {
    authorize(&session, Resource::Customer, Action::Update).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let changes = CustomerUpdate {
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_lowercase(),
        phone: payload.phone,
    };
    changes
        .validate()
        .map_err(|e| domain_error(DomainError::from(e)))?;

    let updated = state
        .customers
        .update(&tenant_id, &id, &changes)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(updated)))
}

/// Delete customer - DELETE /api/customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    authorize(&session, Resource::Customer, Action::Delete).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    state
        .customers
        .delete(&tenant_id, &id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(())))
}
