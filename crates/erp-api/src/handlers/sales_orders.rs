// ============================================================================
// ERP API - Sales Order Handlers
// File: crates/erp-api/src/handlers/sales_orders.rs
// ============================================================================
//! Sales order CRUD. Creation with a product link cascades into a stock
//! decrement and a revenue ledger entry inside one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use erp_core::authorization::{authorize, Session};
use erp_core::domain::{OrderStatus, SalesOrder, SalesOrderUpdate};
use erp_core::error::DomainError;
use erp_shared::types::{Action, Resource};

use crate::error::{domain_error, validation_error, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalesOrderRequest {
    pub customer_name: String,
    pub amount: f64,
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSalesOrderRequest {
    pub customer_name: String,
    pub amount: f64,
    pub status: String,
}

/// List sales orders - GET /api/sales-orders
pub async fn list_sales_orders(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<ApiResponse<Vec<SalesOrder>>>, ApiFailure> {
    authorize(&session, Resource::SalesOrder, Action::List).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let orders = state
        .sales_orders
        .list_by_tenant(&tenant_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(orders)))
}

/// Create sales order - POST /api/sales-orders
pub async fn create_sales_order(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<CreateSalesOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SalesOrder>>), ApiFailure> {
    authorize(&session, Resource::SalesOrder, Action::Create).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let order = SalesOrder::new(
        tenant_id,
        payload.customer_name,
        payload.amount,
        payload.product_id,
        payload.quantity,
    )
    .map_err(|e| domain_error(DomainError::from(e)))?;

    let created = state
        .sales_orders
        .create(&order)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// Update sales order - PUT /api/sales-orders/{id}
pub async fn update_sales_order(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSalesOrderRequest>,
) -> Result<Json<ApiResponse<SalesOrder>>, ApiFailure> {
    authorize(&session, Resource::SalesOrder, Action::Update).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let status = OrderStatus::from_str(&payload.status)
        .ok_or_else(|| validation_error("Status must be pending, completed, or cancelled"))?;

    let changes = SalesOrderUpdate {
        customer_name: payload.customer_name.trim().to_string(),
        amount: payload.amount,
        status,
    };
    changes
        .validate()
        .map_err(|e| domain_error(DomainError::from(e)))?;

    let updated = state
        .sales_orders
        .update(&tenant_id, &id, &changes)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(updated)))
}

/// Delete sales order - DELETE /api/sales-orders/{id}
pub async fn delete_sales_order(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    authorize(&session, Resource::SalesOrder, Action::Delete).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    state
        .sales_orders
        .delete(&tenant_id, &id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(())))
}
