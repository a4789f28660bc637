// ============================================================================
// ERP API - Product Handlers
// File: crates/erp-api/src/handlers/products.rs
// ============================================================================

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use erp_core::authorization::{authorize, Session};
use erp_core::domain::{Product, ProductUpdate};
use erp_core::error::DomainError;
use erp_shared::types::{Action, Resource};

use crate::error::{domain_error, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

/// List products - GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiFailure> {
    authorize(&session, Resource::Product, Action::List).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let products = state
        .products
        .list_by_tenant(&tenant_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(products)))
}

/// Create product - POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), ApiFailure> {
    authorize(&session, Resource::Product, Action::Create).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let product = Product::new(
        tenant_id,
        payload.name,
        payload.description,
        payload.price,
        payload.stock,
    )
    .map_err(|e| domain_error(DomainError::from(e)))?;

    let created = state
        .products
        .create(&product)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// Update product - PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiFailure> {
    authorize(&session, Resource::Product, Action::Update).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let changes = ProductUpdate {
        name: payload.name.trim().to_string(),
        description: payload.description,
        price: payload.price,
        stock: payload.stock,
    };
    changes
        .validate()
        .map_err(|e| domain_error(DomainError::from(e)))?;

    let updated = state
        .products
        .update(&tenant_id, &id, &changes)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(updated)))
}

/// Delete product - DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    authorize(&session, Resource::Product, Action::Delete).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    state
        .products
        .delete(&tenant_id, &id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(())))
}
