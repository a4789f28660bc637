// ============================================================================
// ERP API - Ledger Entry Handlers
// File: crates/erp-api/src/handlers/ledger_entries.rs
// ============================================================================

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use erp_core::authorization::{authorize, Session};
use erp_core::domain::{EntryType, LedgerEntry, LedgerEntryUpdate};
use erp_core::error::DomainError;
use erp_shared::types::{Action, Resource};

use crate::error::{domain_error, validation_error, ApiFailure};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateLedgerEntryRequest {
    pub description: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLedgerEntryRequest {
    pub description: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub amount: f64,
}

/// List ledger entries - GET /api/ledger-entries
pub async fn list_ledger_entries(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<ApiResponse<Vec<LedgerEntry>>>, ApiFailure> {
    authorize(&session, Resource::LedgerEntry, Action::List).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let entries = state
        .ledger_entries
        .list_by_tenant(&tenant_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(entries)))
}

/// Create ledger entry - POST /api/ledger-entries
pub async fn create_ledger_entry(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<CreateLedgerEntryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LedgerEntry>>), ApiFailure> {
    authorize(&session, Resource::LedgerEntry, Action::Create).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let entry_type = EntryType::from_str(&payload.entry_type)
        .ok_or_else(|| validation_error("Type must be either debit or credit"))?;

    let entry = LedgerEntry::new(tenant_id, payload.description, entry_type, payload.amount)
        .map_err(|e| domain_error(DomainError::from(e)))?;

    let created = state
        .ledger_entries
        .create(&entry)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// Update ledger entry - PUT /api/ledger-entries/{id}
pub async fn update_ledger_entry(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLedgerEntryRequest>,
) -> Result<Json<ApiResponse<LedgerEntry>>, ApiFailure> {
    authorize(&session, Resource::LedgerEntry, Action::Update).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    let entry_type = EntryType::from_str(&payload.entry_type)
        .ok_or_else(|| validation_error("Type must be either debit or credit"))?;

    let changes = LedgerEntryUpdate {
        description: payload.description.trim().to_string(),
        entry_type,
        amount: payload.amount,
    };
    changes
        .validate()
        .map_err(|e| domain_error(DomainError::from(e)))?;

    let updated = state
        .ledger_entries
        .update(&tenant_id, &id, &changes)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(updated)))
}

/// Delete ledger entry - DELETE /api/ledger-entries/{id}
pub async fn delete_ledger_entry(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    authorize(&session, Resource::LedgerEntry, Action::Delete).map_err(domain_error)?;
    let tenant_id = session.require_tenant().map_err(domain_error)?;

    state
        .ledger_entries
        .delete(&tenant_id, &id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(())))
}
