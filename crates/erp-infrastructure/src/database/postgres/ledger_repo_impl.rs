// ============================================================================
// ERP Infrastructure - PostgreSQL Ledger Repository
// File: crates/erp-infrastructure/src/database/postgres/ledger_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use erp_core::domain::{EntryType, LedgerEntry, LedgerEntryUpdate};
use erp_core::error::DomainError;
use erp_core::repositories::LedgerRepository;

use crate::database::db_error;

pub struct PgLedgerRepository {
    pool: PgPool,
}

impl PgLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct LedgerEntryRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub description: String,
    pub entry_type: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl From<LedgerEntryRow> for LedgerEntry {
    fn from(row: LedgerEntryRow) -> Self {
        LedgerEntry {
            id: row.id,
            tenant_id: row.tenant_id,
            description: row.description,
            entry_type: EntryType::from_str(&row.entry_type).unwrap_or(EntryType::Debit),
            amount: row.amount,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LedgerRepository for PgLedgerRepository {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<LedgerEntry>, DomainError> {
        let rows: Vec<LedgerEntryRow> = sqlx::query_as(
            r#"
            SELECT id, tenant_id, description, entry_type, amount, created_at
            FROM ledger_entries
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing ledger entries", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, entry: &LedgerEntry) -> Result<LedgerEntry, DomainError> {
        let row: LedgerEntryRow = sqlx::query_as(
            r#"
            INSERT INTO ledger_entries (id, tenant_id, description, entry_type, amount, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, tenant_id, description, entry_type, amount, created_at
            "#,
        )
        .bind(entry.id)
        .bind(entry.tenant_id)
        .bind(&entry.description)
        .bind(entry.entry_type.as_str())
        .bind(entry.amount)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating ledger entry", e))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
        changes: &LedgerEntryUpdate,
    ) -> Result<LedgerEntry, DomainError> {
        let row: Option<LedgerEntryRow> = sqlx::query_as(
            r#"
            UPDATE ledger_entries
            SET description = $3, entry_type = $4, amount = $5
            WHERE id = $1 AND tenant_id = $2
            RETURNING id, tenant_id, description, entry_type, amount, created_at
            "#,
        )
        .bind(id)
        .bind(tenant_id)
        .bind(&changes.description)
        .bind(changes.entry_type.as_str())
        .bind(changes.amount)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating ledger entry", e))?;

        row.map(|r| r.into())
            .ok_or(DomainError::LedgerEntryNotFound)
    }

    async fn delete(&self, tenant_id: &Uuid, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM ledger_entries
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(id)
        .bind(tenant_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deleting ledger entry", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LedgerEntryNotFound);
        }

        Ok(())
    }
}
