// ============================================================================
// ERP Infrastructure - PostgreSQL Customer Repository
// File: crates/erp-infrastructure/src/database/postgres/customer_repo_impl.rs
// ============================================================================
//! Tenant-scoped customer persistence. Updates and deletes are conditional
//! on `(id, tenant_id)`; a zero-row match is reported as not-found without
//! revealing whether the id exists under another tenant.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use erp_core::domain::{Customer, CustomerUpdate};
use erp_core::error::DomainError;
use erp_core::repositories::CustomerRepository;

use crate::database::db_error;

pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct CustomerRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            tenant_id: row.tenant_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Customer>, DomainError> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, tenant_id, name, email, phone, created_at
            FROM customers
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing customers", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let row: CustomerRow = sqlx::query_as(
            r#"
            INSERT INTO customers (id, tenant_id, name, email, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, tenant_id, name, email, phone, created_at
            "#,
        )
        .bind(customer.id)
        .bind(customer.tenant_id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating customer", e))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
        changes: &CustomerUpdate,
    ) -> Result<Customer, DomainError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            UPDATE customers
            SET name = $3, email = $4, phone = $5
            WHERE id = $1 AND tenant_id = $2
            RETURNING id, tenant_id, name, email, phone, created_at
            "#,
        )
        .bind(id)
        .bind(tenant_id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating customer", e))?;

        row.map(|r| r.into()).ok_or(DomainError::CustomerNotFound)
    }

    async fn delete(&self, tenant_id: &Uuid, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM customers
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(id)
        .bind(tenant_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deleting customer", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CustomerNotFound);
        }

        Ok(())
    }
}
