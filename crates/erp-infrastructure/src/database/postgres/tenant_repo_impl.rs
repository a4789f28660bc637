// ============================================================================
// ERP Infrastructure - PostgreSQL Tenant Repository
// File: crates/erp-infrastructure/src/database/postgres/tenant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use erp_core::domain::{SubscriptionPlan, Tenant, TenantStatus, User, UserRole};
use erp_core::error::DomainError;
use erp_core::repositories::TenantRepository;

use crate::database::db_error;

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TenantRow {
    pub id: Uuid,
    pub company_name: String,
    pub email: String,
    pub plan: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            company_name: row.company_name,
            email: row.email,
            plan: SubscriptionPlan::from_str(&row.plan).unwrap_or_default(),
            status: TenantStatus::from_str(&row.status).unwrap_or_default(),
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            tenant_id: row.tenant_id,
            email: row.email,
            password_hash: row.password_hash,
            role: UserRole::from_str(&row.role).unwrap_or(UserRole::Admin),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, company_name, email, plan, status, created_at, modified_at
            FROM tenants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding tenant by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_all(&self) -> Result<Vec<Tenant>, DomainError> {
        let rows: Vec<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, company_name, email, plan, status, created_at, modified_at
            FROM tenants
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing tenants", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create_with_admin(
        &self,
        tenant: &Tenant,
        admin: &User,
    ) -> Result<(Tenant, User), DomainError> {
        info!("Creating tenant: {}", tenant.company_name);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting registration transaction", e))?;

        let tenant_row: TenantRow = sqlx::query_as(
            r#"
            INSERT INTO tenants (id, company_name, email, plan, status, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, company_name, email, plan, status, created_at, modified_at
            "#,
        )
        .bind(tenant.id)
        .bind(&tenant.company_name)
        .bind(&tenant.email)
        .bind(tenant.plan.as_str())
        .bind(tenant.status.as_str())
        .bind(tenant.created_at)
        .bind(tenant.modified_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("creating tenant", e))?;

        let user_row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (id, tenant_id, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, tenant_id, email, password_hash, role, created_at
            "#,
        )
        .bind(admin.id)
        .bind(admin.tenant_id)
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.role.as_str())
        .bind(admin.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            // Dropping the transaction rolls the tenant insert back; a
            // duplicate email leaves no orphaned tenant behind.
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::EmailAlreadyExists(admin.email.clone())
            } else {
                db_error("creating admin user", e)
            }
        })?;

        tx.commit()
            .await
            .map_err(|e| db_error("committing registration", e))?;

        info!("Tenant created successfully: {}", tenant_row.id);
        Ok((tenant_row.into(), user_row.into()))
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            UPDATE tenants
            SET
                company_name = $2,
                email = $3,
                plan = $4,
                status = $5,
                modified_at = $6
            WHERE id = $1
            RETURNING id, company_name, email, plan, status, created_at, modified_at
            "#,
        )
        .bind(tenant.id)
        .bind(&tenant.company_name)
        .bind(&tenant.email)
        .bind(tenant.plan.as_str())
        .bind(tenant.status.as_str())
        .bind(tenant.modified_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating tenant", e))?;

        row.map(|r| r.into()).ok_or(DomainError::TenantNotFound)
    }
}
