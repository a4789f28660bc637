// ============================================================================
// ERP Infrastructure - PostgreSQL Product Repository
// File: crates/erp-infrastructure/src/database/postgres/product_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use erp_core::domain::{Product, ProductUpdate};
use erp_core::error::DomainError;
use erp_core::repositories::ProductRepository;

use crate::database::db_error;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct ProductRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            tenant_id: row.tenant_id,
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, tenant_id, name, description, price, stock, created_at
            FROM products
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing products", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, product: &Product) -> Result<Product, DomainError> {
        let row: ProductRow = sqlx::query_as(
            r#"
            INSERT INTO products (id, tenant_id, name, description, price, stock, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, tenant_id, name, description, price, stock, created_at
            "#,
        )
        .bind(product.id)
        .bind(product.tenant_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating product", e))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
        changes: &ProductUpdate,
    ) -> Result<Product, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            UPDATE products
            SET name = $3, description = $4, price = $5, stock = $6
            WHERE id = $1 AND tenant_id = $2
            RETURNING id, tenant_id, name, description, price, stock, created_at
            "#,
        )
        .bind(id)
        .bind(tenant_id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.price)
        .bind(changes.stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating product", e))?;

        row.map(|r| r.into()).ok_or(DomainError::ProductNotFound)
    }

    async fn delete(&self, tenant_id: &Uuid, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(id)
        .bind(tenant_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deleting product", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProductNotFound);
        }

        Ok(())
    }
}
