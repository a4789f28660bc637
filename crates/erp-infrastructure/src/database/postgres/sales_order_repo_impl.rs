// ============================================================================
// ERP Infrastructure - PostgreSQL Sales Order Repository
// File: crates/erp-infrastructure/src/database/postgres/sales_order_repo_impl.rs
// ============================================================================
//! Sales order persistence. Order creation with a product link runs the
//! order insert, the stock decrement, and the revenue ledger entry in one
//! transaction; a failure at any step rolls the whole cascade back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use erp_core::domain::{OrderStatus, SalesOrder, SalesOrderUpdate};
use erp_core::error::DomainError;
use erp_core::repositories::SalesOrderRepository;

use crate::database::db_error;

pub struct PgSalesOrderRepository {
    pool: PgPool,
}

impl PgSalesOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct SalesOrderRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub customer_name: String,
    pub amount: f64,
    pub status: String,
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<SalesOrderRow> for SalesOrder {
    fn from(row: SalesOrderRow) -> Self {
        SalesOrder {
            id: row.id,
            tenant_id: row.tenant_id,
            customer_name: row.customer_name,
            amount: row.amount,
            status: OrderStatus::from_str(&row.status).unwrap_or_default(),
            product_id: row.product_id,
            quantity: row.quantity,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl SalesOrderRepository for PgSalesOrderRepository {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<SalesOrder>, DomainError> {
        let rows: Vec<SalesOrderRow> = sqlx::query_as(
            r#"
            SELECT id, tenant_id, customer_name, amount, status, product_id, quantity, created_at
            FROM sales_orders
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing sales orders", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, order: &SalesOrder) -> Result<SalesOrder, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting sales order transaction", e))?;

        let row: SalesOrderRow = sqlx::query_as(
            r#"
            INSERT INTO sales_orders
                (id, tenant_id, customer_name, amount, status, product_id, quantity, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, tenant_id, customer_name, amount, status, product_id, quantity, created_at
            "#,
        )
        .bind(order.id)
        .bind(order.tenant_id)
        .bind(&order.customer_name)
        .bind(order.amount)
        .bind(order.status.as_str())
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("creating sales order", e))?;

        if let (Some(product_id), Some(quantity)) = (order.product_id, order.quantity) {
            let decremented = sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - $1
                WHERE id = $2 AND tenant_id = $3 AND stock >= $1
                "#,
            )
            .bind(quantity)
            .bind(product_id)
            .bind(order.tenant_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("decrementing stock", e))?;

            if decremented.rows_affected() == 0 {
                // Either the product is not this tenant's or the stock ran
                // out; dropping the transaction rolls the order insert back.
                let exists: Option<(Uuid,)> =
                    sqlx::query_as("SELECT id FROM products WHERE id = $1 AND tenant_id = $2")
                        .bind(product_id)
                        .bind(order.tenant_id)
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(|e| db_error("checking product", e))?;

                return Err(match exists {
                    Some(_) => DomainError::InsufficientStock,
                    None => DomainError::ProductNotFound,
                });
            }

            let entry = order.revenue_entry()?;
            sqlx::query(
                r#"
                INSERT INTO ledger_entries
                    (id, tenant_id, description, entry_type, amount, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(entry.id)
            .bind(entry.tenant_id)
            .bind(&entry.description)
            .bind(entry.entry_type.as_str())
            .bind(entry.amount)
            .bind(entry.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("booking revenue entry", e))?;

            info!(
                "Sales order {} cascaded: stock -{} on product {}",
                row.id, quantity, product_id
            );
        }

        tx.commit()
            .await
            .map_err(|e| db_error("committing sales order", e))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
        changes: &SalesOrderUpdate,
    ) -> Result<SalesOrder, DomainError> {
        let row: Option<SalesOrderRow> = sqlx::query_as(
            r#"
            UPDATE sales_orders
            SET customer_name = $3, amount = $4, status = $5
            WHERE id = $1 AND tenant_id = $2
            RETURNING id, tenant_id, customer_name, amount, status, product_id, quantity, created_at
            "#,
        )
        .bind(id)
        .bind(tenant_id)
        .bind(&changes.customer_name)
        .bind(changes.amount)
        .bind(changes.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating sales order", e))?;

        row.map(|r| r.into()).ok_or(DomainError::SalesOrderNotFound)
    }

    async fn delete(&self, tenant_id: &Uuid, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM sales_orders
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(id)
        .bind(tenant_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deleting sales order", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SalesOrderNotFound);
        }

        Ok(())
    }
}
