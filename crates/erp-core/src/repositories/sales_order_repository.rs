//! Sales order repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{SalesOrder, SalesOrderUpdate};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalesOrderRepository: Send + Sync {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<SalesOrder>, DomainError>;
    /// Insert the order. When the order carries a product link, the stock
    /// decrement and the revenue ledger entry are written in the same
    /// transaction; all three writes commit or none do.
    async fn create(&self, order: &SalesOrder) -> Result<SalesOrder, DomainError>;
    async fn update(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
        changes: &SalesOrderUpdate,
    ) -> Result<SalesOrder, DomainError>;
    async fn delete(&self, tenant_id: &Uuid, id: &Uuid) -> Result<(), DomainError>;
}
