//! Product repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Product, ProductUpdate};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Product>, DomainError>;
    async fn create(&self, product: &Product) -> Result<Product, DomainError>;
    async fn update(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
        changes: &ProductUpdate,
    ) -> Result<Product, DomainError>;
    async fn delete(&self, tenant_id: &Uuid, id: &Uuid) -> Result<(), DomainError>;
}
