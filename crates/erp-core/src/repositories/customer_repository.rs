//! Customer repository trait (port)
//!
//! Every operation is bound to a tenant id taken from the caller's session.
//! Updates and deletes are conditional on `(id, tenant_id)`; a miss is
//! reported as not-found whether the id is absent or owned by another tenant.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Customer, CustomerUpdate};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<Customer>, DomainError>;
    async fn create(&self, customer: &Customer) -> Result<Customer, DomainError>;
    async fn update(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
        changes: &CustomerUpdate,
    ) -> Result<Customer, DomainError>;
    async fn delete(&self, tenant_id: &Uuid, id: &Uuid) -> Result<(), DomainError>;
}
