//! Tenant repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Tenant, User};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError>;
    /// All tenants, newest first. Super-admin listing.
    async fn list_all(&self) -> Result<Vec<Tenant>, DomainError>;
    /// Registration: tenant and its admin user are created in one
    /// transaction; a duplicate email leaves neither row behind.
    async fn create_with_admin(
        &self,
        tenant: &Tenant,
        admin: &User,
    ) -> Result<(Tenant, User), DomainError>;
    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError>;
}
