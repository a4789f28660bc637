//! Ledger entry repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{LedgerEntry, LedgerEntryUpdate};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    async fn list_by_tenant(&self, tenant_id: &Uuid) -> Result<Vec<LedgerEntry>, DomainError>;
    async fn create(&self, entry: &LedgerEntry) -> Result<LedgerEntry, DomainError>;
    async fn update(
        &self,
        tenant_id: &Uuid,
        id: &Uuid,
        changes: &LedgerEntryUpdate,
    ) -> Result<LedgerEntry, DomainError>;
    async fn delete(&self, tenant_id: &Uuid, id: &Uuid) -> Result<(), DomainError>;
}
