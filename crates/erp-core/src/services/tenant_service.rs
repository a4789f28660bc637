// ============================================================================
// ERP Core - Tenant Service
// File: crates/erp-core/src/services/tenant_service.rs
// ============================================================================
//! Tenant administration: the super-admin view across tenants plus the
//! trial/active/suspended lifecycle and plan upgrades.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use erp_shared::types::{Action, Resource};

use crate::authorization::{authorize, Session};
use crate::domain::{SubscriptionPlan, Tenant, UserRole};
use crate::error::DomainError;
use crate::repositories::TenantRepository;

pub struct TenantService {
    tenants: Arc<dyn TenantRepository>,
}

impl TenantService {
    pub fn new(tenants: Arc<dyn TenantRepository>) -> Self {
        Self { tenants }
    }

    /// All tenants, newest first. Super-admin only.
    pub async fn list_tenants(&self, session: &Session) -> Result<Vec<Tenant>, DomainError> {
        authorize(session, Resource::Tenant, Action::List)?;
        self.tenants.list_all().await
    }

    /// A single tenant. Admins may read their own tenant; super-admin may
    /// read any.
    pub async fn get_tenant(&self, session: &Session, id: &Uuid) -> Result<Tenant, DomainError> {
        authorize(session, Resource::Tenant, Action::Read)?;

        if session.role == UserRole::Admin && session.tenant_id != Some(*id) {
            return Err(DomainError::Forbidden);
        }

        self.tenants
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TenantNotFound)
    }

    pub async fn activate_tenant(
        &self,
        session: &Session,
        id: &Uuid,
    ) -> Result<Tenant, DomainError> {
        authorize(session, Resource::Tenant, Action::Administer)?;

        let mut tenant = self
            .tenants
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TenantNotFound)?;
        tenant.activate()?;

        info!("Tenant activated: {}", id);
        self.tenants.update(&tenant).await
    }

    pub async fn suspend_tenant(
        &self,
        session: &Session,
        id: &Uuid,
    ) -> Result<Tenant, DomainError> {
        authorize(session, Resource::Tenant, Action::Administer)?;

        let mut tenant = self
            .tenants
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TenantNotFound)?;
        tenant.suspend()?;

        info!("Tenant suspended: {}", id);
        self.tenants.update(&tenant).await
    }

    pub async fn upgrade_plan(
        &self,
        session: &Session,
        id: &Uuid,
        plan: SubscriptionPlan,
    ) -> Result<Tenant, DomainError> {
        authorize(session, Resource::Tenant, Action::Administer)?;

        let mut tenant = self
            .tenants
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TenantNotFound)?;
        tenant.upgrade_plan(plan);

        info!("Tenant {} moved to plan {}", id, plan.as_str());
        self.tenants.update(&tenant).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tenant_repository::MockTenantRepository;

    fn superadmin() -> Session {
        Session::new(Uuid::new_v4(), None, UserRole::Superadmin)
    }

    fn admin_of(tenant_id: Uuid) -> Session {
        Session::new(Uuid::new_v4(), Some(tenant_id), UserRole::Admin)
    }

    fn sample_tenant() -> Tenant {
        Tenant::new("Acme".to_string(), "a@x.com".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_superadmin_lists_all_tenants() {
        let mut repo = MockTenantRepository::new();
        repo.expect_list_all()
            .returning(|| Ok(vec![sample_tenant(), sample_tenant()]));

        let service = TenantService::new(Arc::new(repo));
        let tenants = service.list_tenants(&superadmin()).await.unwrap();
        assert_eq!(tenants.len(), 2);
    }

    #[tokio::test]
    async fn test_admin_cannot_list_tenants() {
        let mut repo = MockTenantRepository::new();
        repo.expect_list_all().times(0);

        let service = TenantService::new(Arc::new(repo));
        let err = service
            .list_tenants(&admin_of(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));
    }

    #[tokio::test]
    async fn test_admin_reads_own_tenant_only() {
        let tenant = sample_tenant();
        let tenant_id = tenant.id;
        let tenant_clone = tenant.clone();

        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(tenant_clone.clone())));

        let service = TenantService::new(Arc::new(repo));

        let own = service
            .get_tenant(&admin_of(tenant_id), &tenant_id)
            .await
            .unwrap();
        assert_eq!(own.id, tenant_id);

        let err = service
            .get_tenant(&admin_of(Uuid::new_v4()), &tenant_id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));
    }

    #[tokio::test]
    async fn test_activate_then_suspend() {
        let tenant = sample_tenant();
        let tenant_id = tenant.id;

        let mut repo = MockTenantRepository::new();
        let state = std::sync::Mutex::new(tenant);
        // The mock hands out the current state and records updates, so the
        // two lifecycle calls see each other's effects.
        let shared = Arc::new(state);
        let read = Arc::clone(&shared);
        let write = Arc::clone(&shared);

        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(read.lock().unwrap().clone())));
        repo.expect_update().returning(move |t| {
            *write.lock().unwrap() = t.clone();
            Ok(t.clone())
        });

        let service = TenantService::new(Arc::new(repo));
        let session = superadmin();

        let active = service.activate_tenant(&session, &tenant_id).await.unwrap();
        assert_eq!(active.status, crate::domain::TenantStatus::Active);

        let suspended = service.suspend_tenant(&session, &tenant_id).await.unwrap();
        assert_eq!(suspended.status, crate::domain::TenantStatus::Suspended);
    }

    #[tokio::test]
    async fn test_suspend_trial_tenant_rejected() {
        let tenant = sample_tenant();
        let tenant_id = tenant.id;

        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(tenant.clone())));
        repo.expect_update().times(0);

        let service = TenantService::new(Arc::new(repo));
        let err = service
            .suspend_tenant(&superadmin(), &tenant_id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition(_, _)));
    }

    #[tokio::test]
    async fn test_upgrade_plan_superadmin_only() {
        let tenant = sample_tenant();
        let tenant_id = tenant.id;
        let tenant_clone = tenant.clone();

        let mut repo = MockTenantRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(tenant_clone.clone())));
        repo.expect_update().returning(|t| Ok(t.clone()));

        let service = TenantService::new(Arc::new(repo));

        let upgraded = service
            .upgrade_plan(&superadmin(), &tenant_id, SubscriptionPlan::Premium)
            .await
            .unwrap();
        assert_eq!(upgraded.plan, SubscriptionPlan::Premium);

        let err = service
            .upgrade_plan(
                &admin_of(tenant_id),
                &tenant_id,
                SubscriptionPlan::Enterprise,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));
    }
}
