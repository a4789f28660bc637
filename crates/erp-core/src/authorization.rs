// ============================================================================
// ERP Core - Authorization Policy
// File: crates/erp-core/src/authorization.rs
// ============================================================================
//! Single authorization policy evaluated uniformly before dispatch.
//!
//! Entity resources are tenant-scoped: they require an admin session whose
//! tenant binding supplies the implicit scope. The super-admin role is the
//! one role-gated escape hatch, and only for the Tenant resource. Tenant
//! self-read narrowing (admin may read its own tenant row only) happens at
//! the service layer, where the target id is known.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use erp_shared::types::{Action, Resource};

use crate::domain::UserRole;
use crate::error::DomainError;

/// Authenticated context derived from a validated token. Scopes all
/// subsequent data access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub role: UserRole,
}

impl Session {
    pub fn new(user_id: Uuid, tenant_id: Option<Uuid>, role: UserRole) -> Self {
        Self {
            user_id,
            tenant_id,
            role,
        }
    }

    /// The tenant scope of this session. Super-admin sessions carry none.
    pub fn require_tenant(&self) -> Result<Uuid, DomainError> {
        self.tenant_id.ok_or(DomainError::Forbidden)
    }
}

/// The uniform authorization gate: `can_access(session, resource, action)`.
pub fn can_access(session: &Session, resource: Resource, action: Action) -> bool {
    match resource {
        Resource::Tenant => match action {
            // Cross-tenant listing and lifecycle mutation are super-admin only.
            Action::List | Action::Administer | Action::Update => {
                session.role == UserRole::Superadmin
            }
            // Reads are granted to both roles; the service narrows admin
            // reads to the session's own tenant.
            Action::Read => true,
            // Tenants are created through registration, never through the
            // tenant resource directly.
            Action::Create | Action::Delete => false,
        },
        Resource::Customer | Resource::Product | Resource::SalesOrder | Resource::LedgerEntry => {
            session.role == UserRole::Admin && session.tenant_id.is_some()
        }
    }
}

/// Evaluate the policy, mapping denial to `Forbidden`.
pub fn authorize(session: &Session, resource: Resource, action: Action) -> Result<(), DomainError> {
    if can_access(session, resource, action) {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_session() -> Session {
        Session::new(Uuid::new_v4(), Some(Uuid::new_v4()), UserRole::Admin)
    }

    fn superadmin_session() -> Session {
        Session::new(Uuid::new_v4(), None, UserRole::Superadmin)
    }

    #[test]
    fn test_admin_owns_entity_resources() {
        let session = admin_session();
        for resource in [
            Resource::Customer,
            Resource::Product,
            Resource::SalesOrder,
            Resource::LedgerEntry,
        ] {
            for action in [
                Action::List,
                Action::Create,
                Action::Update,
                Action::Delete,
            ] {
                assert!(can_access(&session, resource, action));
            }
        }
    }

    #[test]
    fn test_superadmin_gets_no_entity_access() {
        // The escape hatch is Tenant-only; no other entity grants
        // cross-tenant access.
        let session = superadmin_session();
        for resource in [
            Resource::Customer,
            Resource::Product,
            Resource::SalesOrder,
            Resource::LedgerEntry,
        ] {
            assert!(!can_access(&session, resource, Action::List));
            assert!(!can_access(&session, resource, Action::Create));
        }
    }

    #[test]
    fn test_tenant_listing_is_superadmin_only() {
        assert!(can_access(
            &superadmin_session(),
            Resource::Tenant,
            Action::List
        ));
        assert!(!can_access(&admin_session(), Resource::Tenant, Action::List));
    }

    #[test]
    fn test_tenant_administration_is_superadmin_only() {
        assert!(can_access(
            &superadmin_session(),
            Resource::Tenant,
            Action::Administer
        ));
        assert!(!can_access(
            &admin_session(),
            Resource::Tenant,
            Action::Administer
        ));
    }

    #[test]
    fn test_tenant_read_granted_to_both_roles() {
        assert!(can_access(&admin_session(), Resource::Tenant, Action::Read));
        assert!(can_access(
            &superadmin_session(),
            Resource::Tenant,
            Action::Read
        ));
    }

    #[test]
    fn test_admin_without_tenant_binding_denied() {
        let session = Session::new(Uuid::new_v4(), None, UserRole::Admin);
        assert!(!can_access(&session, Resource::Customer, Action::List));
        assert!(session.require_tenant().is_err());
    }

    #[test]
    fn test_authorize_maps_denial_to_forbidden() {
        let err = authorize(&admin_session(), Resource::Tenant, Action::List).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));
    }
}
