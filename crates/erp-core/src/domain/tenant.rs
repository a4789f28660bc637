// ============================================================================
// ERP Core - Tenant Entity
// File: crates/erp-core/src/domain/tenant.rs
// Description: Tenant organization with subscription management
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;

/// Subscription plan enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    Trial,
    Basic,
    Premium,
    Enterprise,
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Trial => "trial",
            SubscriptionPlan::Basic => "basic",
            SubscriptionPlan::Premium => "premium",
            SubscriptionPlan::Enterprise => "enterprise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "trial" => Some(SubscriptionPlan::Trial),
            "basic" => Some(SubscriptionPlan::Basic),
            "premium" => Some(SubscriptionPlan::Premium),
            "enterprise" => Some(SubscriptionPlan::Enterprise),
            _ => None,
        }
    }

    /// Monthly fee attached to the plan. Upgrading mutates the fee with the
    /// plan, without any status transition.
    pub fn monthly_fee(&self) -> f64 {
        match self {
            SubscriptionPlan::Trial => 0.0,
            SubscriptionPlan::Basic => 29.0,
            SubscriptionPlan::Premium => 99.0,
            SubscriptionPlan::Enterprise => 299.0,
        }
    }
}

impl Default for SubscriptionPlan {
    fn default() -> Self {
        SubscriptionPlan::Trial
    }
}

/// Tenant lifecycle status.
///
/// Transitions are super-admin operations only:
/// `trial -> active -> suspended`. There is no automatic trial expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    Trial,
    Active,
    Suspended,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantStatus::Trial => "trial",
            TenantStatus::Active => "active",
            TenantStatus::Suspended => "suspended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "trial" => Some(TenantStatus::Trial),
            "active" => Some(TenantStatus::Active),
            "suspended" => Some(TenantStatus::Suspended),
            _ => None,
        }
    }
}

impl Default for TenantStatus {
    fn default() -> Self {
        TenantStatus::Trial
    }
}

/// Tenant entity: an isolated customer organization owning its own rows
/// across all domain entities.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Tenant {
    pub id: Uuid,

    #[validate(length(min = 2, max = 200, message = "Company name must be between 2 and 200 characters"))]
    pub company_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub plan: SubscriptionPlan,
    pub status: TenantStatus,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Tenant {
    pub fn new(company_name: String, email: String) -> Result<Self, validator::ValidationErrors> {
        let tenant = Self {
            id: Uuid::new_v4(),
            company_name: company_name.trim().to_string(),
            email: email.trim().to_lowercase(),
            plan: SubscriptionPlan::Trial,
            status: TenantStatus::Trial,
            created_at: Utc::now(),
            modified_at: None,
        };

        tenant.validate()?;
        Ok(tenant)
    }

    pub fn activate(&mut self) -> Result<(), DomainError> {
        match self.status {
            TenantStatus::Trial => {
                self.status = TenantStatus::Active;
                self.modified_at = Some(Utc::now());
                Ok(())
            }
            other => Err(DomainError::InvalidStatusTransition(
                other.as_str(),
                TenantStatus::Active.as_str(),
            )),
        }
    }

    pub fn suspend(&mut self) -> Result<(), DomainError> {
        match self.status {
            TenantStatus::Active => {
                self.status = TenantStatus::Suspended;
                self.modified_at = Some(Utc::now());
                Ok(())
            }
            other => Err(DomainError::InvalidStatusTransition(
                other.as_str(),
                TenantStatus::Suspended.as_str(),
            )),
        }
    }

    pub fn upgrade_plan(&mut self, plan: SubscriptionPlan) {
        self.plan = plan;
        self.modified_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tenant() {
        let tenant = Tenant::new("Acme Corp".to_string(), "a@x.com".to_string()).unwrap();
        assert_eq!(tenant.status, TenantStatus::Trial);
        assert_eq!(tenant.plan, SubscriptionPlan::Trial);
    }

    #[test]
    fn test_create_tenant_invalid_email() {
        assert!(Tenant::new("Acme Corp".to_string(), "not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_status_transitions() {
        let mut tenant = Tenant::new("Acme Corp".to_string(), "a@x.com".to_string()).unwrap();

        tenant.activate().unwrap();
        assert_eq!(tenant.status, TenantStatus::Active);

        tenant.suspend().unwrap();
        assert_eq!(tenant.status, TenantStatus::Suspended);
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut tenant = Tenant::new("Acme Corp".to_string(), "a@x.com".to_string()).unwrap();

        // Cannot suspend a trial tenant
        assert!(tenant.suspend().is_err());

        tenant.activate().unwrap();
        // Cannot activate twice
        assert!(tenant.activate().is_err());
    }

    #[test]
    fn test_plan_upgrade_keeps_status() {
        let mut tenant = Tenant::new("Acme Corp".to_string(), "a@x.com".to_string()).unwrap();
        tenant.upgrade_plan(SubscriptionPlan::Premium);

        assert_eq!(tenant.plan, SubscriptionPlan::Premium);
        assert_eq!(tenant.status, TenantStatus::Trial);
        assert!(tenant.plan.monthly_fee() > 0.0);
    }
}
