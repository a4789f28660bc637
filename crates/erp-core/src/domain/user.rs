//! User domain entity
//!
//! One tenant has exactly one admin user. The super-admin is a seeded row
//! in the same table with no tenant binding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Superadmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Superadmin => "superadmin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "superadmin" => Some(UserRole::Superadmin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: UserRole,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Tenant admin account, created on signup.
    pub fn new_admin(
        tenant_id: Uuid,
        email: String,
        password_hash: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: Uuid::new_v4(),
            tenant_id: Some(tenant_id),
            email: email.trim().to_lowercase(),
            password_hash,
            role: UserRole::Admin,
            created_at: Utc::now(),
        };

        user.validate()?;
        Ok(user)
    }

    /// Seeded platform-wide super-admin. Carries no tenant binding.
    pub fn new_superadmin(
        email: String,
        password_hash: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: Uuid::new_v4(),
            tenant_id: None,
            email: email.trim().to_lowercase(),
            password_hash,
            role: UserRole::Superadmin,
            created_at: Utc::now(),
        };

        user.validate()?;
        Ok(user)
    }

    pub fn is_superadmin(&self) -> bool {
        self.role == UserRole::Superadmin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_admin_is_tenant_bound() {
        let tenant_id = Uuid::new_v4();
        let user = User::new_admin(tenant_id, "a@x.com".to_string(), "hash".to_string()).unwrap();

        assert_eq!(user.tenant_id, Some(tenant_id));
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_new_superadmin_has_no_tenant() {
        let user =
            User::new_superadmin("root@yourcompany.com".to_string(), "hash".to_string()).unwrap();

        assert_eq!(user.tenant_id, None);
        assert!(user.is_superadmin());
    }

    #[test]
    fn test_email_normalized() {
        let user = User::new_admin(
            Uuid::new_v4(),
            "  Admin@Example.COM ".to_string(),
            "hash".to_string(),
        )
        .unwrap();
        assert_eq!(user.email, "admin@example.com");
    }
}
