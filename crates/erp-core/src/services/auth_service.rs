// ============================================================================
// ERP Core - Authentication Service
// File: crates/erp-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service: tenant registration, login, token validation.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use erp_security::jwt::JwtService;
use erp_security::password::PasswordService;
use erp_shared::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use erp_shared::utils::mask_email;

use crate::authorization::Session;
use crate::domain::{SubscriptionPlan, Tenant, User, UserRole};
use crate::error::DomainError;
use crate::repositories::{TenantRepository, UserRepository};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tenants: Arc<dyn TenantRepository>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tenants: Arc<dyn TenantRepository>,
        jwt_secret: String,
        token_expiry_hours: i64,
    ) -> Self {
        Self {
            users,
            tenants,
            jwt: JwtService::new(jwt_secret, token_expiry_hours),
        }
    }

    /// Register a new tenant with its admin user.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        company_name: &str,
    ) -> Result<AuthResult, DomainError> {
        info!("Registration attempt for email: {}", mask_email(email));

        if password.len() < MIN_PASSWORD_LENGTH || password.len() > MAX_PASSWORD_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "Password must be between {} and {} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            )));
        }

        // 1. Check if email already exists
        if self.users.find_by_email(email).await?.is_some() {
            warn!(
                "Registration failed: email already exists: {}",
                mask_email(email)
            );
            return Err(DomainError::EmailAlreadyExists(email.to_string()));
        }

        // 2. Hash password
        let password_hash = PasswordService::hash(password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        // 3. Build tenant and admin user entities
        let tenant = Tenant::new(company_name.to_string(), email.to_string())?;
        let admin = User::new_admin(tenant.id, email.to_string(), password_hash)?;

        // 4. Persist both in one transaction
        let (tenant, user) = self.tenants.create_with_admin(&tenant, &admin).await?;

        // 5. Issue session token with the tenant binding
        let token = self.issue_token(&user)?;

        info!("Registration successful for: {}", mask_email(email));

        Ok(AuthResult {
            token,
            user: UserInfo::new(&user, Some(&tenant)),
        })
    }

    /// Login with email and password. Unknown email and wrong password both
    /// collapse to `InvalidCredentials`; the response never reveals which.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, DomainError> {
        info!("Login attempt for email: {}", mask_email(email));

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: email not found: {}", mask_email(email));
                DomainError::InvalidCredentials
            })?;

        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|_e| DomainError::InvalidCredentials)?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", mask_email(email));
            return Err(DomainError::InvalidCredentials);
        }

        let tenant = match user.tenant_id {
            Some(tenant_id) => self.tenants.find_by_id(&tenant_id).await?,
            None => None,
        };

        let token = self.issue_token(&user)?;

        info!("Login successful for: {}", mask_email(email));

        Ok(AuthResult {
            token,
            user: UserInfo::new(&user, tenant.as_ref()),
        })
    }

    /// Validate a bearer token and derive the session scoping all data
    /// access. Invalid or expired tokens are rejected as `Forbidden`.
    pub fn authenticate(&self, token: &str) -> Result<Session, DomainError> {
        let claims = self.jwt.validate_token(token).map_err(|e| {
            warn!("Token validation failed: {}", e);
            DomainError::Forbidden
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| DomainError::Forbidden)?;
        let role = UserRole::from_str(&claims.role).ok_or(DomainError::Forbidden)?;

        Ok(Session::new(user_id, claims.tenant_id, role))
    }

    fn issue_token(&self, user: &User) -> Result<String, DomainError> {
        self.jwt
            .generate_token(&user.id, user.tenant_id, &user.email, user.role.as_str())
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))
    }
}

/// Result of successful login or registration
#[derive(Debug, Clone, Serialize)]
pub struct AuthResult {
    pub token: String,
    pub user: UserInfo,
}

/// User info returned in auth responses
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionPlan>,
}

impl UserInfo {
    fn new(user: &User, tenant: Option<&Tenant>) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            tenant_id: user.tenant_id,
            company_name: tenant.map(|t| t.company_name.clone()),
            role: user.role,
            subscription: tenant.map(|t| t.plan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tenant_repository::MockTenantRepository;
    use crate::repositories::user_repository::MockUserRepository;

    const SECRET: &str = "test-secret";

    fn service(users: MockUserRepository, tenants: MockTenantRepository) -> AuthService {
        AuthService::new(Arc::new(users), Arc::new(tenants), SECRET.to_string(), 24)
    }

    fn stored_admin(email: &str, password: &str) -> (User, Tenant) {
        let tenant = Tenant::new("Acme".to_string(), email.to_string()).unwrap();
        let hash = PasswordService::hash(password).unwrap();
        let user = User::new_admin(tenant.id, email.to_string(), hash).unwrap();
        (user, tenant)
    }

    #[tokio::test]
    async fn test_register_issues_tenant_bound_token() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_create_with_admin()
            .returning(|t, u| Ok((t.clone(), u.clone())));

        let service = service(users, tenants);
        let result = service
            .register("a@x.com", "correct-horse", "Acme")
            .await
            .unwrap();

        assert_eq!(result.user.email, "a@x.com");
        assert_eq!(result.user.role, UserRole::Admin);
        assert_eq!(result.user.company_name.as_deref(), Some("Acme"));

        // The issued token round-trips into a session scoped to the new tenant.
        let session = service.authenticate(&result.token).unwrap();
        assert_eq!(session.tenant_id, result.user.tenant_id);
        assert_eq!(session.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let (existing, _) = stored_admin("a@x.com", "password123");

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(existing.clone())));

        let mut tenants = MockTenantRepository::new();
        tenants.expect_create_with_admin().times(0);

        let service = service(users, tenants);
        let err = service
            .register("a@x.com", "password123", "Acme Two")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_register_short_password_rejected() {
        let service = service(MockUserRepository::new(), MockTenantRepository::new());
        let err = service.register("a@x.com", "short", "Acme").await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_login_success() {
        let (user, tenant) = stored_admin("a@x.com", "correct-horse");
        let tenant_clone = tenant.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tenant_clone.clone())));

        let service = service(users, tenants);
        let result = service.login("a@x.com", "correct-horse").await.unwrap();

        assert_eq!(result.user.company_name.as_deref(), Some("Acme"));
        let session = service.authenticate(&result.token).unwrap();
        assert_eq!(session.tenant_id, Some(tenant.id));
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_identical() {
        let (user, _) = stored_admin("a@x.com", "correct-horse");

        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(move |email| {
            if email == "a@x.com" {
                Ok(Some(user.clone()))
            } else {
                Ok(None)
            }
        });

        let service = service(users, MockTenantRepository::new());

        let wrong_password = service.login("a@x.com", "wrong").await.unwrap_err();
        let unknown_email = service.login("nobody@x.com", "wrong").await.unwrap_err();

        assert!(matches!(wrong_password, DomainError::InvalidCredentials));
        assert!(matches!(unknown_email, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_garbage_token_forbidden() {
        let service = service(MockUserRepository::new(), MockTenantRepository::new());
        let err = service.authenticate("not-a-jwt").unwrap_err();
        assert!(matches!(err, DomainError::Forbidden));
    }
}
