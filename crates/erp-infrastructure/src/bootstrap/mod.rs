//! Super-admin bootstrap
//!
//! The platform super-admin is a seeded row in the `users` table, not a
//! hard-coded credential branch in the login path. Seeding runs at process
//! start and is idempotent.

use tracing::info;

use erp_core::domain::User;
use erp_core::error::DomainError;
use erp_core::repositories::UserRepository;
use erp_security::password::PasswordService;

pub async fn seed_superadmin(
    users: &dyn UserRepository,
    email: &str,
    password: &str,
) -> Result<(), DomainError> {
    if users.find_by_email(email).await?.is_some() {
        return Ok(());
    }

    let password_hash = PasswordService::hash(password)
        .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;
    let superadmin = User::new_superadmin(email.to_string(), password_hash)?;

    match users.create(&superadmin).await {
        Ok(_) => {
            info!("Seeded super-admin account: {}", email);
            Ok(())
        }
        // Another instance seeded it first; that is the desired end state.
        Err(DomainError::EmailAlreadyExists(_)) => Ok(()),
        Err(e) => Err(e),
    }
}
