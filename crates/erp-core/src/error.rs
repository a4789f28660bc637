//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access token required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Tenant not found")]
    TenantNotFound,

    #[error("Customer not found")]
    CustomerNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Sales order not found")]
    SalesOrderNotFound,

    #[error("Ledger entry not found")]
    LedgerEntryNotFound,

    #[error("Insufficient stock for product")]
    InsufficientStock,

    #[error("Invalid tenant status transition: {0} -> {1}")]
    InvalidStatusTransition(&'static str, &'static str),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Service unavailable")]
    Unavailable,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
