//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod migrations;
pub mod postgres;

use tracing::error;

use erp_core::error::DomainError;

pub use connection::create_pool;
pub use migrations::run_migrations;
pub use postgres::{
    PgCustomerRepository, PgLedgerRepository, PgProductRepository, PgSalesOrderRepository,
    PgTenantRepository, PgUserRepository,
};

/// Map a store failure to a domain error. A pool acquire timeout surfaces
/// as `Unavailable` so callers can answer 503 instead of queueing forever.
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    match e {
        sqlx::Error::PoolTimedOut => DomainError::Unavailable,
        other => DomainError::DatabaseError(other.to_string()),
    }
}
