//! # ERP Infrastructure
//!
//! PostgreSQL implementations (adapters) of the repository ports, plus pool
//! construction, embedded migrations, and super-admin bootstrap.

pub mod bootstrap;
pub mod database;

pub use bootstrap::seed_superadmin;
pub use database::{
    create_pool, run_migrations, PgCustomerRepository, PgLedgerRepository, PgProductRepository,
    PgSalesOrderRepository, PgTenantRepository, PgUserRepository,
};
