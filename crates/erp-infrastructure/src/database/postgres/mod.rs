//! PostgreSQL repository implementations

pub mod customer_repo_impl;
pub mod ledger_repo_impl;
pub mod product_repo_impl;
pub mod sales_order_repo_impl;
pub mod tenant_repo_impl;
pub mod user_repo_impl;

pub use customer_repo_impl::PgCustomerRepository;
pub use ledger_repo_impl::PgLedgerRepository;
pub use product_repo_impl::PgProductRepository;
pub use sales_order_repo_impl::PgSalesOrderRepository;
pub use tenant_repo_impl::PgTenantRepository;
pub use user_repo_impl::PgUserRepository;
