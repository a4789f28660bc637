//! Repository traits (ports)

pub mod customer_repository;
pub mod ledger_repository;
pub mod product_repository;
pub mod sales_order_repository;
pub mod tenant_repository;
pub mod user_repository;

pub use customer_repository::CustomerRepository;
pub use ledger_repository::LedgerRepository;
pub use product_repository::ProductRepository;
pub use sales_order_repository::SalesOrderRepository;
pub use tenant_repository::TenantRepository;
pub use user_repository::UserRepository;
