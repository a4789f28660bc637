use std::sync::Arc;

use erp_core::repositories::{
    CustomerRepository, LedgerRepository, ProductRepository, SalesOrderRepository,
};
use erp_core::services::{AuthService, TenantService};
use erp_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub tenants: Arc<TenantService>,
    pub customers: Arc<dyn CustomerRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub sales_orders: Arc<dyn SalesOrderRepository>,
    pub ledger_entries: Arc<dyn LedgerRepository>,
    pub config: AppConfig,
}
