//! Common types

use serde::{Deserialize, Serialize};

/// Resource kinds the authorization policy knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Tenant,
    Customer,
    Product,
    SalesOrder,
    LedgerEntry,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Tenant => "tenant",
            Resource::Customer => "customer",
            Resource::Product => "product",
            Resource::SalesOrder => "sales_order",
            Resource::LedgerEntry => "ledger_entry",
        }
    }
}

/// Actions the authorization policy evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    List,
    Read,
    Create,
    Update,
    Delete,
    Administer,
}
