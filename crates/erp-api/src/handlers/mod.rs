//! HTTP handlers

pub mod auth;
pub mod customers;
pub mod health;
pub mod ledger_entries;
pub mod products;
pub mod sales_orders;
pub mod tenants;
