//! Sales order domain entity
//!
//! An order may reference a product; creating such an order decrements the
//! product's stock and books a revenue ledger entry. All three writes happen
//! in one database transaction (see the repository adapter).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::ledger_entry::{EntryType, LedgerEntry};

/// Sales order status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SalesOrder {
    pub id: Uuid,
    pub tenant_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Customer name is required"))]
    pub customer_name: String,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,

    pub status: OrderStatus,

    /// Optional product link driving the stock/ledger cascade.
    pub product_id: Option<Uuid>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i32>,

    pub created_at: DateTime<Utc>,
}

impl SalesOrder {
    pub fn new(
        tenant_id: Uuid,
        customer_name: String,
        amount: f64,
        product_id: Option<Uuid>,
        quantity: Option<i32>,
    ) -> Result<Self, validator::ValidationErrors> {
        let order = Self {
            id: Uuid::new_v4(),
            tenant_id,
            customer_name: customer_name.trim().to_string(),
            amount,
            status: OrderStatus::Pending,
            product_id,
            // A product link without a quantity means a single unit.
            quantity: product_id.map(|_| quantity.unwrap_or(1)),
            created_at: Utc::now(),
        };

        order.validate()?;
        Ok(order)
    }

    /// Whether creating this order must also decrement stock and book revenue.
    pub fn has_cascade(&self) -> bool {
        self.product_id.is_some()
    }

    /// Revenue ledger entry booked together with the order.
    pub fn revenue_entry(&self) -> Result<LedgerEntry, validator::ValidationErrors> {
        LedgerEntry::new(
            self.tenant_id,
            format!("Revenue from sales order for {}", self.customer_name),
            EntryType::Credit,
            self.amount,
        )
    }
}

/// Mutable sales order fields for conditional updates.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SalesOrderUpdate {
    #[validate(length(min = 1, max = 200, message = "Customer name is required"))]
    pub customer_name: String,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,

    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order() {
        let order = SalesOrder::new(Uuid::new_v4(), "Bob".to_string(), 100.0, None, None).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.has_cascade());
        assert_eq!(order.quantity, None);
    }

    #[test]
    fn test_order_with_product_defaults_quantity() {
        let order = SalesOrder::new(
            Uuid::new_v4(),
            "Bob".to_string(),
            100.0,
            Some(Uuid::new_v4()),
            None,
        )
        .unwrap();
        assert!(order.has_cascade());
        assert_eq!(order.quantity, Some(1));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let order = SalesOrder::new(
            Uuid::new_v4(),
            "Bob".to_string(),
            100.0,
            Some(Uuid::new_v4()),
            Some(0),
        );
        assert!(order.is_err());
    }

    #[test]
    fn test_revenue_entry_matches_order() {
        let tenant_id = Uuid::new_v4();
        let order = SalesOrder::new(tenant_id, "Bob".to_string(), 100.0, None, None).unwrap();
        let entry = order.revenue_entry().unwrap();

        assert_eq!(entry.tenant_id, tenant_id);
        assert_eq!(entry.entry_type, EntryType::Credit);
        assert_eq!(entry.amount, 100.0);
        assert!(entry.description.contains("Bob"));
    }

    #[test]
    fn test_missing_customer_name_rejected() {
        let order = SalesOrder::new(Uuid::new_v4(), "".to_string(), 100.0, None, None);
        assert!(order.is_err());
    }
}
