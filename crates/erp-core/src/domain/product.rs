//! Product domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    pub id: Uuid,
    pub tenant_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,

    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        tenant_id: Uuid,
        name: String,
        description: Option<String>,
        price: f64,
        stock: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let product = Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.trim().to_string(),
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            price,
            stock,
            created_at: Utc::now(),
        };

        product.validate()?;
        Ok(product)
    }
}

/// Mutable product fields for conditional updates.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductUpdate {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product() {
        let product = Product::new(
            Uuid::new_v4(),
            "Widget".to_string(),
            Some("A widget".to_string()),
            9.99,
            100,
        );
        assert!(product.is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let product = Product::new(Uuid::new_v4(), "Widget".to_string(), None, -1.0, 10);
        assert!(product.is_err());
    }

    #[test]
    fn test_negative_stock_rejected() {
        let product = Product::new(Uuid::new_v4(), "Widget".to_string(), None, 1.0, -10);
        assert!(product.is_err());
    }
}
