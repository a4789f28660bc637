//! Customer domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Customer {
    pub id: Uuid,
    pub tenant_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 50, message = "Phone number too long"))]
    pub phone: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(
        tenant_id: Uuid,
        name: String,
        email: String,
        phone: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let customer = Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
            created_at: Utc::now(),
        };

        customer.validate()?;
        Ok(customer)
    }
}

/// Mutable customer fields for conditional updates.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerUpdate {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 50, message = "Phone number too long"))]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    #[test]
    fn test_create_customer() {
        let email: String = SafeEmail().fake();
        let customer = Customer::new(
            Uuid::new_v4(),
            "Bob".to_string(),
            email,
            Some("555-0100".to_string()),
        );
        assert!(customer.is_ok());
    }

    #[test]
    fn test_missing_name_rejected() {
        let customer = Customer::new(Uuid::new_v4(), "  ".to_string(), "b@x.com".to_string(), None);
        // Trimmed to empty, fails the length validation
        assert!(customer.is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let customer = Customer::new(
            Uuid::new_v4(),
            "Bob".to_string(),
            "not-an-email".to_string(),
            None,
        );
        assert!(customer.is_err());
    }

    #[test]
    fn test_empty_phone_dropped() {
        let customer = Customer::new(
            Uuid::new_v4(),
            "Bob".to_string(),
            "b@x.com".to_string(),
            Some("  ".to_string()),
        )
        .unwrap();
        assert_eq!(customer.phone, None);
    }
}
