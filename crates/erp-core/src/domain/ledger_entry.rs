//! Ledger entry domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Ledger entry type. Only these two values are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Debit,
    Credit,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Debit => "debit",
            EntryType::Credit => "credit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "debit" => Some(EntryType::Debit),
            "credit" => Some(EntryType::Credit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub tenant_id: Uuid,

    #[validate(length(min = 1, max = 500, message = "Description is required"))]
    pub description: String,

    pub entry_type: EntryType,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,

    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(
        tenant_id: Uuid,
        description: String,
        entry_type: EntryType,
        amount: f64,
    ) -> Result<Self, validator::ValidationErrors> {
        let entry = Self {
            id: Uuid::new_v4(),
            tenant_id,
            description: description.trim().to_string(),
            entry_type,
            amount,
            created_at: Utc::now(),
        };

        entry.validate()?;
        Ok(entry)
    }
}

/// Mutable ledger entry fields for conditional updates.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LedgerEntryUpdate {
    #[validate(length(min = 1, max = 500, message = "Description is required"))]
    pub description: String,

    pub entry_type: EntryType,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entry() {
        let entry = LedgerEntry::new(
            Uuid::new_v4(),
            "Office supplies".to_string(),
            EntryType::Debit,
            42.50,
        );
        assert!(entry.is_ok());
    }

    #[test]
    fn test_entry_type_parsing() {
        assert_eq!(EntryType::from_str("debit"), Some(EntryType::Debit));
        assert_eq!(EntryType::from_str("credit"), Some(EntryType::Credit));
        assert_eq!(EntryType::from_str("transfer"), None);
    }

    #[test]
    fn test_empty_description_rejected() {
        let entry = LedgerEntry::new(Uuid::new_v4(), " ".to_string(), EntryType::Credit, 10.0);
        assert!(entry.is_err());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let entry = LedgerEntry::new(
            Uuid::new_v4(),
            "Refund".to_string(),
            EntryType::Debit,
            -5.0,
        );
        assert!(entry.is_err());
    }
}
