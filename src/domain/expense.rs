//! Expense Record
//!
//! Money-tracking record variant. The wire shape is fixed by the expense
//! backend: the timestamp key is literally `date`, and an empty category
//! or description arrives as `""` rather than being omitted.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use super::record::{Record, RecordDraft};
use crate::error::{SyncError, SyncResult};

/// A tracked expense as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned identifier (hex object id)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub amount: f64,
    /// Empty string means uncategorized
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Server-assigned creation timestamp
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Build a record the way the server materializes one
    pub fn new(id: impl Into<String>, title: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            category: String::new(),
            description: String::new(),
            date: Utc::now(),
        }
    }
}

/// Form buffer for a new or edited expense
///
/// `amount` stays the raw text the form holds and is parsed at submit
/// time; on the wire it is always a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpenseDraft {
    pub title: String,
    #[serde(serialize_with = "amount_as_number")]
    pub amount: String,
    pub category: String,
    pub description: String,
}

fn amount_as_number<S: Serializer>(amount: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(parse_amount(amount).unwrap_or(0.0))
}

static AMOUNT_PREFIX: OnceLock<Regex> = OnceLock::new();

/// Parse the leading numeric prefix of an amount field
///
/// Lenient, form-style parsing: optional sign, decimal point, exponent;
/// trailing text after a valid prefix is ignored (`"12.5 usd"` -> 12.5).
/// Returns None when no numeric prefix exists.
pub fn parse_amount(text: &str) -> Option<f64> {
    let pattern = AMOUNT_PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("amount prefix pattern")
    });
    let prefix = pattern.find(text.trim())?;
    prefix.as_str().parse().ok()
}

impl RecordDraft for ExpenseDraft {
    fn validate(&self) -> SyncResult<()> {
        if self.title.is_empty() {
            return Err(SyncError::Validation("title"));
        }
        if parse_amount(&self.amount).is_none() {
            return Err(SyncError::Validation("amount"));
        }
        Ok(())
    }
}

impl Record for Expense {
    type Draft = ExpenseDraft;

    const LABEL: &'static str = "expense";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        if self.category.is_empty() {
            None
        } else {
            Some(&self.category)
        }
    }

    fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            title: self.title.clone(),
            amount: self.amount.to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(" 42 "), Some(42.0));
        assert_eq!(parse_amount("12.5 usd"), Some(12.5));
        assert_eq!(parse_amount("-3.5"), Some(-3.5));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = ExpenseDraft {
            title: "Coffee".to_string(),
            amount: "3.5".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        draft.title.clear();
        assert_eq!(draft.validate(), Err(SyncError::Validation("title")));

        draft.title = "Coffee".to_string();
        draft.amount = "not a number".to_string();
        assert_eq!(draft.validate(), Err(SyncError::Validation("amount")));

        // Zero passes the client's presence check; rejecting it is the
        // server's rule
        draft.amount = "0".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_to_draft_copies_editable_fields() {
        let mut expense = Expense::new("a1", "Groceries", 42.0);
        expense.category = "food".to_string();
        expense.description = "weekly run".to_string();

        let draft = expense.to_draft();
        assert_eq!(draft.title, "Groceries");
        assert_eq!(draft.amount, "42");
        assert_eq!(draft.category, "food");
        assert_eq!(draft.description, "weekly run");
    }

    #[test]
    fn test_draft_wire_shape() {
        let draft = ExpenseDraft {
            title: "Coffee".to_string(),
            amount: "3.5".to_string(),
            category: "food".to_string(),
            description: String::new(),
        };
        let value = serde_json::to_value(&draft).expect("Failed to serialize draft");
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Coffee",
                "amount": 3.5,
                "category": "food",
                "description": ""
            })
        );
    }

    #[test]
    fn test_record_wire_shape() {
        let json = r#"{
            "id": "665f1c2ab1e7c3d4e5f60718",
            "title": "Coffee",
            "amount": 3.5,
            "category": "",
            "description": "",
            "date": "2024-06-04T10:15:00Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).expect("Failed to parse record");
        assert_eq!(expense.id, "665f1c2ab1e7c3d4e5f60718");
        assert_eq!(expense.amount, 3.5);
        assert_eq!(expense.category(), None);
    }
}
