use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainEntry;

const DEFAULT_CATEGORY: &str = "uncategorized";

/// Direction of money movement for a logged transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
    Other,
}

impl TransactionKind {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("income") => TransactionKind::Income,
            Some("expense") => TransactionKind::Expense,
            Some("transfer") => TransactionKind::Transfer,
            _ => TransactionKind::Other,
        }
    }
}

/// A single income, expense or transfer the user logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    /// Falls back to the entry creation date when metadata carries no usable date.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        Self {
            id: entry.id,
            name: fields
                .text(&["name", "description"])
                .unwrap_or_else(|| entry.title.clone()),
            amount: fields.number(&["amount"]),
            kind: TransactionKind::from_tag(
                fields
                    .tag(&["type", "transactionType", "transaction_type"])
                    .as_deref(),
            ),
            category: fields
                .text(&["category"])
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            date: fields
                .date(&["date", "transactionDate", "transaction_date"])
                .unwrap_or_else(|| entry.created_at.date_naive()),
            account_id: fields.text(&["accountId", "account_id"]),
            notes: fields.text(&["notes"]).or_else(|| entry.description.clone()),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
