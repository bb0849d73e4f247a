use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainEntry;

/// Supported account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
    Investment,
    Retirement,
    Other,
}

impl AccountKind {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("checking") => AccountKind::Checking,
            Some("savings") => AccountKind::Savings,
            Some("credit" | "credit-card") => AccountKind::Credit,
            Some("investment") => AccountKind::Investment,
            Some("retirement") => AccountKind::Retirement,
            _ => AccountKind::Other,
        }
    }

    /// Cash that counts towards the emergency fund.
    pub fn is_liquid(self) -> bool {
        matches!(self, AccountKind::Checking | AccountKind::Savings)
    }

    pub fn is_invested(self) -> bool {
        matches!(self, AccountKind::Investment | AccountKind::Retirement)
    }
}

/// Represents a bank, brokerage or retirement account balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialAccount {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

impl FinancialAccount {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        Self {
            id: entry.id,
            name: fields
                .text(&["name", "accountName"])
                .unwrap_or_else(|| entry.title.clone()),
            kind: AccountKind::from_tag(
                fields
                    .tag(&["accountType", "account_type", "type"])
                    .as_deref(),
            ),
            balance: fields.number(&["balance", "currentBalance", "current_balance"]),
            institution: fields.text(&["institution"]),
        }
    }
}
