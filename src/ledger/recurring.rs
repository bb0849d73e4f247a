use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{frequency::Frequency, transaction::TransactionKind};
use crate::domain::DomainEntry;

/// A template for income or spending that repeats on a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringTransaction {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_active: bool,
}

impl RecurringTransaction {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        Self {
            id: entry.id,
            name: fields.text(&["name"]).unwrap_or_else(|| entry.title.clone()),
            amount: fields.number(&["amount"]),
            kind: TransactionKind::from_tag(
                fields
                    .tag(&["type", "transactionType", "transaction_type"])
                    .as_deref(),
            ),
            frequency: Frequency::from_tag(fields.text(&["frequency"]).as_deref()),
            next_date: fields.date(&["nextDate", "next_date", "startDate", "start_date"]),
            category: fields.text(&["category"]),
            is_active: fields.flag(&["isActive", "is_active", "active"]).unwrap_or(true),
        }
    }

    pub fn monthly_equivalent(&self) -> f64 {
        self.amount * self.frequency.monthly_factor()
    }

    /// Next scheduled occurrence on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.next_date
            .map(|anchor| self.frequency.roll_forward(anchor, today))
    }
}
