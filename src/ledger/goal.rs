use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{coerce::safe_ratio, DomainEntry};

/// A savings target such as an emergency fund or a down payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

impl FinancialGoal {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        Self {
            id: entry.id,
            name: fields.text(&["name"]).unwrap_or_else(|| entry.title.clone()),
            goal_type: fields.tag(&["goalType", "goal_type"]),
            target_amount: fields.number(&["targetAmount", "target_amount"]),
            current_amount: fields.number(&["currentAmount", "current_amount"]),
            target_date: fields.date(&["targetDate", "target_date"]),
        }
    }

    pub fn progress_percent(&self) -> f64 {
        safe_ratio(self.current_amount, self.target_amount) * 100.0
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    pub fn is_complete(&self) -> bool {
        self.target_amount > 0.0 && self.current_amount >= self.target_amount
    }
}
