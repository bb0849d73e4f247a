use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::frequency::Frequency;
use crate::domain::DomainEntry;

/// A payable bill, optionally repeating on a fixed cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub frequency: Frequency,
    pub recurring: bool,
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub autopay: bool,
}

impl Bill {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        Self {
            id: entry.id,
            name: fields.text(&["name"]).unwrap_or_else(|| entry.title.clone()),
            amount: fields.number(&["amount"]),
            due_date: fields.date(&["dueDate", "due_date"]),
            frequency: Frequency::from_tag(fields.text(&["frequency"]).as_deref()),
            recurring: fields
                .flag(&["recurring", "isRecurring", "is_recurring"])
                .unwrap_or(false),
            is_paid: fields.flag(&["isPaid", "is_paid", "paid"]).unwrap_or(false),
            category: fields.text(&["category"]),
            autopay: fields.flag(&["autopay", "autoPay", "auto_pay"]).unwrap_or(false),
        }
    }

    /// Counted in monthly expenses on top of logged transactions.
    pub fn is_recurring_monthly(&self) -> bool {
        self.recurring && self.frequency == Frequency::Monthly
    }

    /// Next due date on or after `today` for recurring bills; the stored due date otherwise.
    pub fn next_due(&self, today: NaiveDate) -> Option<NaiveDate> {
        let due = self.due_date?;
        if self.recurring {
            Some(self.frequency.roll_forward(due, today))
        } else {
            Some(due)
        }
    }

    pub fn monthly_equivalent(&self) -> f64 {
        if self.recurring {
            self.amount * self.frequency.monthly_factor()
        } else {
            0.0
        }
    }
}
