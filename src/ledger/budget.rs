use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::frequency::month_key;
use crate::domain::{coerce::safe_ratio, DomainEntry};

/// Planned versus actual spending for one category in one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub id: Uuid,
    pub name: String,
    /// `YYYY-MM`.
    pub month: String,
    pub budgeted_amount: f64,
    pub spent_amount: f64,
    pub variance: f64,
    pub percent_used: f64,
}

impl BudgetCategory {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        let budgeted_amount = fields.number(&["budgetedAmount", "budgeted_amount", "budgeted"]);
        let spent_amount = fields.number(&["spentAmount", "spent_amount", "spent"]);
        Self {
            id: entry.id,
            name: fields
                .text(&["category", "name"])
                .unwrap_or_else(|| entry.title.clone()),
            month: fields
                .text(&["month", "budgetMonth", "budget_month"])
                .and_then(|raw| normalize_month(&raw))
                .unwrap_or_else(|| month_key(entry.created_at.date_naive())),
            budgeted_amount,
            spent_amount,
            variance: budgeted_amount - spent_amount,
            percent_used: safe_ratio(spent_amount, budgeted_amount) * 100.0,
        }
    }

    pub fn status(&self) -> BudgetStatus {
        if self.variance < 0.0 {
            BudgetStatus::OverBudget
        } else if self.variance > 0.0 {
            BudgetStatus::UnderBudget
        } else {
            BudgetStatus::OnTrack
        }
    }
}

/// Describes whether a category is aligned with the plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    OverBudget,
    UnderBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::OverBudget => "Over Budget",
            BudgetStatus::UnderBudget => "Under Budget",
        };
        f.write_str(label)
    }
}

/// Accepts `YYYY-MM` or any full date and returns the `YYYY-MM` key.
fn normalize_month(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        return Some(month_key(date));
    }
    crate::domain::coerce::parse_date(trimmed).map(month_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn variance_and_usage_follow_budget() {
        let category = BudgetCategory::from_entry(&DomainEntry::new(
            "Dining",
            json!({ "itemType": "budget", "month": "2024-05", "budgetedAmount": 200, "spentAmount": 250 }),
        ));
        assert_eq!(category.variance, -50.0);
        assert_eq!(category.percent_used, 125.0);
        assert_eq!(category.status(), BudgetStatus::OverBudget);
        assert_eq!(category.name, "Dining");
    }

    #[test]
    fn month_accepts_full_dates() {
        assert_eq!(normalize_month("2024-5").as_deref(), Some("2024-05"));
        assert_eq!(normalize_month("2024-05-17").as_deref(), Some("2024-05"));
        assert_eq!(normalize_month("May"), None);
    }

    #[test]
    fn zero_budget_reports_zero_usage() {
        let category = BudgetCategory::from_entry(&DomainEntry::new(
            "Gifts",
            json!({ "category": "Gifts", "month": "2024-05", "spentAmount": 30 }),
        ));
        assert_eq!(category.percent_used, 0.0);
        assert_eq!(category.status(), BudgetStatus::OverBudget);
    }
}
