//! Current-month budget variance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::coerce::{safe_ratio, Total};
use crate::ledger::{frequency::month_key, BudgetCategory, BudgetStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBudgetSummary {
    /// `YYYY-MM` of the reference date.
    pub month: String,
    pub total_budgeted: f64,
    pub total_spent: f64,
    pub total_variance: f64,
    pub percent_used: f64,
    pub categories: Vec<BudgetCategory>,
    pub over_budget_categories: Vec<String>,
    pub under_budget_categories: Vec<String>,
}

/// Stateless budgeting utilities over projected budget categories.
pub struct BudgetService;

impl BudgetService {
    /// Summarizes the categories budgeted for the month containing `today`.
    pub fn summarize_month(budgets: &[BudgetCategory], today: NaiveDate) -> MonthlyBudgetSummary {
        let month = month_key(today);
        let categories: Vec<BudgetCategory> = budgets
            .iter()
            .filter(|category| category.month == month)
            .cloned()
            .collect();

        let total_budgeted: f64 = categories.iter().map(|c| c.budgeted_amount).total();
        let total_spent: f64 = categories.iter().map(|c| c.spent_amount).total();

        MonthlyBudgetSummary {
            month,
            total_budgeted,
            total_spent,
            total_variance: total_budgeted - total_spent,
            percent_used: safe_ratio(total_spent, total_budgeted) * 100.0,
            over_budget_categories: Self::names_with(&categories, BudgetStatus::OverBudget),
            under_budget_categories: Self::names_with(&categories, BudgetStatus::UnderBudget),
            categories,
        }
    }

    fn names_with(categories: &[BudgetCategory], status: BudgetStatus) -> Vec<String> {
        categories
            .iter()
            .filter(|category| category.status() == status)
            .map(|category| category.name.clone())
            .collect()
    }
}
