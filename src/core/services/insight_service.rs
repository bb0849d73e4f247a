//! Rule-based advisories evaluated over the derived figures.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BillSummary, FinancialSummary, MonthlyBudgetSummary};

/// Tunable cut-offs for the advisory rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Emergency fund coverage below this many months raises an alert.
    pub emergency_fund_months: f64,
    /// Debt-to-income percentage above which a warning fires.
    pub debt_to_income_percent: f64,
    /// Savings rate percentage above which success is reported.
    pub savings_rate_percent: f64,
    /// Bills due within this many days are reported as upcoming.
    pub upcoming_bill_days: u32,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            emergency_fund_months: 3.0,
            debt_to_income_percent: 50.0,
            savings_rate_percent: 20.0,
            upcoming_bill_days: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Alert,
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    High,
    Medium,
    Low,
}

impl fmt::Display for InsightPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InsightPriority::High => "high",
            InsightPriority::Medium => "medium",
            InsightPriority::Low => "low",
        };
        f.write_str(label)
    }
}

/// One advisory produced by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInsight {
    /// Stable rule identifier, e.g. `debt-to-income-warning`.
    pub id: String,
    pub kind: InsightKind,
    pub priority: InsightPriority,
    pub title: String,
    pub message: String,
    /// The value that tripped the rule.
    pub metric: f64,
}

pub const LOW_EMERGENCY_FUND: &str = "low-emergency-fund";
pub const DEBT_TO_INCOME_WARNING: &str = "debt-to-income-warning";
pub const NEGATIVE_CASH_FLOW: &str = "negative-cash-flow";
pub const GOOD_SAVINGS_RATE: &str = "good-savings-rate";
pub const BUDGET_OVERRUN: &str = "budget-overrun";
pub const UPCOMING_BILLS: &str = "upcoming-bills";

/// Everything a rule may look at.
pub struct InsightInputs<'a> {
    pub summary: &'a FinancialSummary,
    pub budget: &'a MonthlyBudgetSummary,
    pub bills: &'a BillSummary,
    pub thresholds: &'a InsightThresholds,
}

type Rule = fn(&InsightInputs<'_>) -> Option<FinancialInsight>;

/// Evaluation order is the output order.
const RULES: [Rule; 6] = [
    low_emergency_fund,
    debt_to_income,
    negative_cash_flow,
    good_savings_rate,
    budget_overrun,
    upcoming_bills,
];

pub struct InsightService;

impl InsightService {
    /// Runs every rule; each matching rule contributes one insight.
    pub fn generate(inputs: &InsightInputs<'_>) -> Vec<FinancialInsight> {
        RULES.iter().filter_map(|rule| rule(inputs)).collect()
    }
}

fn insight(
    id: &str,
    kind: InsightKind,
    priority: InsightPriority,
    title: &str,
    message: String,
    metric: f64,
) -> FinancialInsight {
    FinancialInsight {
        id: id.to_string(),
        kind,
        priority,
        title: title.to_string(),
        message,
        metric,
    }
}

// Coverage is meaningless without expenses, so the rule stays quiet then.
fn low_emergency_fund(inputs: &InsightInputs<'_>) -> Option<FinancialInsight> {
    let summary = inputs.summary;
    let target = inputs.thresholds.emergency_fund_months;
    if summary.monthly_expenses <= 0.0 || summary.emergency_fund_months >= target {
        return None;
    }
    Some(insight(
        LOW_EMERGENCY_FUND,
        InsightKind::Alert,
        InsightPriority::High,
        "Build your emergency fund",
        format!(
            "Liquid savings cover {:.1} months of expenses; aim for at least {} months.",
            summary.emergency_fund_months, target
        ),
        summary.emergency_fund_months,
    ))
}

fn debt_to_income(inputs: &InsightInputs<'_>) -> Option<FinancialInsight> {
    let ratio = inputs.summary.debt_to_income_ratio;
    let limit = inputs.thresholds.debt_to_income_percent;
    if ratio <= limit {
        return None;
    }
    Some(insight(
        DEBT_TO_INCOME_WARNING,
        InsightKind::Warning,
        InsightPriority::High,
        "High debt-to-income ratio",
        format!(
            "Total debt is {ratio:.1}% of annual income, above the {limit}% guideline."
        ),
        ratio,
    ))
}

fn negative_cash_flow(inputs: &InsightInputs<'_>) -> Option<FinancialInsight> {
    let cash_flow = inputs.summary.monthly_cash_flow;
    if cash_flow >= 0.0 {
        return None;
    }
    Some(insight(
        NEGATIVE_CASH_FLOW,
        InsightKind::Alert,
        InsightPriority::High,
        "Spending exceeds income",
        format!(
            "Expenses exceed income by {:.2} this month.",
            cash_flow.abs()
        ),
        cash_flow,
    ))
}

fn good_savings_rate(inputs: &InsightInputs<'_>) -> Option<FinancialInsight> {
    let rate = inputs.summary.savings_rate;
    if rate <= inputs.thresholds.savings_rate_percent {
        return None;
    }
    Some(insight(
        GOOD_SAVINGS_RATE,
        InsightKind::Success,
        InsightPriority::Low,
        "Great savings rate",
        format!("You are saving {rate:.1}% of your income this month."),
        rate,
    ))
}

fn budget_overrun(inputs: &InsightInputs<'_>) -> Option<FinancialInsight> {
    let over = &inputs.budget.over_budget_categories;
    if over.is_empty() {
        return None;
    }
    Some(insight(
        BUDGET_OVERRUN,
        InsightKind::Warning,
        InsightPriority::Medium,
        "Over budget",
        format!("Over budget in {}: {}.", plural(over.len(), "category", "categories"), over.join(", ")),
        over.len() as f64,
    ))
}

fn upcoming_bills(inputs: &InsightInputs<'_>) -> Option<FinancialInsight> {
    let bills = inputs.bills;
    if bills.upcoming_bills.is_empty() {
        return None;
    }
    Some(insight(
        UPCOMING_BILLS,
        InsightKind::Info,
        InsightPriority::Medium,
        "Upcoming bills",
        format!(
            "{} due in the next {} days totalling {:.2}.",
            plural(bills.upcoming_bills.len(), "bill", "bills"),
            inputs.thresholds.upcoming_bill_days,
            bills.upcoming_total
        ),
        bills.upcoming_total,
    ))
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ScheduledBill;

    fn run(
        summary: FinancialSummary,
        budget: MonthlyBudgetSummary,
        bills: BillSummary,
    ) -> Vec<FinancialInsight> {
        let thresholds = InsightThresholds::default();
        InsightService::generate(&InsightInputs {
            summary: &summary,
            budget: &budget,
            bills: &bills,
            thresholds: &thresholds,
        })
    }

    fn ids(insights: &[FinancialInsight]) -> Vec<&str> {
        insights.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn zeroed_inputs_fire_nothing() {
        let insights = run(
            FinancialSummary::default(),
            MonthlyBudgetSummary::default(),
            BillSummary::default(),
        );
        assert!(insights.is_empty());
    }

    #[test]
    fn all_rules_fire_in_fixed_order() {
        let summary = FinancialSummary {
            monthly_income: 1000.0,
            monthly_expenses: 1500.0,
            monthly_cash_flow: -500.0,
            emergency_fund_months: 0.5,
            debt_to_income_ratio: 75.0,
            savings_rate: 25.0,
            ..FinancialSummary::default()
        };
        let budget = MonthlyBudgetSummary {
            over_budget_categories: vec!["Dining".into(), "Travel".into()],
            ..MonthlyBudgetSummary::default()
        };
        let bills = BillSummary {
            upcoming_bills: vec![ScheduledBill {
                bill_id: uuid::Uuid::nil(),
                name: "Rent".into(),
                amount: 900.0,
                due_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                days_until_due: 3,
                frequency: crate::ledger::Frequency::Monthly,
                autopay: false,
            }],
            upcoming_total: 900.0,
            ..BillSummary::default()
        };

        let insights = run(summary, budget, bills);
        assert_eq!(
            ids(&insights),
            vec![
                LOW_EMERGENCY_FUND,
                DEBT_TO_INCOME_WARNING,
                NEGATIVE_CASH_FLOW,
                GOOD_SAVINGS_RATE,
                BUDGET_OVERRUN,
                UPCOMING_BILLS
            ]
        );
        assert_eq!(insights[4].message, "Over budget in 2 categories: Dining, Travel.");
        assert_eq!(insights[5].priority, InsightPriority::Medium);
        assert_eq!(insights[3].priority, InsightPriority::Low);
    }

    #[test]
    fn thresholds_are_strict() {
        let summary = FinancialSummary {
            monthly_expenses: 100.0,
            emergency_fund_months: 3.0,
            debt_to_income_ratio: 50.0,
            savings_rate: 20.0,
            ..FinancialSummary::default()
        };
        let insights = run(summary, MonthlyBudgetSummary::default(), BillSummary::default());
        assert!(insights.is_empty(), "unexpected insights: {:?}", ids(&insights));
    }
}
