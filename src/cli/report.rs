//! Plain-text rendering of a [`FinancialView`].

use std::fmt::Write;

use super::output::{money, percent};
use crate::core::services::{FinancialInsight, FinancialView, InsightKind};

/// Renders every section of the view as a human-readable report.
pub fn render_view(view: &FinancialView, currency: &str) -> String {
    let mut out = String::new();
    let s = &view.financial_summary;
    let m = |amount: f64| money(amount, currency);

    let _ = writeln!(out, "Financial overview as of {}", view.as_of);
    section(&mut out, "Net worth");
    line(&mut out, "Total assets", m(s.total_assets));
    line(&mut out, "Total liabilities", m(s.total_liabilities));
    line(&mut out, "Net worth", m(s.net_worth));
    line(&mut out, "Liquid", m(s.liquid_assets));
    line(&mut out, "Investments", m(s.investment_assets));
    line(&mut out, "Real estate", m(s.real_estate_assets));
    line(&mut out, "Other", m(s.other_assets));

    section(&mut out, "Cash flow (this month)");
    line(&mut out, "Income", m(s.monthly_income));
    line(&mut out, "Expenses", m(s.monthly_expenses));
    line(&mut out, "Cash flow", m(s.monthly_cash_flow));
    line(&mut out, "Savings rate", percent(s.savings_rate));
    line(&mut out, "Debt-to-income", percent(s.debt_to_income_ratio));
    line(
        &mut out,
        "Emergency fund",
        format!("{:.1} months", s.emergency_fund_months),
    );

    let debts = &view.debt_summary;
    section(&mut out, "Debts");
    line(&mut out, "Total debt", m(debts.total_debt));
    line(&mut out, "Minimum payments", m(debts.total_minimum_payments));
    line(&mut out, "Average rate", percent(debts.average_interest_rate));
    if let Some(name) = &debts.highest_interest_debt {
        line(&mut out, "Highest rate", name.clone());
    }
    for (debt_type, total) in &debts.by_type {
        line(&mut out, &format!("  {debt_type}"), m(*total));
    }

    let bills = &view.bill_summary;
    section(&mut out, "Bills");
    line(&mut out, "Monthly total", m(bills.monthly_total));
    line(&mut out, "Upcoming", m(bills.upcoming_total));
    for bill in &bills.upcoming_bills {
        let _ = writeln!(
            out,
            "  - {} {} due {} (in {} days)",
            bill.name,
            m(bill.amount),
            bill.due_date,
            bill.days_until_due
        );
    }
    line(&mut out, "Overdue", m(bills.overdue_total));
    for bill in &bills.overdue_bills {
        let _ = writeln!(
            out,
            "  - {} {} was due {}",
            bill.name,
            m(bill.amount),
            bill.due_date
        );
    }

    let portfolio = &view.investment_portfolio;
    section(&mut out, "Portfolio");
    line(&mut out, "Value", m(portfolio.total_value));
    line(&mut out, "Cost basis", m(portfolio.total_cost));
    line(
        &mut out,
        "Gain/loss",
        format!(
            "{} ({})",
            m(portfolio.total_gain_loss),
            percent(portfolio.total_return_percent)
        ),
    );
    for (kind, slice) in &portfolio.by_type {
        line(
            &mut out,
            &format!("  {kind}"),
            format!("{} ({})", m(slice.total_value), percent(slice.allocation_percent)),
        );
    }

    let budget = &view.monthly_budget;
    section(&mut out, &format!("Budget {}", budget.month));
    line(
        &mut out,
        "Spent / budgeted",
        format!("{} / {}", m(budget.total_spent), m(budget.total_budgeted)),
    );
    line(&mut out, "Used", percent(budget.percent_used));
    if !budget.over_budget_categories.is_empty() {
        line(&mut out, "Over budget", budget.over_budget_categories.join(", "));
    }

    let goals = &view.goals;
    if !goals.goals.is_empty() {
        section(&mut out, "Goals");
        for goal in &goals.goals {
            let _ = writeln!(
                out,
                "  - {} {} of {} ({})",
                goal.name,
                m(goal.current_amount),
                m(goal.target_amount),
                percent(goal.progress_percent)
            );
        }
    }

    let recurring = &view.recurring;
    if recurring.active_count > 0 {
        section(&mut out, "Recurring");
        line(&mut out, "Income", m(recurring.monthly_income));
        line(&mut out, "Expenses", m(recurring.monthly_expenses));
        line(&mut out, "Net", m(recurring.net_monthly));
    }

    let tax = &view.tax_deductions;
    if tax.count > 0 {
        section(&mut out, &format!("Tax deductions {}", tax.tax_year));
        line(&mut out, "Total", m(tax.total));
        for (category, total) in &tax.by_category {
            line(&mut out, &format!("  {category}"), m(*total));
        }
    }

    section(&mut out, "Insights");
    out.push_str(&render_insights(&view.insights));
    out
}

/// One line per insight, or a note when nothing fired.
pub fn render_insights(insights: &[FinancialInsight]) -> String {
    if insights.is_empty() {
        return "No insights for this period.\n".to_string();
    }
    let mut out = String::new();
    for insight in insights {
        let _ = writeln!(
            out,
            "[{}] {} ({}): {}",
            kind_label(insight.kind),
            insight.title,
            insight.priority,
            insight.message
        );
    }
    out
}

fn kind_label(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Alert => "ALERT",
        InsightKind::Warning => "WARN",
        InsightKind::Success => "OK",
        InsightKind::Info => "INFO",
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {title} ==");
}

fn line(out: &mut String, label: &str, value: String) {
    let _ = writeln!(out, "{label:<20} {value}");
}
