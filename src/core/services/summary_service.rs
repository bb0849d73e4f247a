//! Net worth, cash flow and headline ratios.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    coerce::{safe_ratio, Total},
    total_amount,
};
use crate::ledger::{
    frequency::same_month, Bill, FinanceLedger, FinancialAccount, Transaction,
};

/// Headline balance-sheet and cash-flow figures for one reference date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub liquid_assets: f64,
    pub investment_assets: f64,
    pub real_estate_assets: f64,
    pub other_assets: f64,
    pub total_debt: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_cash_flow: f64,
    pub savings_rate: f64,
    pub debt_to_income_ratio: f64,
    pub emergency_fund_months: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Computes the summary for the calendar month containing `today`.
    ///
    /// Investment-tagged account balances and tracked holdings are both counted in
    /// `investment_assets`, and recurring monthly bills are added to expenses on top
    /// of logged expense transactions.
    pub fn summarize(ledger: &FinanceLedger, today: NaiveDate) -> FinancialSummary {
        let liquid_assets = Self::balance_where(&ledger.accounts, |a| a.kind.is_liquid());
        let investment_assets = Self::balance_where(&ledger.accounts, |a| a.kind.is_invested())
            + total_amount(&ledger.investments);
        let real_estate_assets: f64 = ledger
            .assets
            .iter()
            .filter(|asset| asset.is_real_estate())
            .map(|asset| asset.current_value)
            .total();
        let other_assets: f64 = ledger
            .assets
            .iter()
            .filter(|asset| !asset.is_real_estate())
            .map(|asset| asset.current_value)
            .total();
        let total_assets = liquid_assets + investment_assets + real_estate_assets + other_assets;

        let total_debt = total_amount(&ledger.debts);
        let total_liabilities = total_debt;

        let monthly_income = Self::monthly_income(&ledger.transactions, today);
        let monthly_expenses = Self::monthly_expenses(&ledger.transactions, &ledger.bills, today);
        let monthly_cash_flow = monthly_income - monthly_expenses;

        let summary = FinancialSummary {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
            liquid_assets,
            investment_assets,
            real_estate_assets,
            other_assets,
            total_debt,
            monthly_income,
            monthly_expenses,
            monthly_cash_flow,
            savings_rate: safe_ratio(monthly_cash_flow, monthly_income) * 100.0,
            debt_to_income_ratio: safe_ratio(total_debt, monthly_income * 12.0) * 100.0,
            emergency_fund_months: safe_ratio(liquid_assets, monthly_expenses),
        };
        debug!(
            net_worth = summary.net_worth,
            cash_flow = summary.monthly_cash_flow,
            savings_rate = summary.savings_rate,
            "computed financial summary"
        );
        summary
    }

    /// Income transactions dated in the calendar month of `today`.
    pub fn monthly_income(transactions: &[Transaction], today: NaiveDate) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_income() && same_month(txn.date, today))
            .map(|txn| txn.amount)
            .total()
    }

    /// Expense transactions dated this month plus every recurring monthly bill.
    pub fn monthly_expenses(transactions: &[Transaction], bills: &[Bill], today: NaiveDate) -> f64 {
        let logged: f64 = transactions
            .iter()
            .filter(|txn| txn.is_expense() && same_month(txn.date, today))
            .map(|txn| txn.amount)
            .total();
        let recurring_bills: f64 = bills
            .iter()
            .filter(|bill| bill.is_recurring_monthly())
            .map(|bill| bill.amount)
            .total();
        logged + recurring_bills
    }

    fn balance_where(
        accounts: &[FinancialAccount],
        predicate: impl Fn(&FinancialAccount) -> bool,
    ) -> f64 {
        accounts
            .iter()
            .filter(|account| predicate(account))
            .map(|account| account.balance)
            .total()
    }
}
