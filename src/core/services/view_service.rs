use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    BillService, BillSummary, BudgetService, DebtService, DebtSummary, FinancialInsight,
    FinancialSummary, GoalService, GoalSummary, InsightInputs, InsightService,
    InsightThresholds, InvestmentPortfolio, InvestmentService, MonthlyBudgetSummary,
    RecurringService, RecurringSummary, SummaryService, TaxDeductionSummary, TaxService,
};
use crate::{domain::DomainEntry, ledger::FinanceLedger};

/// Every derived structure for one entry snapshot and reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialView {
    pub as_of: NaiveDate,
    pub financial_summary: FinancialSummary,
    pub debt_summary: DebtSummary,
    pub bill_summary: BillSummary,
    pub investment_portfolio: InvestmentPortfolio,
    pub monthly_budget: MonthlyBudgetSummary,
    pub insights: Vec<FinancialInsight>,
    pub goals: GoalSummary,
    pub recurring: RecurringSummary,
    pub tax_deductions: TaxDeductionSummary,
}

pub struct FinancialViewService;

impl FinancialViewService {
    pub fn compute(entries: &[DomainEntry], today: NaiveDate) -> FinancialView {
        Self::compute_with_thresholds(entries, today, &InsightThresholds::default())
    }

    pub fn compute_with_thresholds(
        entries: &[DomainEntry],
        today: NaiveDate,
        thresholds: &InsightThresholds,
    ) -> FinancialView {
        let ledger = FinanceLedger::from_entries(entries);
        Self::from_ledger(&ledger, today, thresholds)
    }

    /// Derives the view from an already partitioned ledger.
    pub fn from_ledger(
        ledger: &FinanceLedger,
        today: NaiveDate,
        thresholds: &InsightThresholds,
    ) -> FinancialView {
        let financial_summary = SummaryService::summarize(ledger, today);
        let bill_summary = BillService::summarize(&ledger.bills, today, thresholds.upcoming_bill_days);
        let monthly_budget = BudgetService::summarize_month(&ledger.budgets, today);
        let insights = InsightService::generate(&InsightInputs {
            summary: &financial_summary,
            budget: &monthly_budget,
            bills: &bill_summary,
            thresholds,
        });
        debug!(
            as_of = %today,
            insights = insights.len(),
            "computed financial view"
        );

        FinancialView {
            as_of: today,
            debt_summary: DebtService::summarize(&ledger.debts),
            investment_portfolio: InvestmentService::portfolio(&ledger.investments),
            goals: GoalService::summarize(&ledger.goals, today),
            recurring: RecurringService::summarize(&ledger.recurring, today),
            tax_deductions: TaxService::summarize(&ledger.tax_deductions, today),
            financial_summary,
            bill_summary,
            monthly_budget,
            insights,
        }
    }
}

/// Computes the full view with default insight thresholds.
pub fn compute_financial_view(entries: &[DomainEntry], today: NaiveDate) -> FinancialView {
    FinancialViewService::compute(entries, today)
}

/// Keeps the last computed view and recomputes only when the snapshot or date change.
#[derive(Debug, Default)]
pub struct MemoizedView {
    thresholds: InsightThresholds,
    cached: Option<CachedView>,
}

#[derive(Debug)]
struct CachedView {
    entries: Vec<DomainEntry>,
    today: NaiveDate,
    view: FinancialView,
}

impl MemoizedView {
    pub fn new(thresholds: InsightThresholds) -> Self {
        Self {
            thresholds,
            cached: None,
        }
    }

    pub fn get(&mut self, entries: &[DomainEntry], today: NaiveDate) -> &FinancialView {
        let stale = match &self.cached {
            Some(cached) => cached.today != today || cached.entries.as_slice() != entries,
            None => true,
        };
        if stale {
            self.cached = None;
        }
        let thresholds = &self.thresholds;
        let cached = self.cached.get_or_insert_with(|| CachedView {
            entries: entries.to_vec(),
            today,
            view: FinancialViewService::compute_with_thresholds(entries, today, thresholds),
        });
        &cached.view
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    fn snapshot() -> Vec<DomainEntry> {
        vec![
            DomainEntry::new("Checking", json!({ "itemType": "account", "accountType": "checking", "balance": 1000 })),
            DomainEntry::new("Pay", json!({ "itemType": "transaction", "type": "income", "amount": 500, "date": "2024-05-02" })),
        ]
    }

    #[test]
    fn memoized_view_recomputes_on_change() {
        let mut entries = snapshot();
        let mut memo = MemoizedView::default();
        assert!(!memo.is_cached());

        let first = memo.get(&entries, today()).clone();
        assert!(memo.is_cached());
        assert_eq!(memo.get(&entries, today()), &first);

        entries.push(DomainEntry::new(
            "Savings",
            json!({ "itemType": "account", "accountType": "savings", "balance": 250 }),
        ));
        assert_eq!(memo.get(&entries, today()).financial_summary.liquid_assets, 1250.0);

        let next_month = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(memo.get(&entries, next_month).financial_summary.monthly_income, 0.0);

        memo.invalidate();
        assert!(!memo.is_cached());
    }

    #[test]
    fn custom_thresholds_change_bill_window() {
        let entries = vec![DomainEntry::new(
            "Tax bill",
            json!({ "itemType": "bill", "amount": 800, "dueDate": "2024-06-30" }),
        )];
        let default_view = FinancialViewService::compute(&entries, today());
        assert!(default_view.bill_summary.upcoming_bills.is_empty());

        let wide = InsightThresholds {
            upcoming_bill_days: 60,
            ..InsightThresholds::default()
        };
        let wide_view = FinancialViewService::compute_with_thresholds(&entries, today(), &wide);
        assert_eq!(wide_view.bill_summary.upcoming_bills.len(), 1);
        assert_eq!(wide_view.insights.last().map(|i| i.id.as_str()), Some("upcoming-bills"));
    }
}
