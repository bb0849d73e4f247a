//! Stateless derivation services. Each takes borrowed records plus the reference
//! date and returns a fresh value; none of them fail.

pub mod bill_service;
pub mod budget_service;
pub mod debt_service;
pub mod goal_service;
pub mod insight_service;
pub mod investment_service;
pub mod recurring_service;
pub mod summary_service;
pub mod tax_service;
pub mod view_service;

pub use bill_service::{BillService, BillSummary, ScheduledBill};
pub use budget_service::{BudgetService, MonthlyBudgetSummary};
pub use debt_service::{DebtPayoffEstimate, DebtService, DebtSummary};
pub use goal_service::{GoalProgress, GoalService, GoalSummary};
pub use insight_service::{
    FinancialInsight, InsightInputs, InsightKind, InsightPriority, InsightService,
    InsightThresholds,
};
pub use investment_service::{InvestmentPortfolio, InvestmentService, PortfolioSlice};
pub use recurring_service::{RecurringService, RecurringSummary, ScheduledRecurring};
pub use summary_service::{FinancialSummary, SummaryService};
pub use tax_service::{TaxDeductionSummary, TaxService};
pub use view_service::{compute_financial_view, FinancialView, FinancialViewService, MemoizedView};
