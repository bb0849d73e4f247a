use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    Asset, Bill, BudgetCategory, Debt, FinancialAccount, FinancialGoal, Investment,
    RecurringTransaction, TaxDeduction, Transaction,
};
use crate::domain::DomainEntry;

/// The `metadata.itemType` tags understood by the finance views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Transaction,
    Account,
    Asset,
    Investment,
    Debt,
    Bill,
    Budget,
    Goal,
    RecurringTransaction,
    TaxDeduction,
}

impl ItemType {
    pub const ALL: [ItemType; 10] = [
        ItemType::Transaction,
        ItemType::Account,
        ItemType::Asset,
        ItemType::Investment,
        ItemType::Debt,
        ItemType::Bill,
        ItemType::Budget,
        ItemType::Goal,
        ItemType::RecurringTransaction,
        ItemType::TaxDeduction,
    ];

    /// Exact tag match; anything else is not a finance item.
    pub fn from_tag(tag: &str) -> Option<Self> {
        ItemType::ALL.into_iter().find(|item| item.as_str() == tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Transaction => "transaction",
            ItemType::Account => "account",
            ItemType::Asset => "asset",
            ItemType::Investment => "investment",
            ItemType::Debt => "debt",
            ItemType::Bill => "bill",
            ItemType::Budget => "budget",
            ItemType::Goal => "goal",
            ItemType::RecurringTransaction => "recurring-transaction",
            ItemType::TaxDeduction => "tax-deduction",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain entry classified and projected into its typed record.
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceItem {
    Transaction(Transaction),
    Account(FinancialAccount),
    Asset(Asset),
    Investment(Investment),
    Debt(Debt),
    Bill(Bill),
    Budget(BudgetCategory),
    Goal(FinancialGoal),
    RecurringTransaction(RecurringTransaction),
    TaxDeduction(TaxDeduction),
}

impl FinanceItem {
    /// Classifies an entry by its tag. Untagged or unknown entries yield `None`.
    pub fn from_entry(entry: &DomainEntry) -> Option<Self> {
        let item_type = ItemType::from_tag(entry.item_type()?)?;
        let item = match item_type {
            ItemType::Transaction => FinanceItem::Transaction(Transaction::from_entry(entry)),
            ItemType::Account => FinanceItem::Account(FinancialAccount::from_entry(entry)),
            ItemType::Asset => FinanceItem::Asset(Asset::from_entry(entry)),
            ItemType::Investment => FinanceItem::Investment(Investment::from_entry(entry)),
            ItemType::Debt => FinanceItem::Debt(Debt::from_entry(entry)),
            ItemType::Bill => FinanceItem::Bill(Bill::from_entry(entry)),
            ItemType::Budget => FinanceItem::Budget(BudgetCategory::from_entry(entry)),
            ItemType::Goal => FinanceItem::Goal(FinancialGoal::from_entry(entry)),
            ItemType::RecurringTransaction => {
                FinanceItem::RecurringTransaction(RecurringTransaction::from_entry(entry))
            }
            ItemType::TaxDeduction => FinanceItem::TaxDeduction(TaxDeduction::from_entry(entry)),
        };
        Some(item)
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            FinanceItem::Transaction(_) => ItemType::Transaction,
            FinanceItem::Account(_) => ItemType::Account,
            FinanceItem::Asset(_) => ItemType::Asset,
            FinanceItem::Investment(_) => ItemType::Investment,
            FinanceItem::Debt(_) => ItemType::Debt,
            FinanceItem::Bill(_) => ItemType::Bill,
            FinanceItem::Budget(_) => ItemType::Budget,
            FinanceItem::Goal(_) => ItemType::Goal,
            FinanceItem::RecurringTransaction(_) => ItemType::RecurringTransaction,
            FinanceItem::TaxDeduction(_) => ItemType::TaxDeduction,
        }
    }
}

/// Entry snapshot partitioned into one bucket per item type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceLedger {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<FinancialAccount>,
    pub assets: Vec<Asset>,
    pub investments: Vec<Investment>,
    pub debts: Vec<Debt>,
    pub bills: Vec<Bill>,
    pub budgets: Vec<BudgetCategory>,
    pub goals: Vec<FinancialGoal>,
    pub recurring: Vec<RecurringTransaction>,
    pub tax_deductions: Vec<TaxDeduction>,
    /// Entries without a recognised `itemType`.
    pub skipped: usize,
}

impl FinanceLedger {
    pub fn from_entries(entries: &[DomainEntry]) -> Self {
        let mut ledger = FinanceLedger::default();
        for entry in entries {
            match FinanceItem::from_entry(entry) {
                Some(item) => ledger.push(item),
                None => {
                    trace!(entry_id = %entry.id, tag = ?entry.item_type(), "skipping non-finance entry");
                    ledger.skipped += 1;
                }
            }
        }
        debug!(
            transactions = ledger.transactions.len(),
            accounts = ledger.accounts.len(),
            assets = ledger.assets.len(),
            investments = ledger.investments.len(),
            debts = ledger.debts.len(),
            bills = ledger.bills.len(),
            budgets = ledger.budgets.len(),
            goals = ledger.goals.len(),
            recurring = ledger.recurring.len(),
            tax_deductions = ledger.tax_deductions.len(),
            skipped = ledger.skipped,
            "partitioned entry snapshot"
        );
        ledger
    }

    pub fn push(&mut self, item: FinanceItem) {
        match item {
            FinanceItem::Transaction(txn) => self.transactions.push(txn),
            FinanceItem::Account(account) => self.accounts.push(account),
            FinanceItem::Asset(asset) => self.assets.push(asset),
            FinanceItem::Investment(investment) => self.investments.push(investment),
            FinanceItem::Debt(debt) => self.debts.push(debt),
            FinanceItem::Bill(bill) => self.bills.push(bill),
            FinanceItem::Budget(budget) => self.budgets.push(budget),
            FinanceItem::Goal(goal) => self.goals.push(goal),
            FinanceItem::RecurringTransaction(recurring) => self.recurring.push(recurring),
            FinanceItem::TaxDeduction(deduction) => self.tax_deductions.push(deduction),
        }
    }

    /// Number of classified records across all buckets.
    pub fn item_count(&self) -> usize {
        self.transactions.len()
            + self.accounts.len()
            + self.assets.len()
            + self.investments.len()
            + self.debts.len()
            + self.bills.len()
            + self.budgets.len()
            + self.goals.len()
            + self.recurring.len()
            + self.tax_deductions.len()
    }
}
