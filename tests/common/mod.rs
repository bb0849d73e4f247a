#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use finance_core::{
    config::ConfigManager, storage::JsonEntryStore, DomainEntry,
};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated store and config manager sharing one temporary base directory.
pub fn setup_test_env() -> (JsonEntryStore, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store = JsonEntryStore::new(Some(base.clone())).expect("create json entry store");
    let config = ConfigManager::with_base_dir(base).expect("create config manager for temp dir");
    (store, config)
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Reference date used across the suites.
pub fn today() -> NaiveDate {
    day(2024, 5, 15)
}

pub fn entry(title: &str, metadata: Value) -> DomainEntry {
    DomainEntry::new(title, metadata)
}

pub fn account(name: &str, kind: &str, balance: f64) -> DomainEntry {
    entry(
        name,
        json!({ "itemType": "account", "accountType": kind, "balance": balance }),
    )
}

pub fn income(name: &str, amount: f64, date: &str) -> DomainEntry {
    entry(
        name,
        json!({ "itemType": "transaction", "transactionType": "income", "amount": amount, "date": date }),
    )
}

pub fn expense(name: &str, amount: f64, date: &str) -> DomainEntry {
    entry(
        name,
        json!({ "itemType": "transaction", "transactionType": "expense", "amount": amount, "date": date }),
    )
}

pub fn debt(name: &str, balance: f64, rate: f64, payment: f64) -> DomainEntry {
    entry(
        name,
        json!({
            "itemType": "debt",
            "debtType": "loan",
            "currentBalance": balance,
            "interestRate": rate,
            "minimumPayment": payment
        }),
    )
}

pub fn bill(name: &str, amount: f64, due: &str, recurring: bool) -> DomainEntry {
    entry(
        name,
        json!({
            "itemType": "bill",
            "amount": amount,
            "dueDate": due,
            "frequency": if recurring { "monthly" } else { "once" },
            "recurring": recurring
        }),
    )
}

pub fn budget(name: &str, month: &str, budgeted: f64, spent: f64) -> DomainEntry {
    entry(
        name,
        json!({ "itemType": "budget", "month": month, "budgetedAmount": budgeted, "spentAmount": spent }),
    )
}

/// A household with at least one item of every kind.
pub fn household() -> Vec<DomainEntry> {
    vec![
        account("Checking", "checking", 4200.0),
        account("Brokerage", "investment", 10000.0),
        entry(
            "House",
            json!({ "itemType": "asset", "assetType": "real-estate", "currentValue": 350000 }),
        ),
        entry(
            "VTI",
            json!({
                "itemType": "investment",
                "investmentType": "etf",
                "quantity": 10,
                "purchasePrice": 200,
                "currentPrice": 250
            }),
        ),
        income("Salary", 5000.0, "2024-05-01"),
        expense("Groceries", 600.0, "2024-05-04"),
        debt("Mortgage", 280000.0, 4.5, 1600.0),
        bill("Internet", 60.0, "2024-05-20", true),
        budget("Dining", "2024-05", 200.0, 260.0),
        entry(
            "Vacation",
            json!({ "itemType": "goal", "targetAmount": 3000, "currentAmount": 1200, "targetDate": "2024-11-15" }),
        ),
        entry(
            "Gym",
            json!({ "itemType": "recurring-transaction", "amount": 40, "type": "expense", "frequency": "monthly", "nextDate": "2024-04-01" }),
        ),
        entry(
            "Donation",
            json!({ "itemType": "tax-deduction", "amount": 250, "category": "charity", "date": "2024-03-10" }),
        ),
    ]
}
