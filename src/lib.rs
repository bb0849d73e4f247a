#![doc(test(attr(deny(warnings))))]

//! Finance Core derives financial views (net worth, cash flow, debts, bills,
//! portfolio, budgets and advisories) from snapshots of loosely-typed domain
//! entries logged by a personal life-management app.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::services::{compute_financial_view, FinancialView, FinancialViewService};
pub use domain::DomainEntry;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
