//! Typed finance records projected from domain entries, and the partitioned ledger.

pub mod account;
pub mod asset;
pub mod bill;
pub mod budget;
pub mod debt;
pub mod frequency;
pub mod goal;
pub mod investment;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod recurring;
pub mod tax_deduction;
pub mod transaction;

pub use account::{AccountKind, FinancialAccount};
pub use asset::Asset;
pub use bill::Bill;
pub use budget::{BudgetCategory, BudgetStatus};
pub use debt::Debt;
pub use frequency::Frequency;
pub use goal::FinancialGoal;
pub use investment::Investment;
pub use ledger::{FinanceItem, FinanceLedger, ItemType};
pub use recurring::RecurringTransaction;
pub use tax_deduction::TaxDeduction;
pub use transaction::{Transaction, TransactionKind};

use crate::domain::Amounted;

crate::impl_record_identity!(
    Transaction,
    FinancialAccount,
    Asset,
    Investment,
    Debt,
    Bill,
    BudgetCategory,
    FinancialGoal,
    RecurringTransaction,
    TaxDeduction,
);

macro_rules! impl_amounted {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl Amounted for $ty {
                fn amount(&self) -> f64 {
                    self.$field
                }
            }
        )+
    };
}

impl_amounted!(
    Transaction => amount,
    FinancialAccount => balance,
    Asset => current_value,
    Investment => total_value,
    Debt => current_balance,
    Bill => amount,
    RecurringTransaction => amount,
    TaxDeduction => amount,
);
