use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    coerce::{safe_ratio, Total},
    total_amount, NamedEntity,
};
use crate::ledger::Debt;

/// Payoff projection for a single debt at its minimum payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffEstimate {
    pub debt_id: Uuid,
    pub name: String,
    pub current_balance: f64,
    /// `None` when the minimum payment never clears the balance.
    pub months_to_payoff: Option<u32>,
    pub paid_off_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    pub total_debt: f64,
    pub total_minimum_payments: f64,
    /// Balance-weighted average APR.
    pub average_interest_rate: f64,
    pub highest_interest_debt: Option<String>,
    pub by_type: BTreeMap<String, f64>,
    pub debt_count: usize,
    pub payoff_estimates: Vec<DebtPayoffEstimate>,
}

pub struct DebtService;

impl DebtService {
    pub fn summarize(debts: &[Debt]) -> DebtSummary {
        let total_debt = total_amount(debts);
        let weighted_rate: f64 = debts
            .iter()
            .map(|debt| debt.current_balance * debt.interest_rate)
            .total();

        let mut by_type = BTreeMap::new();
        for debt in debts {
            *by_type.entry(debt.debt_type.clone()).or_insert(0.0) += debt.current_balance;
        }

        DebtSummary {
            total_debt,
            total_minimum_payments: debts.iter().map(|debt| debt.minimum_payment).total(),
            average_interest_rate: safe_ratio(weighted_rate, total_debt),
            highest_interest_debt: Self::highest_interest(debts).map(|debt| debt.name().to_string()),
            by_type,
            debt_count: debts.len(),
            payoff_estimates: debts
                .iter()
                .map(|debt| DebtPayoffEstimate {
                    debt_id: debt.id,
                    name: debt.name.clone(),
                    current_balance: debt.current_balance,
                    months_to_payoff: debt.payoff_months(),
                    paid_off_percent: debt.paid_off_percent(),
                })
                .collect(),
        }
    }

    /// Highest-rate debt that still carries a balance; the first one wins ties.
    pub fn highest_interest(debts: &[Debt]) -> Option<&Debt> {
        debts
            .iter()
            .filter(|debt| debt.current_balance > 0.0)
            .fold(None, |best: Option<&Debt>, debt| match best {
                Some(current) if current.interest_rate >= debt.interest_rate => Some(current),
                _ => Some(debt),
            })
    }
}
