use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainEntry;

/// Cap on payoff projections; anything longer is reported as never.
const MAX_PAYOFF_MONTHS: f64 = 1200.0;

/// An outstanding loan, card balance or other liability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    pub debt_type: String,
    pub current_balance: f64,
    pub original_amount: f64,
    /// Annual percentage rate, e.g. `19.9`.
    pub interest_rate: f64,
    pub minimum_payment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Debt {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        Self {
            id: entry.id,
            name: fields.text(&["name"]).unwrap_or_else(|| entry.title.clone()),
            debt_type: fields
                .tag(&["debtType", "debt_type"])
                .unwrap_or_else(|| "other".to_string()),
            current_balance: fields.number(&["currentBalance", "current_balance", "balance"]),
            original_amount: fields.number(&["originalAmount", "original_amount"]),
            interest_rate: fields.number(&["interestRate", "interest_rate"]),
            minimum_payment: fields.number(&["minimumPayment", "minimum_payment"]),
            due_date: fields.date(&["dueDate", "due_date"]),
        }
    }

    /// Months needed to clear the balance paying only the minimum each month.
    ///
    /// Interest compounds monthly at `interest_rate / 12`. Returns `None` when the
    /// payment never outpaces interest.
    pub fn payoff_months(&self) -> Option<u32> {
        if self.current_balance <= 0.0 {
            return Some(0);
        }
        if self.minimum_payment <= 0.0 {
            return None;
        }
        let monthly_rate = self.interest_rate.max(0.0) / 100.0 / 12.0;
        let months = if monthly_rate < f64::EPSILON {
            self.current_balance / self.minimum_payment
        } else {
            let interest = self.current_balance * monthly_rate;
            if self.minimum_payment <= interest {
                return None;
            }
            -(1.0 - interest / self.minimum_payment).ln() / (1.0 + monthly_rate).ln()
        };
        if months.is_finite() && months <= MAX_PAYOFF_MONTHS {
            Some(months.ceil() as u32)
        } else {
            None
        }
    }

    /// Share of the original principal already repaid.
    pub fn paid_off_percent(&self) -> f64 {
        if self.original_amount <= 0.0 {
            return 0.0;
        }
        ((self.original_amount - self.current_balance) / self.original_amount * 100.0)
            .clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn debt(balance: f64, rate: f64, payment: f64) -> Debt {
        Debt::from_entry(&DomainEntry::new(
            "Card",
            json!({
                "itemType": "debt",
                "currentBalance": balance,
                "interestRate": rate,
                "minimumPayment": payment,
                "originalAmount": 2000
            }),
        ))
    }

    #[test]
    fn interest_free_debt_pays_off_linearly() {
        assert_eq!(debt(1000.0, 0.0, 100.0).payoff_months(), Some(10));
        assert_eq!(debt(1050.0, 0.0, 100.0).payoff_months(), Some(11));
    }

    #[test]
    fn amortized_payoff_accounts_for_interest() {
        // 1000 at 12% APR with 100/month clears in 11 payments.
        assert_eq!(debt(1000.0, 12.0, 100.0).payoff_months(), Some(11));
    }

    #[test]
    fn payment_below_interest_never_pays_off() {
        assert_eq!(debt(10_000.0, 24.0, 150.0).payoff_months(), None);
        assert_eq!(debt(500.0, 5.0, 0.0).payoff_months(), None);
        assert_eq!(debt(0.0, 5.0, 0.0).payoff_months(), Some(0));
    }

    #[test]
    fn paid_off_percent_is_clamped() {
        assert_eq!(debt(500.0, 0.0, 50.0).paid_off_percent(), 75.0);
        assert_eq!(debt(2500.0, 0.0, 50.0).paid_off_percent(), 0.0);
    }
}
