use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::coerce::Total;
use crate::ledger::{Frequency, RecurringTransaction, TransactionKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRecurring {
    pub recurring_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub frequency: Frequency,
    pub monthly_equivalent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_occurrence: Option<NaiveDate>,
}

/// Monthly run-rate of the active recurring income and spending templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringSummary {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub net_monthly: f64,
    pub active_count: usize,
    pub inactive_count: usize,
    /// Active items, soonest first; undated items last.
    pub schedule: Vec<ScheduledRecurring>,
}

pub struct RecurringService;

impl RecurringService {
    pub fn summarize(recurring: &[RecurringTransaction], today: NaiveDate) -> RecurringSummary {
        let active: Vec<&RecurringTransaction> =
            recurring.iter().filter(|item| item.is_active).collect();

        let equivalent_for = |kind: TransactionKind| -> f64 {
            active
                .iter()
                .filter(|item| item.kind == kind)
                .map(|item| item.monthly_equivalent())
                .total()
        };
        let monthly_income = equivalent_for(TransactionKind::Income);
        let monthly_expenses = equivalent_for(TransactionKind::Expense);

        let mut schedule: Vec<ScheduledRecurring> = active
            .iter()
            .map(|item| ScheduledRecurring {
                recurring_id: item.id,
                name: item.name.clone(),
                amount: item.amount,
                kind: item.kind,
                frequency: item.frequency,
                monthly_equivalent: item.monthly_equivalent(),
                next_occurrence: item.next_occurrence(today),
            })
            .collect();
        schedule.sort_by(|a, b| {
            match (a.next_occurrence, b.next_occurrence) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
            .then_with(|| a.name.cmp(&b.name))
        });

        RecurringSummary {
            monthly_income,
            monthly_expenses,
            net_monthly: monthly_income - monthly_expenses,
            active_count: active.len(),
            inactive_count: recurring.len() - active.len(),
            schedule,
        }
    }
}
