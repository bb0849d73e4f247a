use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::coerce::Total;
use crate::ledger::{Bill, Frequency};

/// A bill occurrence relative to the reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledBill {
    pub bill_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    /// Negative for overdue bills.
    pub days_until_due: i64,
    pub frequency: Frequency,
    pub autopay: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillSummary {
    /// Recurring monthly bills, the figure folded into monthly expenses.
    pub monthly_total: f64,
    /// Every recurring bill normalised to a monthly amount.
    pub monthly_equivalent: f64,
    pub upcoming_bills: Vec<ScheduledBill>,
    pub upcoming_total: f64,
    pub overdue_bills: Vec<ScheduledBill>,
    pub overdue_total: f64,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub autopay_count: usize,
}

pub struct BillService;

impl BillService {
    /// Summarizes bills, treating unpaid bills due within `window_days` of `today` as upcoming.
    pub fn summarize(bills: &[Bill], today: NaiveDate, window_days: u32) -> BillSummary {
        let mut upcoming = Vec::new();
        let mut overdue = Vec::new();

        for bill in bills.iter().filter(|bill| !bill.is_paid) {
            let Some(due) = bill.next_due(today) else {
                continue;
            };
            let days_until_due = (due - today).num_days();
            let scheduled = ScheduledBill {
                bill_id: bill.id,
                name: bill.name.clone(),
                amount: bill.amount,
                due_date: due,
                days_until_due,
                frequency: bill.frequency,
                autopay: bill.autopay,
            };
            if days_until_due < 0 {
                overdue.push(scheduled);
            } else if days_until_due <= i64::from(window_days) {
                upcoming.push(scheduled);
            }
        }

        sort_by_due(&mut upcoming);
        sort_by_due(&mut overdue);

        let paid_count = bills.iter().filter(|bill| bill.is_paid).count();
        BillSummary {
            monthly_total: bills
                .iter()
                .filter(|bill| bill.is_recurring_monthly())
                .map(|bill| bill.amount)
                .total(),
            monthly_equivalent: bills.iter().map(Bill::monthly_equivalent).total(),
            upcoming_total: upcoming.iter().map(|bill| bill.amount).total(),
            overdue_total: overdue.iter().map(|bill| bill.amount).total(),
            upcoming_bills: upcoming,
            overdue_bills: overdue,
            paid_count,
            unpaid_count: bills.len() - paid_count,
            autopay_count: bills.iter().filter(|bill| bill.autopay).count(),
        }
    }
}

fn sort_by_due(bills: &mut [ScheduledBill]) {
    bills.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.name.cmp(&b.name)));
}
