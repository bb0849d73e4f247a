use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::TaxDeduction;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxDeductionSummary {
    pub tax_year: i32,
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
    pub count: usize,
}

pub struct TaxService;

impl TaxService {
    /// Totals deductions recorded for the calendar year of `today`.
    pub fn summarize(deductions: &[TaxDeduction], today: NaiveDate) -> TaxDeductionSummary {
        let tax_year = today.year();
        let mut summary = TaxDeductionSummary {
            tax_year,
            ..TaxDeductionSummary::default()
        };
        for deduction in deductions.iter().filter(|d| d.tax_year == tax_year) {
            summary.total += deduction.amount;
            *summary
                .by_category
                .entry(deduction.category.clone())
                .or_insert(0.0) += deduction.amount;
            summary.count += 1;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainEntry;
    use serde_json::json;

    #[test]
    fn filters_to_current_tax_year() {
        let deductions: Vec<TaxDeduction> = [
            json!({ "amount": 200, "category": "charity", "taxYear": 2024 }),
            json!({ "amount": 50, "category": "charity", "date": "2024-02-11" }),
            json!({ "amount": 900, "category": "medical", "taxYear": "2024" }),
            json!({ "amount": 75, "category": "charity", "taxYear": 2023 }),
        ]
        .into_iter()
        .map(|meta| TaxDeduction::from_entry(&DomainEntry::new("Deduction", meta)))
        .collect();

        let today = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let summary = TaxService::summarize(&deductions, today);
        assert_eq!(summary.tax_year, 2024);
        assert_eq!(summary.total, 1150.0);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.by_category.get("charity"), Some(&250.0));
        assert_eq!(summary.by_category.get("medical"), Some(&900.0));
    }
}
