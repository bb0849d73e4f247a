use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainEntry;

/// A deductible expense tracked for a tax year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxDeduction {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub tax_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl TaxDeduction {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        let date = fields.date(&["date"]);
        let explicit_year = fields.number(&["taxYear", "tax_year"]);
        let tax_year = if explicit_year >= 1.0 {
            explicit_year as i32
        } else {
            date.unwrap_or_else(|| entry.created_at.date_naive()).year()
        };
        Self {
            id: entry.id,
            name: fields.text(&["name"]).unwrap_or_else(|| entry.title.clone()),
            amount: fields.number(&["amount"]),
            category: fields
                .text(&["category"])
                .unwrap_or_else(|| "other".to_string()),
            tax_year,
            date,
        }
    }
}
