use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainEntry;

pub const REAL_ESTATE: &str = "real-estate";

/// A tangible asset such as property or a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub asset_type: String,
    pub current_value: f64,
    pub purchase_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
}

impl Asset {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        Self {
            id: entry.id,
            name: fields.text(&["name"]).unwrap_or_else(|| entry.title.clone()),
            asset_type: fields
                .tag(&["assetType", "asset_type"])
                .unwrap_or_else(|| "other".to_string()),
            current_value: fields.number(&["currentValue", "current_value", "value"]),
            purchase_price: fields.number(&["purchasePrice", "purchase_price"]),
            purchase_date: fields.date(&["purchaseDate", "purchase_date"]),
        }
    }

    pub fn is_real_estate(&self) -> bool {
        self.asset_type == REAL_ESTATE
    }
}
