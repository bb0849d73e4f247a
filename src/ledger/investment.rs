use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    coerce::{finite_or_zero, safe_ratio},
    DomainEntry,
};

pub const DEFAULT_INVESTMENT_TYPE: &str = "other";

/// A single holding with its derived cost, value and return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub investment_type: String,
    pub quantity: f64,
    pub purchase_price: f64,
    pub current_price: f64,
    pub total_cost: f64,
    pub total_value: f64,
    pub gain_loss: f64,
    pub return_percent: f64,
}

impl Investment {
    pub fn from_entry(entry: &DomainEntry) -> Self {
        let fields = entry.fields();
        let quantity = fields.number(&["quantity", "shares"]);
        let purchase_price = fields.number(&["purchasePrice", "purchase_price", "costBasis"]);
        let current_price = fields.number(&["currentPrice", "current_price"]);
        let total_cost = finite_or_zero(quantity * purchase_price);
        let total_value = finite_or_zero(quantity * current_price);
        let gain_loss = finite_or_zero(total_value - total_cost);
        Self {
            id: entry.id,
            name: fields.text(&["name"]).unwrap_or_else(|| entry.title.clone()),
            symbol: fields.text(&["symbol", "ticker"]),
            investment_type: fields
                .tag(&["investmentType", "investment_type"])
                .unwrap_or_else(|| DEFAULT_INVESTMENT_TYPE.to_string()),
            quantity,
            purchase_price,
            current_price,
            total_cost,
            total_value,
            gain_loss,
            return_percent: safe_ratio(gain_loss, total_cost) * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn derives_cost_value_and_return() {
        let entry = DomainEntry::new(
            "Index fund",
            json!({
                "itemType": "investment",
                "investmentType": "ETF",
                "quantity": 10,
                "purchasePrice": 100,
                "currentPrice": 125
            }),
        );
        let holding = Investment::from_entry(&entry);
        assert_eq!(holding.total_cost, 1000.0);
        assert_eq!(holding.total_value, 1250.0);
        assert_eq!(holding.gain_loss, 250.0);
        assert_eq!(holding.return_percent, 25.0);
        assert_eq!(holding.investment_type, "etf");
    }

    #[test]
    fn zero_cost_basis_has_zero_return() {
        let entry = DomainEntry::new("Gift shares", json!({ "shares": 3, "currentPrice": 40 }));
        let holding = Investment::from_entry(&entry);
        assert_eq!(holding.total_value, 120.0);
        assert_eq!(holding.return_percent, 0.0);
        assert_eq!(holding.investment_type, DEFAULT_INVESTMENT_TYPE);
    }

    #[test]
    fn overflowing_position_degrades_to_zero() {
        let entry = DomainEntry::new(
            "Overflow",
            json!({ "quantity": 1e200, "purchasePrice": 1e200, "currentPrice": 1e200 }),
        );
        let holding = Investment::from_entry(&entry);
        assert_eq!(holding.total_cost, 0.0);
        assert_eq!(holding.total_value, 0.0);
        assert_eq!(holding.gain_loss, 0.0);
        assert_eq!(holding.return_percent, 0.0);
        assert_eq!(holding, Investment::from_entry(&entry));
    }
}
