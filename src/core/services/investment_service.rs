use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    coerce::{safe_ratio, Total},
    total_amount,
};
use crate::ledger::Investment;

/// Aggregate of all holdings sharing one investment type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSlice {
    pub total_value: f64,
    pub total_cost: f64,
    pub gain_loss: f64,
    pub return_percent: f64,
    pub holdings: usize,
    /// Share of the whole portfolio value.
    pub allocation_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPortfolio {
    pub total_value: f64,
    pub total_cost: f64,
    pub total_gain_loss: f64,
    pub total_return_percent: f64,
    pub by_type: BTreeMap<String, PortfolioSlice>,
    /// Largest positions first.
    pub holdings: Vec<Investment>,
}

pub struct InvestmentService;

impl InvestmentService {
    pub fn portfolio(investments: &[Investment]) -> InvestmentPortfolio {
        let total_value = total_amount(investments);
        let total_cost: f64 = investments.iter().map(|i| i.total_cost).total();
        let total_gain_loss = total_value - total_cost;

        let mut by_type: BTreeMap<String, PortfolioSlice> = BTreeMap::new();
        for investment in investments {
            let slice = by_type.entry(investment.investment_type.clone()).or_default();
            slice.total_value += investment.total_value;
            slice.total_cost += investment.total_cost;
            slice.holdings += 1;
        }
        for slice in by_type.values_mut() {
            slice.gain_loss = slice.total_value - slice.total_cost;
            slice.return_percent = safe_ratio(slice.gain_loss, slice.total_cost) * 100.0;
            slice.allocation_percent = safe_ratio(slice.total_value, total_value) * 100.0;
        }

        let mut holdings = investments.to_vec();
        holdings.sort_by(|a, b| {
            b.total_value
                .total_cmp(&a.total_value)
                .then_with(|| a.name.cmp(&b.name))
        });

        InvestmentPortfolio {
            total_value,
            total_cost,
            total_gain_loss,
            total_return_percent: safe_ratio(total_gain_loss, total_cost) * 100.0,
            by_type,
            holdings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainEntry;
    use serde_json::json;

    fn holding(name: &str, kind: Option<&str>, qty: f64, cost: f64, price: f64) -> Investment {
        let mut meta = json!({
            "itemType": "investment",
            "quantity": qty,
            "purchasePrice": cost,
            "currentPrice": price
        });
        if let Some(kind) = kind {
            meta["investmentType"] = json!(kind);
        }
        Investment::from_entry(&DomainEntry::new(name, meta))
    }

    #[test]
    fn groups_holdings_by_type() {
        let investments = vec![
            holding("AAPL", Some("stock"), 10.0, 100.0, 150.0),
            holding("MSFT", Some("stock"), 5.0, 200.0, 180.0),
            holding("BTC", Some("crypto"), 1.0, 1000.0, 500.0),
            holding("Mystery", None, 2.0, 10.0, 10.0),
        ];
        let portfolio = InvestmentService::portfolio(&investments);

        assert_eq!(portfolio.total_value, 2920.0);
        assert_eq!(portfolio.total_cost, 3020.0);
        assert_eq!(portfolio.total_gain_loss, -100.0);

        let stocks = &portfolio.by_type["stock"];
        assert_eq!(stocks.total_value, 2400.0);
        assert_eq!(stocks.total_cost, 2000.0);
        assert_eq!(stocks.return_percent, 20.0);
        assert_eq!(stocks.holdings, 2);

        let crypto = &portfolio.by_type["crypto"];
        assert_eq!(crypto.return_percent, -50.0);
        assert!(portfolio.by_type.contains_key("other"));

        let allocation: f64 = portfolio.by_type.values().map(|s| s.allocation_percent).sum();
        assert!((allocation - 100.0).abs() < 1e-9);

        let order: Vec<&str> = portfolio.holdings.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(order, vec!["AAPL", "MSFT", "BTC", "Mystery"]);
    }

    #[test]
    fn empty_portfolio_is_zeroed() {
        let portfolio = InvestmentService::portfolio(&[]);
        assert_eq!(portfolio, InvestmentPortfolio::default());
    }
}
