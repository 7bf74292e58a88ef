use serde::{Deserialize, Serialize};

use crate::config::{MARKET, Price};
use crate::models::{Portfolio, PriceHistory, TradingState, Transaction, TransactionLog};

/// Whole-game record as it sits in the key-value store.
///
/// Every field has a default so older or partial records still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub balance: f64,
    pub holdings: u32,
    pub current_price: f64,
    pub price_history: Vec<Price>,
    pub transactions: Vec<Transaction>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            balance: MARKET.starting_balance,
            holdings: 0,
            current_price: MARKET.starting_price.value(),
            price_history: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

impl From<&TradingState> for Snapshot {
    fn from(state: &TradingState) -> Self {
        Self {
            balance: state.portfolio.balance,
            holdings: state.portfolio.holdings,
            current_price: state.current_price.value(),
            price_history: state.history.to_vec(),
            transactions: state.transactions.as_slice().to_vec(),
        }
    }
}

impl Snapshot {
    /// Rebuild live state. A zero/missing price restarts at the starting price,
    /// the price and every history sample are re-floored, and the history is
    /// cut back to `history_capacity` (newest kept).
    pub fn into_state(self, history_capacity: usize) -> TradingState {
        let current_price = if Price::new(self.current_price).is_positive() {
            Price::floored(self.current_price, MARKET.price_floor)
        } else {
            MARKET.starting_price
        };

        TradingState {
            portfolio: Portfolio {
                balance: self.balance,
                holdings: self.holdings,
            },
            current_price,
            history: PriceHistory::from_prices(
                self.price_history
                    .into_iter()
                    .map(|p| Price::floored(p.value(), MARKET.price_floor)),
                history_capacity,
            ),
            transactions: TransactionLog::from(self.transactions),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TradeSide;

    #[test]
    fn field_names_are_camel_case() {
        let json = Snapshot::default().to_json().unwrap();
        assert!(json.contains("\"currentPrice\":100.0"));
        assert!(json.contains("\"priceHistory\":[]"));
        assert!(json.contains("\"transactions\":[]"));
    }

    #[test]
    fn partial_record_fills_defaults() {
        let snap = Snapshot::from_json(r#"{"balance": 5000, "holdings": 3}"#).unwrap();
        let state = snap.into_state(250);
        assert_eq!(state.portfolio.balance, 5000.0);
        assert_eq!(state.portfolio.holdings, 3);
        assert_eq!(state.current_price, Price::new(100.0));
        assert!(state.history.is_empty());
    }

    #[test]
    fn zero_price_falls_back_to_start_price() {
        let snap = Snapshot::from_json(r#"{"currentPrice": 0}"#).unwrap();
        assert_eq!(snap.into_state(250).current_price, Price::new(100.0));
    }

    #[test]
    fn sub_floor_price_is_lifted() {
        let snap = Snapshot::from_json(r#"{"currentPrice": 4.5}"#).unwrap();
        assert_eq!(snap.into_state(250).current_price, Price::new(10.0));
    }

    #[test]
    fn sub_floor_history_is_lifted() {
        let raw = r#"{"balance":9893.2,"holdings":2,"priceHistory":[101.5,3.0,-7.0],"currentPrice":98.7}"#;
        let state = Snapshot::from_json(raw).unwrap().into_state(250);
        assert_eq!(state.portfolio.balance, 9893.2);
        assert_eq!(state.portfolio.holdings, 2);
        assert_eq!(state.current_price, Price::new(98.7));
        assert_eq!(
            state.history.to_vec(),
            vec![Price::new(101.5), MARKET.price_floor, MARKET.price_floor]
        );
    }

    #[test]
    fn oversize_history_keeps_newest() {
        let snap = Snapshot {
            price_history: (101..=110).map(|v| Price::new(v as f64)).collect(),
            ..Snapshot::default()
        };
        let state = snap.into_state(3);
        assert_eq!(
            state.history.to_vec(),
            vec![Price::new(108.0), Price::new(109.0), Price::new(110.0)]
        );
    }

    #[test]
    fn transactions_keep_type_key() {
        let snap = Snapshot {
            transactions: vec![Transaction::new(TradeSide::Sell, 1, Price::new(90.0), 7)],
            ..Snapshot::default()
        };
        let json = snap.to_json().unwrap();
        assert!(json.contains(r#""type":"Sell""#));
        assert!(json.contains(r#""unitPrice":90.0"#));
        assert_eq!(Snapshot::from_json(&json).unwrap(), snap);
    }

    #[test]
    fn transaction_without_timestamp_loads() {
        let raw = r#"{"transactions":[{"type":"Buy","units":1,"unitPrice":100.0,"total":100.0}]}"#;
        let state = Snapshot::from_json(raw).unwrap().into_state(250);
        let tx = state.transactions.last().unwrap();
        assert_eq!(tx.side, TradeSide::Buy);
        assert_eq!(tx.timestamp_ms, 0);
    }
}
