use serde::{Deserialize, Serialize};

use crate::config::{Price, TradeSide};

/// One accepted trade. `total == units * unit_price` at the time it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub units: u32,
    pub unit_price: Price,
    pub total: f64,
    // Older snapshots were written without a timestamp
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl Transaction {
    pub fn new(side: TradeSide, units: u32, unit_price: Price, timestamp_ms: i64) -> Self {
        Self {
            side,
            units,
            unit_price,
            total: unit_price * units,
            timestamp_ms,
        }
    }

    /// Signed effect on the cash balance.
    pub fn cash_delta(&self) -> f64 {
        match self.side {
            TradeSide::Buy => -self.total,
            TradeSide::Sell => self.total,
        }
    }

    /// Signed effect on holdings.
    pub fn holdings_delta(&self) -> i64 {
        match self.side {
            TradeSide::Buy => i64::from(self.units),
            TradeSide::Sell => -i64::from(self.units),
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} @ ${} = ${:.2}",
            self.side, self.units, self.unit_price, self.total
        )
    }
}
