use serde::{Deserialize, Serialize};

use crate::config::{MARKET, Price};

/// Cash plus units of the one asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub balance: f64,
    pub holdings: u32,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            balance: MARKET.starting_balance,
            holdings: 0,
        }
    }
}

impl Portfolio {
    pub fn can_afford(&self, price: Price, units: u32) -> bool {
        self.balance >= price * units
    }

    pub fn can_sell(&self, units: u32) -> bool {
        units > 0 && self.holdings >= units
    }

    /// Cash plus holdings marked at `price`.
    pub fn net_worth(&self, price: Price) -> f64 {
        self.balance + price * self.holdings
    }
}
