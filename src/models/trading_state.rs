use crate::config::{MARKET, Price};
use crate::models::{Portfolio, PriceHistory, TransactionLog};

/// Everything the simulator knows. The UI is drawn from this and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingState {
    pub portfolio: Portfolio,
    pub current_price: Price,
    pub history: PriceHistory,
    pub transactions: TransactionLog,
}

impl Default for TradingState {
    fn default() -> Self {
        Self {
            portfolio: Portfolio::default(),
            current_price: MARKET.starting_price,
            history: PriceHistory::default(),
            transactions: TransactionLog::new(),
        }
    }
}

impl TradingState {
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history: PriceHistory::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn net_worth(&self) -> f64 {
        self.portfolio.net_worth(self.current_price)
    }

    /// Gain or loss against the starting cash.
    pub fn profit_and_loss(&self) -> f64 {
        self.net_worth() - MARKET.starting_balance
    }
}
