use crate::config::{DF, Price};
use crate::engine::{PriceFeed, TradeAction, TradeError, trade};
use crate::models::{TradingState, Transaction};
use crate::utils::now_timestamp_ms;

/// Owns the game state and the price feed. The app and the headless
/// simulator both drive the market through this.
pub struct TradingEngine {
    state: TradingState,
    feed: Box<dyn PriceFeed>,
}

impl TradingEngine {
    pub fn new(state: TradingState, feed: Box<dyn PriceFeed>) -> Self {
        Self { state, feed }
    }

    pub fn state(&self) -> &TradingState {
        &self.state
    }

    /// One price update.
    pub fn tick(&mut self) -> Price {
        let price = trade::tick(&mut self.state, self.feed.as_mut());
        if DF.log_ticks {
            log::info!(
                "TICK: price {} (history {}/{})",
                price,
                self.state.history.len(),
                self.state.history.capacity()
            );
        }
        price
    }

    pub fn apply(&mut self, action: TradeAction) -> Result<Transaction, TradeError> {
        self.apply_at(action, now_timestamp_ms())
    }

    pub fn apply_at(
        &mut self,
        action: TradeAction,
        timestamp_ms: i64,
    ) -> Result<Transaction, TradeError> {
        let result = trade::apply(&mut self.state, action, timestamp_ms);
        if DF.log_trades {
            match &result {
                Ok(tx) => log::info!(
                    "TRADE: {} -> balance ${:.2}, holdings {}",
                    tx,
                    self.state.portfolio.balance,
                    self.state.portfolio.holdings
                ),
                Err(e) => log::info!("TRADE REJECTED ({:?}): {}", action, e),
            }
        }
        result
    }

    pub fn net_worth(&self) -> f64 {
        self.state.net_worth()
    }

    pub fn profit_and_loss(&self) -> f64 {
        self.state.profit_and_loss()
    }
}
