use thiserror::Error;

use crate::config::Price;

/// Why a trade was turned down. The `Display` text is what the player sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TradeError {
    #[error("Not enough balance to buy.")]
    InsufficientBalance { balance: f64, price: Price },

    #[error("No assets to sell.")]
    NoHoldings,
}
