//! Market simulation constants (starting conditions and price walk shape)

use std::time::Duration;

use crate::config::Price;

pub struct MarketConfig {
    /// Cash handed to a brand new player
    pub starting_balance: f64,
    /// Price quoted before the first tick
    pub starting_price: Price,
    /// The walk never goes below this
    pub price_floor: Price,
    /// Each tick moves the price by a uniform sample from [-max_fluctuation, +max_fluctuation)
    pub max_fluctuation: f64,
    /// Wall-clock gap between two ticks
    pub tick_interval: Duration,
    /// Units moved by a single Buy or Sell click
    pub trade_units: u32,
}

pub const MARKET: MarketConfig = MarketConfig {
    starting_balance: 10_000.0,
    starting_price: Price::new(100.0),
    price_floor: Price::new(10.0),
    max_fluctuation: 5.0,
    tick_interval: Duration::from_millis(2_000),
    trade_units: 1,
};
