mod clock;
mod core;
mod errors;
mod price_feed;
mod trade;

pub use clock::TickClock;
pub use core::TradingEngine;
pub use errors::TradeError;
pub use price_feed::{PriceFeed, RandomWalk, ScriptedFeed};
pub use trade::{TradeAction, apply, buy, sell, tick};
