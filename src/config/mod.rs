//! Configuration module for the trading simulator.

// Can all be private because of the public re-exports below.
mod debug;
mod market;
mod persistence;
mod types;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::DF;
pub use market::{MARKET, MarketConfig};
pub use persistence::{PERSISTENCE, PersistenceConfig};
pub use plot::PLOT_CONFIG;
pub use types::{Price, TradeSide};
