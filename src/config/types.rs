//! Core value types shared by the engine, persistence and UI.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};
use strum_macros::{Display, EnumIter};

/// A quoted price for one unit of the asset.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const fn new(val: f64) -> Self {
        // Absolute prices should not be negative
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// `max(val, floor)`. NaN collapses to the floor.
    #[inline]
    pub fn floored(val: f64, floor: Price) -> Price {
        if val >= floor.0 { Price(val) } else { floor }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > f64::EPSILON
    }
}

impl From<f64> for Price {
    fn from(v: f64) -> Self {
        Price::new(v)
    }
}

impl Add<f64> for Price {
    type Output = f64;

    fn add(self, rhs: f64) -> Self::Output {
        self.0 + rhs
    }
}

/// Cash value of `units` bought or sold at this price.
impl Mul<u32> for Price {
    type Output = f64;

    fn mul(self, rhs: u32) -> Self::Output {
        self.0 * f64::from(rhs)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum TradeSide {
    Buy,
    Sell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floored_never_returns_below_floor() {
        let floor = Price::new(10.0);
        assert_eq!(Price::floored(3.2, floor), floor);
        assert_eq!(Price::floored(-40.0, floor), floor);
        assert_eq!(Price::floored(f64::NAN, floor), floor);
        assert_eq!(Price::floored(10.5, floor).value(), 10.5);
    }

    #[test]
    fn negative_prices_are_rejected_at_construction() {
        assert_eq!(Price::new(-1.0).value(), 0.0);
        assert!(!Price::new(0.0).is_positive());
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Price::new(100.0).to_string(), "100.00");
        assert_eq!(Price::new(99.456).to_string(), "99.46");
    }

    #[test]
    fn trade_side_display_matches_log_labels() {
        assert_eq!(TradeSide::Buy.to_string(), "Buy");
        assert_eq!(TradeSide::Sell.to_string(), "Sell");
    }
}
