use std::collections::VecDeque;

use crate::config::{PLOT_CONFIG, Price};

/// Bounded FIFO window of past prices. Only used for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    prices: VecDeque<Price>,
    capacity: usize,
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self::with_capacity(PLOT_CONFIG.history_capacity())
    }
}

impl PriceHistory {
    /// A zero capacity is promoted to 1 so the latest price is always drawable.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            prices: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build from stored prices, keeping only the newest `capacity` of them.
    pub fn from_prices(prices: impl IntoIterator<Item = Price>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        for p in prices {
            history.push(p);
        }
        history
    }

    /// Append, evicting the oldest samples once the window is full.
    /// Returns how many samples were evicted.
    pub fn push(&mut self, price: Price) -> usize {
        self.prices.push_back(price);
        let mut evicted = 0;
        while self.prices.len() > self.capacity {
            self.prices.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<Price> {
        self.prices.back().copied()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Price> + ExactSizeIterator + '_ {
        self.prices.iter().copied()
    }

    /// (min, max) of the window, None when empty.
    pub fn min_max(&self) -> Option<(Price, Price)> {
        let mut it = self.iter();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| {
            (if p < lo { p } else { lo }, if p > hi { p } else { hi })
        }))
    }

    pub fn to_vec(&self) -> Vec<Price> {
        self.iter().collect()
    }
}
