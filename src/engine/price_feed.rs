use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::MARKET;

/// Source of per-tick price moves.
pub trait PriceFeed {
    fn next_delta(&mut self) -> f64;
}

/// Uniform random walk: each delta is drawn from [-max_fluctuation, +max_fluctuation).
pub struct RandomWalk {
    rng: StdRng,
    max_fluctuation: f64,
}

impl RandomWalk {
    pub fn new(max_fluctuation: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_fluctuation,
        }
    }

    /// Same seed, same walk.
    pub fn seeded(seed: u64, max_fluctuation: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_fluctuation,
        }
    }

    pub fn from_market(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed, MARKET.max_fluctuation),
            None => Self::new(MARKET.max_fluctuation),
        }
    }
}

impl PriceFeed for RandomWalk {
    fn next_delta(&mut self) -> f64 {
        // gen_range panics on an empty range
        if self.max_fluctuation <= 0.0 {
            return 0.0;
        }
        self.rng
            .gen_range(-self.max_fluctuation..self.max_fluctuation)
    }
}

/// Replays a fixed list of deltas, wrapping around at the end.
pub struct ScriptedFeed {
    deltas: Vec<f64>,
    cursor: usize,
}

impl ScriptedFeed {
    pub fn new(deltas: Vec<f64>) -> Self {
        Self { deltas, cursor: 0 }
    }
}

impl PriceFeed for ScriptedFeed {
    fn next_delta(&mut self) -> f64 {
        if self.deltas.is_empty() {
            return 0.0;
        }
        let d = self.deltas[self.cursor % self.deltas.len()];
        self.cursor = (self.cursor + 1) % self.deltas.len();
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_walk_stays_within_fluctuation_band() {
        let mut feed = RandomWalk::seeded(7, 5.0);
        for _ in 0..10_000 {
            let d = feed.next_delta();
            assert!((-5.0..5.0).contains(&d), "delta {d} out of band");
        }
    }

    #[test]
    fn seeded_walks_are_reproducible() {
        let mut a = RandomWalk::seeded(1234, 5.0);
        let mut b = RandomWalk::seeded(1234, 5.0);
        for _ in 0..50 {
            assert_eq!(a.next_delta(), b.next_delta());
        }
    }

    #[test]
    fn zero_fluctuation_is_flat() {
        let mut feed = RandomWalk::seeded(1, 0.0);
        assert_eq!(feed.next_delta(), 0.0);
    }

    #[test]
    fn scripted_feed_cycles() {
        let mut feed = ScriptedFeed::new(vec![1.0, -2.0]);
        let got: Vec<f64> = (0..5).map(|_| feed.next_delta()).collect();
        assert_eq!(got, vec![1.0, -2.0, 1.0, -2.0, 1.0]);
        assert_eq!(ScriptedFeed::new(vec![]).next_delta(), 0.0);
    }
}
