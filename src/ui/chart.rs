//! Chart coordinate math: how the bounded history is laid onto the drawing surface.

use crate::config::{MARKET, PLOT_CONFIG};
use crate::models::PriceHistory;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    /// x runs from 0 to here; samples are spread across the full width
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Surface height in points. Grows with the price range, within config bounds.
    pub height: f32,
}

impl ChartGeometry {
    pub fn fit(history: &PriceHistory) -> Self {
        let highest = history
            .min_max()
            .map(|(_, hi)| hi.value())
            .unwrap_or(MARKET.starting_price.value())
            .max(MARKET.price_floor.value());

        let y_max = highest * (1.0 + PLOT_CONFIG.y_headroom_pct);
        let height = (y_max as f32 * PLOT_CONFIG.px_per_dollar)
            .clamp(PLOT_CONFIG.base_height, PLOT_CONFIG.max_height);

        Self {
            x_max: history.len().saturating_sub(1).max(1) as f64,
            y_min: 0.0,
            y_max,
            height,
        }
    }

    /// `[x, price]` pairs, oldest at x = 0.
    pub fn points(history: &PriceHistory) -> Vec<[f64; 2]> {
        history
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.value()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Price;

    fn history(vals: &[f64]) -> PriceHistory {
        PriceHistory::from_prices(vals.iter().copied().map(Price::new), 250)
    }

    #[test]
    fn empty_history_uses_base_surface() {
        let g = ChartGeometry::fit(&history(&[]));
        assert_eq!(g.height, PLOT_CONFIG.base_height);
        assert_eq!(g.x_max, 1.0);
        assert!((g.y_max - 110.0).abs() < 1e-9);
    }

    #[test]
    fn surface_grows_with_price_range() {
        let low = ChartGeometry::fit(&history(&[100.0, 120.0]));
        let high = ChartGeometry::fit(&history(&[100.0, 300.0]));
        assert_eq!(low.height, PLOT_CONFIG.base_height);
        assert!((high.height - 660.0).abs() < 1e-3);
        assert!(high.y_max > low.y_max);
    }

    #[test]
    fn surface_growth_is_capped() {
        let g = ChartGeometry::fit(&history(&[5_000.0]));
        assert_eq!(g.height, PLOT_CONFIG.max_height);
    }

    #[test]
    fn points_span_the_window() {
        let h = history(&[10.0, 11.0, 12.0]);
        let g = ChartGeometry::fit(&h);
        assert_eq!(g.x_max, 2.0);
        assert_eq!(
            ChartGeometry::points(&h),
            vec![[0.0, 10.0], [1.0, 11.0], [2.0, 12.0]]
        );
    }
}
