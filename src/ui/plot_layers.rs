use egui_plot::{HLine, Line, LineStyle, PlotPoints, PlotUi, Points};

use crate::config::{PLOT_CONFIG, Price};
use crate::models::PriceHistory;
use crate::ui::UI_TEXT;
use crate::ui::chart::ChartGeometry;

/// Everything a layer may need to draw itself.
pub struct LayerContext<'a> {
    pub history: &'a PriceHistory,
    pub floor: Price,
}

pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

/// The price history itself.
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.history.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(
                UI_TEXT.plot_price_series,
                PlotPoints::new(ChartGeometry::points(ctx.history)),
            )
            .color(PLOT_CONFIG.price_line_color)
            .width(PLOT_CONFIG.price_line_width),
        );
    }
}

/// Dashed guide at the price floor.
pub struct FloorLineLayer;

impl PlotLayer for FloorLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        plot_ui.hline(
            HLine::new(UI_TEXT.plot_floor_series, ctx.floor.value())
                .color(PLOT_CONFIG.floor_line_color)
                .width(PLOT_CONFIG.floor_line_width)
                .style(LineStyle::Dashed { length: 6.0 }),
        );
    }
}

/// Dot on the most recent sample.
pub struct LastPriceLayer;

impl PlotLayer for LastPriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(last) = ctx.history.latest() else {
            return;
        };
        let x = (ctx.history.len() - 1) as f64;
        plot_ui.points(
            Points::new("", PlotPoints::new(vec![[x, last.value()]]))
                .color(PLOT_CONFIG.last_price_color)
                .radius(PLOT_CONFIG.last_price_radius),
        );
    }
}
