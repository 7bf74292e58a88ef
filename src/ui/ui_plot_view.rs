use eframe::egui::{RichText, ScrollArea, Ui};
use egui_plot::{Legend, Plot};

use crate::config::{MARKET, PLOT_CONFIG};
use crate::models::PriceHistory;
use crate::ui::UI_TEXT;
use crate::ui::chart::ChartGeometry;
use crate::ui::plot_layers::{
    FloorLineLayer, LastPriceLayer, LayerContext, PlotLayer, PriceLineLayer,
};

/// The price chart. Layers draw back to front.
pub struct PlotView {
    layers: Vec<Box<dyn PlotLayer>>,
}

impl Default for PlotView {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotView {
    pub fn new() -> Self {
        Self {
            layers: vec![
                Box::new(FloorLineLayer),
                Box::new(PriceLineLayer),
                Box::new(LastPriceLayer),
            ],
        }
    }

    pub fn show(&self, ui: &mut Ui, history: &PriceHistory) {
        if history.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.plot_waiting)
                        .italics()
                        .color(PLOT_CONFIG.color_text_subdued),
                );
            });
            return;
        }

        let geometry = ChartGeometry::fit(history);
        let ctx = LayerContext {
            history,
            floor: MARKET.price_floor,
        };

        // The surface can outgrow the panel when prices run up; scroll rather than squash
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Plot::new("price_chart")
                    .height(geometry.height)
                    .legend(Legend::default())
                    .allow_zoom(false)
                    .allow_drag(false)
                    .allow_scroll(false)
                    .allow_boxed_zoom(false)
                    .include_x(0.0)
                    .include_x(geometry.x_max)
                    .include_y(geometry.y_min)
                    .include_y(geometry.y_max)
                    .x_axis_label(UI_TEXT.plot_x_axis)
                    .y_axis_label(UI_TEXT.plot_y_axis)
                    .show(ui, |plot_ui| {
                        for layer in &self.layers {
                            layer.render(plot_ui, &ctx);
                        }
                    });
            });
    }
}
