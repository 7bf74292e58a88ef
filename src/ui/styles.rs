use {
    crate::config::{PLOT_CONFIG, TradeSide},
    crate::ui::UI_CONFIG,
    eframe::egui::{Color32, RichText},
};

pub(crate) fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .strong()
        .color(UI_CONFIG.colors.heading)
}

pub trait SideColor {
    fn color(&self) -> Color32;
}

impl SideColor for TradeSide {
    fn color(&self) -> Color32 {
        match self {
            Self::Buy => PLOT_CONFIG.color_buy,
            Self::Sell => PLOT_CONFIG.color_sell,
        }
    }
}

pub fn get_outcome_color(value: f64) -> Color32 {
    if value > 0.0 {
        PLOT_CONFIG.color_profit
    } else if value < 0.0 {
        PLOT_CONFIG.color_loss
    } else {
        PLOT_CONFIG.color_text_subdued
    }
}
