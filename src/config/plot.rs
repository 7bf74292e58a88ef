//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Nominal chart width the history window is sized against (pixels)
    pub nominal_width: f32,
    /// Horizontal pixels given to each history sample.
    /// History capacity = nominal_width / px_per_sample
    pub px_per_sample: f32,
    /// Vertical pixels per dollar of price. The chart grows taller as prices climb.
    pub px_per_dollar: f32,
    /// Chart never shrinks below this height
    pub base_height: f32,
    /// ...and never grows beyond this one
    pub max_height: f32,
    /// Headroom above the highest visible price (0.1 = 10%)
    pub y_headroom_pct: f64,

    // --- LINES ---
    pub price_line_color: Color32,
    pub price_line_width: f32,
    pub floor_line_color: Color32,
    pub floor_line_width: f32,
    pub last_price_color: Color32,
    pub last_price_radius: f32,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_buy: Color32,
    pub color_sell: Color32,
    pub color_warning: Color32,

    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    nominal_width: 500.0,
    px_per_sample: 2.0,
    px_per_dollar: 2.0,
    base_height: 300.0,
    max_height: 900.0,
    y_headroom_pct: 0.10,

    // PRICE LINE - classic terminal green
    price_line_color: Color32::from_rgb(0, 255, 0),
    price_line_width: 1.5,
    floor_line_color: Color32::from_gray(90),
    floor_line_width: 1.0,
    last_price_color: Color32::from_rgb(255, 215, 0), // Gold
    last_price_radius: 3.0,

    // SEMANTICS
    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_buy: Color32::from_rgb(0, 191, 255),
    color_sell: Color32::from_rgb(255, 165, 0),
    color_warning: Color32::from_rgb(255, 215, 0),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};

impl PlotConfig {
    /// How many price samples the history window keeps.
    pub const fn history_capacity(&self) -> usize {
        (self.nominal_width / self.px_per_sample) as usize
    }
}
