use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// Panel and text colours for the trading screen
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Layout and colour settings for every panel
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub transaction_panel_width: f32,
    pub button_min_width: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        central_panel: Color32::from_rgb(18, 18, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
    },
    transaction_panel_width: 280.0,
    button_min_width: 72.0,
};

/// Inner padding of the panels, in points
const PANEL_PADDING: i8 = 8;

impl UiConfig {
    fn panel_frame(fill: Color32, inner_margin: Margin) -> Frame {
        Frame {
            fill,
            stroke: Stroke::NONE,
            inner_margin,
            ..Default::default()
        }
    }

    /// Transaction log on the right
    pub fn side_panel_frame(&self) -> Frame {
        Self::panel_frame(self.colors.side_panel, Margin::same(PANEL_PADDING))
    }

    /// Balance, price and the trade buttons
    pub fn top_panel_frame(&self) -> Frame {
        Self::panel_frame(self.colors.side_panel, Margin::same(PANEL_PADDING))
    }

    /// Net worth and countdown; tighter vertically
    pub fn bottom_panel_frame(&self) -> Frame {
        Self::panel_frame(
            self.colors.side_panel,
            Margin::symmetric(PANEL_PADDING, PANEL_PADDING / 2),
        )
    }

    /// Price chart
    pub fn central_panel_frame(&self) -> Frame {
        Self::panel_frame(self.colors.central_panel, Margin::same(PANEL_PADDING))
    }
}
