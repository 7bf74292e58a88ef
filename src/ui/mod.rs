mod alert;
mod chart;
mod dashboard;
mod plot_layers;
mod styles;
mod ui_config;
mod ui_plot_view;
mod ui_render;
mod ui_text;

pub use chart::ChartGeometry;
pub use dashboard::{DashboardView, TransactionRow, format_signed_usd, format_usd};

pub(crate) use alert::render_alert;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_plot_view::PlotView;
