use std::time::Duration;

use eframe::egui::{
    Button, CentralPanel, Context, Grid, Order, RichText, ScrollArea, SidePanel, TopBottomPanel,
    Ui, Window,
};

use strum::IntoEnumIterator;

use crate::app::App;
use crate::config::{PLOT_CONFIG, TradeSide};
use crate::engine::TradeAction;
use crate::ui::styles::{SideColor, colored_heading, get_outcome_color};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::format_duration;

impl App {
    /// Balance / holdings / price plus the two trade buttons.
    /// `interactive` is false while the alert is up.
    pub(crate) fn render_top_panel(&self, ctx: &Context, interactive: bool) -> Option<TradeAction> {
        let mut action = None;
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(colored_heading(UI_TEXT.app_title));
                    ui.separator();

                    ui.label(
                        RichText::new(&self.dashboard.balance).color(PLOT_CONFIG.color_text_primary),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(&self.dashboard.holdings).color(PLOT_CONFIG.color_text_primary),
                    );
                    ui.separator();
                    ui.label(UI_TEXT.label_price);
                    ui.label(
                        RichText::new(&self.dashboard.price)
                            .strong()
                            .monospace()
                            .color(PLOT_CONFIG.last_price_color),
                    );
                    ui.separator();

                    for side in TradeSide::iter() {
                        let (label, hover) = UI_TEXT.trade_button(side);
                        let button =
                            Button::new(RichText::new(label).strong().color(side.color()))
                                .min_size([UI_CONFIG.button_min_width, 0.0].into());
                        if ui
                            .add_enabled(interactive, button)
                            .on_hover_text(hover)
                            .clicked()
                        {
                            action = Some(TradeAction::from(side));
                        }
                    }
                });
            });

        action
    }

    /// `next_tick` is None while the clock is paused.
    pub(crate) fn render_status_panel(&self, ctx: &Context, next_tick: Option<Duration>) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Net worth and P&L
                    ui.label(UI_TEXT.status_net_worth);
                    ui.label(
                        RichText::new(&self.dashboard.net_worth).color(PLOT_CONFIG.color_text_neutral),
                    );
                    ui.label(UI_TEXT.status_pnl);
                    ui.label(
                        RichText::new(&self.dashboard.pnl_text)
                            .strong()
                            .color(get_outcome_color(self.dashboard.pnl)),
                    );

                    ui.separator();

                    // 2. Clock
                    self.render_status_clock(ui, next_tick);
                });
            });
    }

    fn render_status_clock(&self, ui: &mut Ui, next_tick: Option<Duration>) {
        let interval_ms = self.clock.interval().as_millis() as i64;
        ui.label(
            RichText::new(format!(
                "{} {}",
                UI_TEXT.status_tick_every,
                format_duration(interval_ms)
            ))
            .small()
            .color(PLOT_CONFIG.color_text_subdued),
        );
        match next_tick {
            Some(remaining) => {
                // Round up so the countdown never shows 0s while still waiting
                let secs = remaining.as_millis().div_ceil(1000);
                ui.label(
                    RichText::new(format!("{} {}s", UI_TEXT.status_next_tick, secs))
                        .small()
                        .color(PLOT_CONFIG.color_text_subdued),
                );
            }
            None => {
                ui.label(
                    RichText::new(UI_TEXT.status_paused)
                        .small()
                        .strong()
                        .color(PLOT_CONFIG.color_warning),
                );
            }
        }
    }

    pub(crate) fn render_transaction_panel(&self, ctx: &Context) {
        SidePanel::right("transaction_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(UI_CONFIG.transaction_panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                ui.label(colored_heading(format!(
                    "{} ({})",
                    UI_TEXT.tx_heading,
                    self.dashboard.transactions.len()
                )));
                ui.separator();

                if self.dashboard.transactions.is_empty() {
                    ui.label(
                        RichText::new(UI_TEXT.tx_empty)
                            .italics()
                            .color(PLOT_CONFIG.color_text_subdued),
                    );
                    return;
                }

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        Grid::new("transaction_grid")
                            .striped(true)
                            .num_columns(2)
                            .show(ui, |ui| {
                                for row in &self.dashboard.transactions {
                                    ui.label(
                                        RichText::new(&row.time)
                                            .small()
                                            .monospace()
                                            .color(PLOT_CONFIG.color_text_subdued),
                                    );
                                    ui.label(RichText::new(&row.text).color(row.side.color()));
                                    ui.end_row();
                                }
                            });
                    });
            });
    }

    pub(crate) fn render_central_panel(&self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                self.plot_view.show(ui, &self.engine.state().history);
            });
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(crate) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .order(Order::Tooltip) // Plot draws on Foreground, so sit above it
            .collapsible(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, UI_TEXT.help_shortcuts);
                    });
            });
    }
}
