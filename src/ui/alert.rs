use eframe::egui::{Align2, Context, Key, Order, RichText, Window};

use crate::config::PLOT_CONFIG;
use crate::ui::UI_TEXT;

/// Blocking notice with a single OK button. Returns true once dismissed.
pub(crate) fn render_alert(ctx: &Context, message: &str) -> bool {
    let mut dismissed = ctx.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Escape));

    Window::new(UI_TEXT.alert_title)
        .collapsible(false)
        .resizable(false)
        .order(Order::Tooltip) // Plot draws on Foreground, stay above it
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(message).color(PLOT_CONFIG.color_warning));
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button(UI_TEXT.alert_ok).clicked() {
                    dismissed = true;
                }
            });
        });

    dismissed
}
