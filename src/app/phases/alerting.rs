use eframe::Frame;
use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::{AlertState, AppState}};

impl PhaseView for AlertState {
    fn tick(&mut self, app: &mut App, ctx: &Context, _frame: &mut Frame) -> AppState {
        app.tick_alert_state(ctx, self)
    }
}
