use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{AlertState, AppState, RunningState, advance_frame, phases::PhaseView},
    config::{DF, MARKET, PLOT_CONFIG},
    data::{load_state, save_state},
    engine::{RandomWalk, TickClock, TradeAction, TradingEngine},
    models::TradingState,
    ui::{DashboardView, PlotView, UI_CONFIG, render_alert},
    utils::AppInstant,
};

pub struct App {
    pub(crate) engine: TradingEngine,
    pub(crate) clock: TickClock,
    pub(crate) dashboard: DashboardView,
    pub(crate) plot_view: PlotView,
    pub(crate) show_help: bool,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let capacity = PLOT_CONFIG.history_capacity();

        let trading_state = match cc.storage {
            Some(storage) if !args.reset => load_state(storage, capacity),
            _ => {
                if args.reset {
                    log::info!("--reset given, ignoring any saved game");
                }
                TradingState::with_history_capacity(capacity)
            }
        };

        let interval = args
            .tick_ms
            .map(Duration::from_millis)
            .unwrap_or(MARKET.tick_interval);

        let engine = TradingEngine::new(
            trading_state,
            Box::new(RandomWalk::from_market(args.seed)),
        );

        Self {
            dashboard: DashboardView::from_state(engine.state()),
            engine,
            clock: TickClock::new(interval, AppInstant::now()),
            plot_view: PlotView::new(),
            show_help: false,
            state: AppState::default(),
        }
    }

    /// B / S / H / ESC. Returns the trade the player asked for, if any.
    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) -> Option<TradeAction> {
        if ctx.wants_keyboard_input() {
            return None;
        }

        let mut action = None;
        ctx.input(|i| {
            if i.key_pressed(Key::B) {
                action = Some(TradeAction::Buy);
            }
            if i.key_pressed(Key::S) {
                action = Some(TradeAction::Sell);
            }
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }
            if i.key_pressed(Key::Escape) {
                self.show_help = false;
            }
        });
        action
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context, frame: &mut Frame) -> AppState {
        let now = AppInstant::now();
        let tick_due = self.clock.poll(now);

        let shortcut = self.handle_global_shortcuts(ctx);
        let clicked = self.render_top_panel(ctx, true);
        self.render_status_panel(ctx, Some(self.clock.remaining(now)));
        self.render_transaction_panel(ctx);
        self.render_central_panel(ctx);
        self.render_help_panel(ctx);

        let outcome = advance_frame(
            &mut self.engine,
            frame.storage_mut(),
            tick_due,
            clicked.or(shortcut),
        );

        if outcome.changed {
            self.dashboard = DashboardView::from_state(self.engine.state());
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(self.clock.repaint_after(now));
        }

        match outcome.rejected {
            Some(err) => {
                if DF.log_alerts {
                    log::info!("ALERT: {}", err);
                }
                AppState::Alerting(AlertState::new(err.to_string()))
            }
            None => AppState::Running(RunningState),
        }
    }

    /// Everything else is frozen behind the alert, including the price clock.
    pub(crate) fn tick_alert_state(&mut self, ctx: &Context, alert: &mut AlertState) -> AppState {
        self.render_top_panel(ctx, false);
        self.render_status_panel(ctx, None);
        self.render_transaction_panel(ctx);
        self.render_central_panel(ctx);

        if render_alert(ctx, &alert.message) {
            if DF.log_alerts {
                log::info!("ALERT dismissed");
            }
            self.clock.reset(AppInstant::now());
            ctx.request_repaint();
            return AppState::Running(RunningState);
        }
        AppState::Alerting(alert.clone())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Running(mut s) => s.tick(self, ctx, frame),
            AppState::Alerting(mut s) => s.tick(self, ctx, frame),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if let Err(err) = save_state(storage, self.engine.state()) {
            log::error!("Failed to save state: {:#}", err);
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.side_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
