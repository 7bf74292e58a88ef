use crate::config::TradeSide;

pub struct UiText {
    pub app_title: &'static str,

    // --- TOP PANEL ---
    pub label_balance: &'static str,
    pub label_holdings: &'static str,
    pub label_price: &'static str,
    pub button_buy: &'static str,
    pub button_sell: &'static str,
    pub hover_buy: &'static str,
    pub hover_sell: &'static str,

    // --- TRANSACTIONS ---
    pub tx_heading: &'static str,
    pub tx_empty: &'static str,

    // --- STATUS BAR ---
    pub status_net_worth: &'static str,
    pub status_pnl: &'static str,
    pub status_tick_every: &'static str,
    pub status_next_tick: &'static str,
    pub status_paused: &'static str,

    // --- PLOT LABELS ---
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub plot_price_series: &'static str,
    pub plot_floor_series: &'static str,
    pub plot_waiting: &'static str,

    // --- ALERT ---
    pub alert_title: &'static str,
    pub alert_ok: &'static str,

    // --- HELP ---
    pub help_title: &'static str,
    pub help_shortcuts: &'static [(&'static str, &'static str)],
}

impl UiText {
    /// Button label and hover text for one side of the market.
    pub fn trade_button(&self, side: TradeSide) -> (&'static str, &'static str) {
        match side {
            TradeSide::Buy => (self.button_buy, self.hover_buy),
            TradeSide::Sell => (self.button_sell, self.hover_sell),
        }
    }
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Tick Trader",

    label_balance: "Balance:",
    label_holdings: "Your Holdings:",
    label_price: "Current Price:",
    button_buy: "Buy",
    button_sell: "Sell",
    hover_buy: "Buy one unit at the current price",
    hover_sell: "Sell one unit at the current price",

    tx_heading: "Transactions",
    tx_empty: "No trades yet.",

    status_net_worth: "Net worth:",
    status_pnl: "P&L:",
    status_tick_every: "Tick every",
    status_next_tick: "next in",
    status_paused: "PAUSED",

    plot_x_axis: "Tick",
    plot_y_axis: "Price ($)",
    plot_price_series: "Price",
    plot_floor_series: "Floor",
    plot_waiting: "Waiting for the first tick...",

    alert_title: "Notice",
    alert_ok: "OK",

    help_title: "Keyboard Shortcuts",
    help_shortcuts: &[
        ("B", "Buy one unit"),
        ("S", "Sell one unit"),
        ("H", "Toggle this help panel"),
        ("ESC", "Close help / dismiss alert"),
        ("ENTER", "Dismiss alert"),
    ],
};
