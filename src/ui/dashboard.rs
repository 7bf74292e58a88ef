//! Display strings derived from the trading state. No egui in here so it can be tested headless.

use crate::config::{Price, TradeSide};
use crate::models::TradingState;
use crate::ui::UI_TEXT;
use crate::utils::epoch_ms_to_time_string;

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub side: TradeSide,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub balance: String,
    pub holdings: String,
    pub price: String,
    pub net_worth: String,
    pub pnl: f64,
    pub pnl_text: String,
    /// Newest first
    pub transactions: Vec<TransactionRow>,
}

pub fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

pub fn format_signed_usd(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_usd(value))
    } else {
        format_usd(value)
    }
}

pub fn format_price(price: Price) -> String {
    price.to_string()
}

impl DashboardView {
    pub fn from_state(state: &TradingState) -> Self {
        let pnl = state.profit_and_loss();
        Self {
            balance: format!(
                "{} {}",
                UI_TEXT.label_balance,
                format_usd(state.portfolio.balance)
            ),
            holdings: format!("{} {}", UI_TEXT.label_holdings, state.portfolio.holdings),
            price: format_price(state.current_price),
            net_worth: format_usd(state.net_worth()),
            pnl,
            pnl_text: format_signed_usd(pnl),
            transactions: state
                .transactions
                .newest_first()
                .map(|tx| TransactionRow {
                    side: tx.side,
                    text: tx.to_string(),
                    time: epoch_ms_to_time_string(tx.timestamp_ms),
                })
                .collect(),
        }
    }
}
