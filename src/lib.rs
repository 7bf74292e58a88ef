#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the simulate binary)
pub use app::App;
pub use config::PERSISTENCE;
pub use engine::{TradeAction, TradingEngine};
pub use models::TradingState;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the price walk so a session can be replayed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start a fresh game instead of loading the saved one (the save is overwritten on the first change)
    #[arg(long, default_value_t = false)]
    pub reset: bool,

    /// Milliseconds between price ticks
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
