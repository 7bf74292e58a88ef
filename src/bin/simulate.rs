//! Headless run of the market: same engine, scripted threshold strategy, table output.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

use tick_trader::config::{MARKET, PLOT_CONFIG};
use tick_trader::data::{Snapshot, load_snapshot_file, save_snapshot_file};
use tick_trader::engine::{RandomWalk, TradeAction, TradingEngine};
use tick_trader::models::TradingState;
use tick_trader::ui::{format_signed_usd, format_usd};
use tick_trader::utils::epoch_ms_to_time_string;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the price walk without a window", long_about = None)]
struct Args {
    /// Number of price ticks to simulate
    #[arg(long, default_value_t = 100)]
    ticks: usize,

    /// Seed for a reproducible walk
    #[arg(long)]
    seed: Option<u64>,

    /// Buy one unit whenever the price ticks below this
    #[arg(long, default_value_t = 95.0)]
    buy_below: f64,

    /// Sell one unit whenever the price ticks above this
    #[arg(long, default_value_t = 105.0)]
    sell_above: f64,

    /// Snapshot JSON to resume from and write back to
    #[arg(long)]
    state: Option<PathBuf>,
}

#[derive(Tabled)]
struct TransactionLine {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Type")]
    side: String,
    #[tabled(rename = "Units")]
    units: u32,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Total")]
    total: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let capacity = PLOT_CONFIG.history_capacity();

    let state = match &args.state {
        Some(path) => load_snapshot_file(path)?.into_state(capacity),
        None => TradingState::with_history_capacity(capacity),
    };
    let recorded_before = state.transactions.len();

    let mut engine = TradingEngine::new(state, Box::new(RandomWalk::from_market(args.seed)));
    let mut rejected = 0usize;

    for _ in 0..args.ticks {
        let price = engine.tick().value();
        let action = if price < args.buy_below {
            Some(TradeAction::Buy)
        } else if price > args.sell_above {
            Some(TradeAction::Sell)
        } else {
            None
        };
        if let Some(action) = action {
            if engine.apply(action).is_err() {
                rejected += 1;
            }
        }
    }

    let s = engine.state();
    let rows: Vec<TransactionLine> = s
        .transactions
        .iter()
        .enumerate()
        .skip(recorded_before)
        .map(|(i, tx)| TransactionLine {
            index: i + 1,
            time: epoch_ms_to_time_string(tx.timestamp_ms),
            side: tx.side.to_string(),
            units: tx.units,
            unit_price: format!("${}", tx.unit_price),
            total: format_usd(tx.total),
        })
        .collect();

    if rows.is_empty() {
        println!("No trades in {} ticks.", args.ticks);
    } else {
        println!("{}", Table::new(rows).with(Style::rounded()));
    }

    println!(
        "Ticks: {} | Price: {} (floor {}) | Rejected: {}",
        args.ticks,
        s.current_price,
        MARKET.price_floor,
        rejected
    );
    println!(
        "Balance: {} | Holdings: {} | Net worth: {} | P&L: {}",
        format_usd(s.portfolio.balance),
        s.portfolio.holdings,
        format_usd(engine.net_worth()),
        format_signed_usd(engine.profit_and_loss())
    );

    if let Some(path) = &args.state {
        save_snapshot_file(path, &Snapshot::from(engine.state()))?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}
