mod ledger;
mod portfolio;
mod price_history;
mod trading_state;
mod transaction;

pub use {
    ledger::TransactionLog, portfolio::Portfolio, price_history::PriceHistory,
    trading_state::TradingState, transaction::Transaction,
};
