//! Pure state transitions. Nothing in here touches the UI or the store.

use crate::config::{MARKET, Price, TradeSide};
use crate::engine::{PriceFeed, TradeError};
use crate::models::{TradingState, Transaction};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl From<TradeSide> for TradeAction {
    fn from(side: TradeSide) -> Self {
        match side {
            TradeSide::Buy => TradeAction::Buy,
            TradeSide::Sell => TradeAction::Sell,
        }
    }
}

/// Buy `MARKET.trade_units` at the current price.
/// On rejection the state is left untouched and nothing is recorded.
pub fn buy(state: &mut TradingState, timestamp_ms: i64) -> Result<Transaction, TradeError> {
    let units = MARKET.trade_units;
    let price = state.current_price;
    if !state.portfolio.can_afford(price, units) {
        return Err(TradeError::InsufficientBalance {
            balance: state.portfolio.balance,
            price,
        });
    }

    let tx = Transaction::new(TradeSide::Buy, units, price, timestamp_ms);
    state.portfolio.balance -= tx.total;
    state.portfolio.holdings += units;
    state.transactions.record(tx.clone());
    Ok(tx)
}

/// Sell `MARKET.trade_units` at the current price. Needs holdings > 0.
pub fn sell(state: &mut TradingState, timestamp_ms: i64) -> Result<Transaction, TradeError> {
    let units = MARKET.trade_units;
    if !state.portfolio.can_sell(units) {
        return Err(TradeError::NoHoldings);
    }

    let tx = Transaction::new(TradeSide::Sell, units, state.current_price, timestamp_ms);
    state.portfolio.balance += tx.total;
    state.portfolio.holdings -= units;
    state.transactions.record(tx.clone());
    Ok(tx)
}

pub fn apply(
    state: &mut TradingState,
    action: TradeAction,
    timestamp_ms: i64,
) -> Result<Transaction, TradeError> {
    match action {
        TradeAction::Buy => buy(state, timestamp_ms),
        TradeAction::Sell => sell(state, timestamp_ms),
    }
}

/// Move the price by one sampled delta, clamp to the floor, append to the history window.
pub fn tick(state: &mut TradingState, feed: &mut dyn PriceFeed) -> Price {
    let delta = feed.next_delta();
    let next = Price::floored(state.current_price + delta, MARKET.price_floor);
    state.current_price = next;
    state.history.push(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedFeed;
    use crate::models::Portfolio;
    use strum::IntoEnumIterator;

    #[test]
    fn every_side_maps_to_its_action() {
        let actions: Vec<TradeAction> = TradeSide::iter().map(TradeAction::from).collect();
        assert_eq!(actions, vec![TradeAction::Buy, TradeAction::Sell]);
    }

    #[test]
    fn buy_from_fresh_state() {
        let mut s = TradingState::default();
        let tx = buy(&mut s, 42).unwrap();

        assert_eq!(s.portfolio.balance, 9_900.0);
        assert_eq!(s.portfolio.holdings, 1);
        assert_eq!(s.transactions.len(), 1);
        assert_eq!(tx.side, TradeSide::Buy);
        assert_eq!(tx.units, 1);
        assert_eq!(tx.total, 100.0);
        assert_eq!(tx.timestamp_ms, 42);
    }

    #[test]
    fn buy_rejected_when_broke() {
        let mut s = TradingState::default();
        s.portfolio.balance = 99.99;
        let before = s.clone();

        let err = buy(&mut s, 0).unwrap_err();
        assert_eq!(
            err,
            TradeError::InsufficientBalance {
                balance: 99.99,
                price: Price::new(100.0)
            }
        );
        assert_eq!(err.to_string(), "Not enough balance to buy.");
        assert_eq!(s, before);
    }

    #[test]
    fn buy_allowed_with_exact_balance() {
        let mut s = TradingState::default();
        s.portfolio.balance = 100.0;
        buy(&mut s, 0).unwrap();
        assert_eq!(s.portfolio.balance, 0.0);
        assert_eq!(s.portfolio.holdings, 1);
    }

    #[test]
    fn sell_rejected_without_holdings() {
        let mut s = TradingState::default();
        let before = s.clone();

        let err = sell(&mut s, 0).unwrap_err();
        assert_eq!(err, TradeError::NoHoldings);
        assert_eq!(err.to_string(), "No assets to sell.");
        assert_eq!(s, before);
    }

    #[test]
    fn sell_credits_current_price() {
        let mut s = TradingState::default();
        s.portfolio = Portfolio {
            balance: 0.0,
            holdings: 3,
        };
        s.current_price = Price::new(57.25);

        let tx = sell(&mut s, 0).unwrap();
        assert_eq!(tx.side, TradeSide::Sell);
        assert_eq!(s.portfolio.balance, 57.25);
        assert_eq!(s.portfolio.holdings, 2);
        assert_eq!(s.transactions.last(), Some(&tx));
    }

    #[test]
    fn tick_applies_delta_and_records_history() {
        let mut s = TradingState::default();
        let mut feed = ScriptedFeed::new(vec![2.5, -1.0]);

        assert_eq!(tick(&mut s, &mut feed), Price::new(102.5));
        assert_eq!(tick(&mut s, &mut feed), Price::new(101.5));
        assert_eq!(s.history.to_vec(), vec![Price::new(102.5), Price::new(101.5)]);
    }

    #[test]
    fn tick_clamps_to_floor() {
        let mut s = TradingState::default();
        s.current_price = Price::new(12.0);
        let mut feed = ScriptedFeed::new(vec![-5.0]);

        assert_eq!(tick(&mut s, &mut feed), Price::new(10.0));
        assert_eq!(tick(&mut s, &mut feed), Price::new(10.0));
        assert_eq!(s.current_price, MARKET.price_floor);
    }

    #[test]
    fn tick_does_not_touch_portfolio_or_log() {
        let mut s = TradingState::default();
        buy(&mut s, 0).unwrap();
        let portfolio = s.portfolio;
        let mut feed = ScriptedFeed::new(vec![4.0]);
        tick(&mut s, &mut feed);
        assert_eq!(s.portfolio, portfolio);
        assert_eq!(s.transactions.len(), 1);
    }
}
