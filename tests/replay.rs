use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tick_trader::config::{MARKET, Price, TradeSide};
use tick_trader::data::{KeyValueStore, MemoryStore, load_state, save_state};
use tick_trader::engine::{RandomWalk, ScriptedFeed, TradeAction, TradeError, TradingEngine};
use tick_trader::models::TradingState;

const CAPACITY: usize = 40;

fn engine_with(seed: u64) -> TradingEngine {
    TradingEngine::new(
        TradingState::with_history_capacity(CAPACITY),
        Box::new(RandomWalk::seeded(seed, MARKET.max_fluctuation)),
    )
}

/// Balance and holdings always equal the start plus the sum of every recorded trade.
#[test]
fn random_sessions_balance_against_the_log() {
    for seed in 0..25u64 {
        let mut engine = engine_with(seed);
        let mut script = StdRng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(7));

        for step in 0..400 {
            match script.gen_range(0..3) {
                0 => {
                    engine.tick();
                }
                1 => {
                    let _ = engine.apply_at(TradeAction::Buy, step);
                }
                _ => {
                    let _ = engine.apply_at(TradeAction::Sell, step);
                }
            }

            let s = engine.state();
            assert!(s.current_price >= MARKET.price_floor);
            assert!(s.history.len() <= CAPACITY);
        }

        let s = engine.state();
        let cash: f64 = s.transactions.iter().map(|tx| tx.cash_delta()).sum();
        let units: i64 = s.transactions.iter().map(|tx| tx.holdings_delta()).sum();

        assert!((s.portfolio.balance - (MARKET.starting_balance + cash)).abs() < 1e-6);
        assert_eq!(i64::from(s.portfolio.holdings), units);
        for tx in s.transactions.iter() {
            assert_eq!(tx.total, tx.unit_price * tx.units);
        }
    }
}

#[test]
fn rejected_trades_record_nothing() {
    let mut engine = engine_with(3);

    assert_eq!(
        engine.apply_at(TradeAction::Sell, 0),
        Err(TradeError::NoHoldings)
    );

    // Spend everything that is affordable at a flat price of 100
    let mut engine_flat = TradingEngine::new(
        TradingState::default(),
        Box::new(ScriptedFeed::new(vec![0.0])),
    );
    for _ in 0..100 {
        engine_flat.apply_at(TradeAction::Buy, 0).unwrap();
    }
    let before = engine_flat.state().clone();
    let err = engine_flat.apply_at(TradeAction::Buy, 0).unwrap_err();
    assert!(matches!(err, TradeError::InsufficientBalance { .. }));
    assert_eq!(engine_flat.state(), &before);
    assert_eq!(before.portfolio.balance, 0.0);
    assert_eq!(before.portfolio.holdings, 100);
    assert_eq!(engine.state().transactions.len(), 0);
}

#[test]
fn price_never_breaks_the_floor_under_a_crash() {
    let mut engine = TradingEngine::new(
        TradingState::with_history_capacity(CAPACITY),
        Box::new(ScriptedFeed::new(vec![-5.0])),
    );
    for _ in 0..500 {
        assert!(engine.tick() >= Price::new(10.0));
    }
    assert!(engine.state().history.iter().all(|p| p == MARKET.price_floor));
}

#[test]
fn history_drops_oldest_first() {
    let mut engine = TradingEngine::new(
        TradingState::with_history_capacity(3),
        Box::new(ScriptedFeed::new(vec![1.0])),
    );
    for _ in 0..5 {
        engine.tick();
    }
    assert_eq!(
        engine.state().history.to_vec(),
        vec![Price::new(103.0), Price::new(104.0), Price::new(105.0)]
    );
}

#[test]
fn session_survives_a_restart() {
    let mut engine = engine_with(99);
    for i in 0..60 {
        engine.tick();
        if i % 4 == 0 {
            let _ = engine.apply_at(TradeAction::Buy, i);
        }
        if i % 9 == 0 {
            let _ = engine.apply_at(TradeAction::Sell, i);
        }
    }

    let mut store = MemoryStore::new();
    save_state(&mut store, engine.state()).unwrap();
    assert!(store.get_string(tick_trader::PERSISTENCE.storage_key).is_some());

    let restored = load_state(&store, CAPACITY);
    assert_eq!(&restored, engine.state());
}

#[test]
fn first_buy_from_a_fresh_game() {
    let mut engine = TradingEngine::new(
        TradingState::default(),
        Box::new(ScriptedFeed::new(vec![])),
    );
    let tx = engine.apply_at(TradeAction::Buy, 0).unwrap();
    let s = engine.state();

    assert_eq!(s.portfolio.balance, 9_900.0);
    assert_eq!(s.portfolio.holdings, 1);
    assert_eq!(s.transactions.len(), 1);
    assert_eq!(tx.side, TradeSide::Buy);
    assert_eq!(tx.total, 100.0);
}
