use crate::data::{KeyValueStore, save_state};
use crate::engine::{TradeAction, TradeError, TradingEngine};

/// What one frame did to the game.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct StepOutcome {
    /// State moved, so the dashboard needs rebuilding.
    pub changed: bool,
    /// The trade the player asked for was refused.
    pub rejected: Option<TradeError>,
}

/// Apply a due tick and then the requested trade. The store is written once
/// when either moved the state; a refused trade writes nothing.
pub(crate) fn advance_frame<S: KeyValueStore + ?Sized>(
    engine: &mut TradingEngine,
    store: Option<&mut S>,
    tick_due: bool,
    action: Option<TradeAction>,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if tick_due {
        engine.tick();
        outcome.changed = true;
    }

    if let Some(action) = action {
        match engine.apply(action) {
            Ok(_) => outcome.changed = true,
            Err(err) => outcome.rejected = Some(err),
        }
    }

    if outcome.changed {
        if let Some(store) = store {
            if let Err(err) = save_state(store, engine.state()) {
                log::error!("Failed to save state: {:#}", err);
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PERSISTENCE;
    use crate::data::{MemoryStore, load_state};
    use crate::engine::ScriptedFeed;
    use crate::models::TradingState;

    fn engine() -> TradingEngine {
        TradingEngine::new(TradingState::default(), Box::new(ScriptedFeed::new(vec![1.0])))
    }

    #[test]
    fn idle_frame_writes_nothing() {
        let mut e = engine();
        let mut store = MemoryStore::new();
        let out = advance_frame(&mut e, Some(&mut store), false, None);
        assert_eq!(out, StepOutcome::default());
        assert_eq!(store.flush_count(), 0);
    }

    #[test]
    fn tick_is_saved() {
        let mut e = engine();
        let mut store = MemoryStore::new();
        let out = advance_frame(&mut e, Some(&mut store), true, None);
        assert!(out.changed);
        assert_eq!(store.flush_count(), 1);
        assert_eq!(load_state(&store, 250).current_price, e.state().current_price);
    }

    #[test]
    fn accepted_trade_is_saved() {
        let mut e = engine();
        let mut store = MemoryStore::new();
        let out = advance_frame(&mut e, Some(&mut store), false, Some(TradeAction::Buy));
        assert!(out.changed);
        assert_eq!(out.rejected, None);
        assert_eq!(store.flush_count(), 1);
        assert_eq!(load_state(&store, 250).portfolio.holdings, 1);
    }

    #[test]
    fn rejected_trade_writes_nothing() {
        let mut e = engine();
        let mut store = MemoryStore::new();
        let out = advance_frame(&mut e, Some(&mut store), false, Some(TradeAction::Sell));
        assert!(!out.changed);
        assert_eq!(out.rejected, Some(TradeError::NoHoldings));
        assert_eq!(store.flush_count(), 0);
        assert!(store.get_string(PERSISTENCE.storage_key).is_none());
    }

    #[test]
    fn tick_with_rejected_trade_saves_once() {
        let mut e = engine();
        let mut store = MemoryStore::new();
        let out = advance_frame(&mut e, Some(&mut store), true, Some(TradeAction::Sell));
        assert!(out.changed);
        assert_eq!(out.rejected, Some(TradeError::NoHoldings));
        assert_eq!(store.flush_count(), 1);
    }

    #[test]
    fn missing_store_still_advances() {
        let mut e = engine();
        let out = advance_frame::<MemoryStore>(&mut e, None, true, Some(TradeAction::Buy));
        assert!(out.changed);
        assert_eq!(e.state().portfolio.holdings, 1);
    }
}
