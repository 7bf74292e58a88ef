use anyhow::{Context, Result};

use crate::config::{DF, PERSISTENCE};
use crate::data::{KeyValueStore, Snapshot};
use crate::models::TradingState;

/// Read the saved game. Missing or unreadable records fall back to a fresh
/// game; the player is never told, only the log is.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S, history_capacity: usize) -> TradingState {
    let Some(raw) = store.get_string(PERSISTENCE.storage_key) else {
        if DF.log_persistence {
            log::info!("No saved state under '{}', starting fresh", PERSISTENCE.storage_key);
        }
        return TradingState::with_history_capacity(history_capacity);
    };

    match Snapshot::from_json(&raw) {
        Ok(snapshot) => {
            let state = snapshot.into_state(history_capacity);
            if DF.log_persistence {
                log::info!(
                    "Loaded state: balance ${:.2}, holdings {}, {} prices, {} transactions",
                    state.portfolio.balance,
                    state.portfolio.holdings,
                    state.history.len(),
                    state.transactions.len()
                );
            }
            state
        }
        Err(e) => {
            log::warn!("Ignoring malformed saved state ({}), starting fresh", e);
            TradingState::with_history_capacity(history_capacity)
        }
    }
}

/// Overwrite the saved game wholesale.
pub fn save_state<S: KeyValueStore + ?Sized>(store: &mut S, state: &TradingState) -> Result<()> {
    let json = Snapshot::from(state)
        .to_json()
        .context("Failed to serialize trading state")?;
    store.set_string(PERSISTENCE.storage_key, json);
    store.flush();
    if DF.log_persistence {
        log::info!("💾 Saved state under '{}'", PERSISTENCE.storage_key);
    }
    Ok(())
}
