//! Persistence configuration

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    /// Key the whole game snapshot lives under (local storage on web, state file on native)
    pub storage_key: &'static str,
    /// Path for saving/loading application state on native builds
    pub state_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    storage_key: "tradingGameState",
    state_path: ".tick_trader_state.ron",
};
