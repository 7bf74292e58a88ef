//! Debugging feature flags.

pub struct LogFlags {
    /// Log every price tick (noisy: one line per interval)
    pub log_ticks: bool,

    /// Log accepted and rejected trades
    pub log_trades: bool,

    /// Log snapshot loads/saves
    pub log_persistence: bool,

    /// Log when the blocking alert opens and closes
    pub log_alerts: bool,
}

pub const DF: LogFlags = LogFlags {
    log_trades: true,
    log_alerts: true,

    log_ticks: false,
    log_persistence: false,
};
