use chrono::{DateTime, Local, Utc};

/// Monotonic instant that also works in the browser (std's Instant panics on wasm32).
pub type AppInstant = web_time::Instant;

pub const MS_IN_S: i64 = 1000;
pub const STANDARD_TIME_FORMAT: &str = "%H:%M:%S";

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Local wall-clock time of day for the transaction list. Empty for unknown (0) timestamps.
pub fn epoch_ms_to_time_string(epoch_ms: i64) -> String {
    if epoch_ms <= 0 {
        return String::new();
    }
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format(STANDARD_TIME_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

pub fn format_duration(ms: i64) -> String {
    if ms < MS_IN_S {
        return format!("{}ms", ms);
    }
    let secs = ms / MS_IN_S;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}
