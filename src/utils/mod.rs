mod time_utils;

pub use time_utils::{
    AppInstant, MS_IN_S, epoch_ms_to_time_string, format_duration, now_timestamp_ms,
};

