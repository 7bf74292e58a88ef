// src/app/state.rs

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RunningState;

/// A rejected trade is on screen and waiting for OK.
#[derive(Clone, Debug)]
pub(crate) struct AlertState {
    pub(crate) message: String,
}

impl AlertState {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub(crate) enum AppState {
    Running(RunningState),
    Alerting(AlertState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Running(RunningState)
    }
}
