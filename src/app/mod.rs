mod phases;
mod root;
mod state;
mod step;

pub(crate) use state::{AlertState, AppState, RunningState};
pub(crate) use step::advance_frame;

pub use root::App;
