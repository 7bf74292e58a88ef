mod snapshot;
mod state_io;
mod store;

#[cfg(not(target_arch = "wasm32"))]
mod snapshot_file;

pub use {
    snapshot::Snapshot,
    state_io::{load_state, save_state},
    store::{KeyValueStore, MemoryStore},
};

#[cfg(not(target_arch = "wasm32"))]
pub use snapshot_file::{load_snapshot_file, save_snapshot_file};
