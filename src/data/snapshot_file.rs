// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))] so no need to gate internally here

use {
    crate::data::Snapshot,
    anyhow::{Context, Result},
    std::fs::File,
    std::io::{BufReader, BufWriter},
    std::path::Path,
};

pub fn save_snapshot_file(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create snapshot file {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, snapshot)?;
    Ok(())
}

/// A missing file is a fresh game, not an error.
pub fn load_snapshot_file(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        return Ok(Snapshot::default());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot file {}", path.display()))?;
    let reader = BufReader::new(file);
    let snapshot = serde_json::from_reader(reader)
        .with_context(|| format!("Snapshot file {} is not a valid game record", path.display()))?;
    Ok(snapshot)
}
