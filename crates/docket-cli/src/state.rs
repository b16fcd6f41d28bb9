//! Schedule snapshot persistence for the CLI.
//!
//! The engine's store is in-memory; the CLI is the external collaborator
//! that persists it, as a pretty-printed JSON snapshot next to the
//! config file.

use docket_core::{config, ScheduleStore, StoreSnapshot};
use std::path::PathBuf;

fn store_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(config::data_dir()?.join("schedule.json"))
}

/// Load the persisted store, starting empty on first run.
pub fn load_store() -> Result<ScheduleStore, Box<dyn std::error::Error>> {
    let path = store_path()?;
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let snapshot: StoreSnapshot = serde_json::from_str(&content)?;
            let store = ScheduleStore::from_snapshot(snapshot);
            tracing::debug!(
                events = store.events().len(),
                deadlines = store.deadlines().len(),
                "loaded schedule snapshot"
            );
            Ok(store)
        }
        Err(_) => {
            tracing::debug!(path = %path.display(), "no snapshot yet, starting empty");
            Ok(ScheduleStore::new())
        }
    }
}

/// Persist the store back to disk.
pub fn save_store(store: &ScheduleStore) -> Result<(), Box<dyn std::error::Error>> {
    let path = store_path()?;
    let content = serde_json::to_string_pretty(&store.snapshot())?;
    std::fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), "saved schedule snapshot");
    Ok(())
}
