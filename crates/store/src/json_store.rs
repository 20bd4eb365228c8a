//! JSON file snapshot store.
//!
//! Persists the whole catalog snapshot as one pretty-printed JSON file.
//! Loading re-runs snapshot validation, so a hand-edited file with
//! duplicate positions or IDs is rejected instead of silently skewing
//! unlock results.

use std::path::{Path, PathBuf};

use terminalia_core::Snapshot;
use tokio::fs;

use super::{Result, SnapshotStore, StoreError};

/// File-based JSON snapshot store.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store backed by the given file path. The file does not
    /// need to exist yet; loading before the first save yields
    /// [`StoreError::NotFound`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn load_snapshot(&self) -> Result<Snapshot> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let raw: Snapshot = serde_json::from_str(&json)?;

        // Rebuild through the validating constructor; the capture time
        // belongs to the stored data, not to this load.
        let captured_at = raw.captured_at;
        let mut snapshot = Snapshot::new(raw.courses, raw.exercises)?;
        snapshot.captured_at = captured_at;

        tracing::debug!(
            path = %self.path.display(),
            courses = snapshot.courses.len(),
            exercises = snapshot.exercises.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    async fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json.as_bytes()).await?;
        tracing::debug!(path = %self.path.display(), "saved snapshot");
        Ok(())
    }
}
