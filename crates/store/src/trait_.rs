//! Snapshot store trait abstraction.

use async_trait::async_trait;
use terminalia_core::{Snapshot, SnapshotError};

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading or saving snapshots.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored snapshot failed validation
    #[error("invalid snapshot: {0}")]
    Invalid(#[from] SnapshotError),

    /// No snapshot exists yet
    #[error("snapshot not found: {0}")]
    NotFound(String),
}

/// Storage abstraction for catalog snapshots.
///
/// This trait allows different backends to be plugged in; the bundled
/// backend is a single JSON file.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the current snapshot.
    async fn load_snapshot(&self) -> Result<Snapshot>;

    /// Persist a snapshot (create or replace).
    async fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<()>;
}
