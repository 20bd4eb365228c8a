//! Snapshot persistence for Terminalia.
//!
//! The engine itself is pure; this crate gives the CLI and integration
//! tests a concrete way to load and save catalog snapshots.

#![warn(missing_docs)]

mod json_store;
mod trait_;

pub use json_store::JsonSnapshotStore;
pub use trait_::{Result, SnapshotStore, StoreError};
