//! Terminalia core data models.
//!
//! This crate defines the course catalog entities and the immutable
//! [`Snapshot`] that the unlock and progress computations operate on.

#![warn(missing_docs)]

// Core identities
mod id;

// Catalog entities
mod course;
mod exercise;

// Validated input to the engine
mod snapshot;

// Re-exports
pub use id::{CourseId, ExerciseId, LessonId};

pub use course::{Course, Lesson};
pub use exercise::{Difficulty, Exercise, Language};
pub use snapshot::{Result, Snapshot, SnapshotError};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
