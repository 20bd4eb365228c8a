//! Course and lesson models.

use serde::{Deserialize, Serialize};

use crate::id::{CourseId, LessonId};

/// A course is a top-level grouping of lessons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier
    pub id: CourseId,

    /// Course title
    pub title: String,

    /// Lessons in this course, ordered by `position`
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Create a course with no lessons yet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CourseId::new(),
            title: title.into(),
            lessons: Vec::new(),
        }
    }

    /// Look up a lesson by ID.
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }
}

/// An ordered unit within a course, containing exercises.
///
/// Ordering is carried by the explicit `position` field, not by the
/// index a lesson happens to occupy in a fetched list. Positions are
/// validated for uniqueness when a [`crate::Snapshot`] is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique identifier
    pub id: LessonId,

    /// Lesson title
    pub title: String,

    /// Position within the owning course (0 = first)
    pub position: u32,
}

impl Lesson {
    /// Create a lesson at the given position.
    pub fn new(title: impl Into<String>, position: u32) -> Self {
        Self {
            id: LessonId::new(),
            title: title.into(),
            position,
        }
    }
}
