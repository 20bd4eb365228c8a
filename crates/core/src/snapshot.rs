//! Immutable course/lesson/exercise snapshots.
//!
//! The unlock and progress computations are pure functions over one of
//! these snapshots. Whoever fetched the data (backend client, JSON
//! store, test fixture) builds a `Snapshot` once; every derived value
//! is recomputed from it on demand with no hidden state.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::course::Course;
use crate::exercise::Exercise;
use crate::id::{CourseId, ExerciseId, LessonId};
use crate::Time;

/// Error type for snapshot validation.
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Errors raised while validating a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The same lesson ID appears more than once
    #[error("duplicate lesson {0}")]
    DuplicateLesson(LessonId),

    /// Two lessons in one course claim the same position
    #[error("course {course} has two lessons at position {position}")]
    DuplicateLessonPosition {
        /// Offending course
        course: CourseId,
        /// Position claimed twice
        position: u32,
    },

    /// The same exercise ID appears more than once
    #[error("duplicate exercise {0}")]
    DuplicateExercise(ExerciseId),

    /// Two exercises in one lesson claim the same position
    #[error("lesson {lesson} has two exercises at position {position}")]
    DuplicateExercisePosition {
        /// Offending lesson
        lesson: LessonId,
        /// Position claimed twice
        position: u32,
    },
}

/// A validated, position-ordered view of the course catalog together
/// with the current learner's exercise completion flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// When this snapshot was captured
    pub captured_at: Time,

    /// All courses, each with lessons sorted by position
    pub courses: Vec<Course>,

    /// All exercises across all courses, sorted by (lesson, position)
    pub exercises: Vec<Exercise>,
}

impl Snapshot {
    /// Build a snapshot from raw fetched records.
    ///
    /// Lessons and exercises are sorted by their `position` fields, so
    /// the order records arrived in carries no meaning. Duplicate IDs
    /// or duplicate positions within one owner are rejected. Exercises
    /// referencing an unknown lesson are kept but will never show up in
    /// any lesson's filtered set; they are logged at WARN.
    pub fn new(courses: Vec<Course>, exercises: Vec<Exercise>) -> Result<Self> {
        let mut snapshot = Self {
            captured_at: chrono::Utc::now(),
            courses,
            exercises,
        };

        for course in &mut snapshot.courses {
            course.lessons.sort_by_key(|l| l.position);
        }
        snapshot
            .exercises
            .sort_by_key(|ex| (ex.lesson_id, ex.position));

        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<()> {
        let mut lesson_ids = HashSet::new();
        for course in &self.courses {
            let mut positions = HashSet::new();
            for lesson in &course.lessons {
                if !lesson_ids.insert(lesson.id) {
                    return Err(SnapshotError::DuplicateLesson(lesson.id));
                }
                if !positions.insert(lesson.position) {
                    return Err(SnapshotError::DuplicateLessonPosition {
                        course: course.id,
                        position: lesson.position,
                    });
                }
            }
        }

        let mut exercise_ids = HashSet::new();
        let mut exercise_positions = HashSet::new();
        for ex in &self.exercises {
            if !exercise_ids.insert(ex.id) {
                return Err(SnapshotError::DuplicateExercise(ex.id));
            }
            if !exercise_positions.insert((ex.lesson_id, ex.position)) {
                return Err(SnapshotError::DuplicateExercisePosition {
                    lesson: ex.lesson_id,
                    position: ex.position,
                });
            }
            if !lesson_ids.contains(&ex.lesson_id) {
                tracing::warn!(
                    exercise = %ex.id,
                    lesson = %ex.lesson_id,
                    "exercise references unknown lesson; it will not count toward any progress"
                );
            }
        }

        Ok(())
    }

    /// Look up a course by ID.
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Find a lesson and its owning course.
    pub fn find_lesson(&self, id: LessonId) -> Option<(&Course, &crate::Lesson)> {
        self.courses
            .iter()
            .find_map(|c| c.lesson(id).map(|l| (c, l)))
    }

    /// Exercises belonging to one lesson, in position order.
    pub fn lesson_exercises(&self, lesson_id: LessonId) -> Vec<&Exercise> {
        // `exercises` is kept sorted by (lesson, position), so the
        // filtered view is already in lesson order.
        self.exercises
            .iter()
            .filter(|ex| ex.lesson_id == lesson_id)
            .collect()
    }
}
