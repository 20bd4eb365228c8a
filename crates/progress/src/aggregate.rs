//! Completion roll-ups for lessons and courses.

use serde::{Deserialize, Serialize};

use terminalia_core::{CourseId, LessonId, Snapshot};

/// Completion counts for a single lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    /// Completed exercises
    pub completed: usize,

    /// Total exercises in the lesson
    pub total: usize,

    /// Whether the lesson is fully done.
    ///
    /// A lesson with zero exercises is never "done"; an empty lesson
    /// must not be vacuously reported as finished.
    pub all_done: bool,
}

/// Completion roll-up for a whole course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Completed exercises across all lessons
    pub completed_exercises: usize,

    /// Total exercises across all lessons
    pub total_exercises: usize,

    /// Lessons whose every exercise is completed (empty lessons excluded)
    pub lessons_done: usize,

    /// Total lessons in the course
    pub total_lessons: usize,

    /// Percentage complete
    pub percentage: f32,
}

/// XP earned vs. available for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpSummary {
    /// XP from completed exercises
    pub earned: u32,

    /// XP from every exercise in the course
    pub available: u32,
}

/// Count completed vs. total exercises for one lesson.
///
/// Exercises referencing other lessons (or no known lesson at all) do
/// not contribute. Pure function over the snapshot.
pub fn lesson_progress(snapshot: &Snapshot, lesson_id: LessonId) -> LessonProgress {
    let exercises = snapshot.lesson_exercises(lesson_id);
    let total = exercises.len();
    let completed = exercises.iter().filter(|ex| ex.completed).count();

    LessonProgress {
        completed,
        total,
        all_done: total > 0 && completed == total,
    }
}

/// Roll up lesson progress across a course.
///
/// Returns `None` for an unknown course.
pub fn course_progress(snapshot: &Snapshot, course_id: CourseId) -> Option<CourseProgress> {
    let course = snapshot.course(course_id)?;

    let mut completed_exercises = 0;
    let mut total_exercises = 0;
    let mut lessons_done = 0;

    for lesson in &course.lessons {
        let progress = lesson_progress(snapshot, lesson.id);
        completed_exercises += progress.completed;
        total_exercises += progress.total;
        if progress.all_done {
            lessons_done += 1;
        }
    }

    let percentage = if total_exercises > 0 {
        (completed_exercises as f32 / total_exercises as f32) * 100.0
    } else {
        0.0
    };

    Some(CourseProgress {
        completed_exercises,
        total_exercises,
        lessons_done,
        total_lessons: course.lessons.len(),
        percentage,
    })
}

/// Sum XP rewards for a course: earned (completed exercises) and
/// available (all exercises).
///
/// Returns `None` for an unknown course.
pub fn xp_summary(snapshot: &Snapshot, course_id: CourseId) -> Option<XpSummary> {
    let course = snapshot.course(course_id)?;

    let mut earned = 0;
    let mut available = 0;
    for lesson in &course.lessons {
        for ex in snapshot.lesson_exercises(lesson.id) {
            available += ex.xp_reward;
            if ex.completed {
                earned += ex.xp_reward;
            }
        }
    }

    Some(XpSummary { earned, available })
}
