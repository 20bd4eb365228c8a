//! Course Progress & Unlock Engine
//!
//! Lesson unlock evaluation, exercise reachability, and completion
//! roll-ups, all as pure functions over a [`terminalia_core::Snapshot`].

#![warn(missing_docs)]

pub mod aggregate;
pub mod unlock;

pub use aggregate::{course_progress, lesson_progress, xp_summary};
pub use aggregate::{CourseProgress, LessonProgress, XpSummary};
pub use unlock::{exercise_reachability, lesson_unlock_map, next_lesson};

#[cfg(test)]
mod tests {
    use super::*;
    use terminalia_core::{Course, Difficulty, Exercise, Language, Lesson, Snapshot};

    /// A learner working through a course: the second lesson opens only
    /// after every first-lesson exercise is graded complete, and the
    /// roll-ups track each step.
    #[test]
    fn learner_walkthrough() {
        let mut course = Course::new("HTML Basics");
        course.lessons.push(Lesson::new("Tags", 0));
        course.lessons.push(Lesson::new("Attributes", 1));
        let (tags, attributes) = (course.lessons[0].id, course.lessons[1].id);
        let course_id = course.id;

        let mut ex1 = Exercise::new(tags, "Headings", 0, 10, Difficulty::Easy, Language::Html);
        let ex2 = Exercise::new(tags, "Lists", 1, 20, Difficulty::Easy, Language::Html);

        // One of two done: second lesson locked, second exercise reachable.
        ex1.completed = true;
        let snap = Snapshot::new(vec![course.clone()], vec![ex1.clone(), ex2.clone()]).unwrap();
        let unlocked = lesson_unlock_map(&snap);
        assert_eq!(unlocked.get(&attributes), Some(&false));
        let reachable = exercise_reachability(&snap.lesson_exercises(tags), true);
        assert_eq!(reachable, [true, true]);
        assert_eq!(xp_summary(&snap, course_id).unwrap().earned, 10);

        // Grader marks the second exercise complete: lesson done, next unlocked.
        let mut ex2 = ex2;
        ex2.completed = true;
        let snap = Snapshot::new(vec![course.clone()], vec![ex1, ex2]).unwrap();
        assert_eq!(lesson_unlock_map(&snap).get(&attributes), Some(&true));
        assert!(lesson_progress(&snap, tags).all_done);
        assert_eq!(next_lesson(&course, tags), Some(attributes));

        let rollup = course_progress(&snap, course_id).unwrap();
        assert_eq!(rollup.lessons_done, 1);
        assert_eq!(rollup.completed_exercises, 2);
    }
}
