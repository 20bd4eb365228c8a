//! Lesson unlock evaluation and exercise reachability.
//!
//! Each course's unlock chain is evaluated independently: a lesson is
//! gated only by the lesson immediately before it in position order.
//! Within an unlocked lesson, exercises gate each other linearly.

use std::collections::HashMap;

use terminalia_core::{Course, Exercise, LessonId, Snapshot};

/// Compute the unlock state of every lesson in the snapshot.
///
/// The first lesson of each course is always unlocked. Each subsequent
/// lesson is unlocked iff the previous lesson has at least one exercise
/// and all of them are completed. A lesson with zero exercises therefore
/// keeps its successor locked; that mirrors the platform's observed
/// behavior and is pinned by a test below rather than "fixed" here.
///
/// The returned map is total: every lesson of every course has an entry.
pub fn lesson_unlock_map(snapshot: &Snapshot) -> HashMap<LessonId, bool> {
    let mut status = HashMap::new();

    for course in &snapshot.courses {
        // First lesson is always unlocked
        if let Some(first) = course.lessons.first() {
            status.insert(first.id, true);
        }

        // Subsequent lessons depend on the previous lesson's completion
        for pair in course.lessons.windows(2) {
            let prev = snapshot.lesson_exercises(pair[0].id);
            let unlocked = !prev.is_empty() && prev.iter().all(|ex| ex.completed);
            status.insert(pair[1].id, unlocked);
        }
    }

    tracing::debug!(
        lessons = status.len(),
        unlocked = status.values().filter(|u| **u).count(),
        "evaluated lesson unlock state"
    );
    status
}

/// Compute which of a lesson's exercises are reachable, in position order.
///
/// A locked lesson makes every exercise unreachable. In an unlocked
/// lesson the first exercise is always reachable, and each later one
/// becomes reachable once everything before it is completed.
pub fn exercise_reachability(lesson_exercises: &[&Exercise], lesson_unlocked: bool) -> Vec<bool> {
    if !lesson_unlocked {
        return vec![false; lesson_exercises.len()];
    }

    let mut prefix_complete = true;
    lesson_exercises
        .iter()
        .enumerate()
        .map(|(index, ex)| {
            let reachable = index == 0 || prefix_complete;
            prefix_complete = prefix_complete && ex.completed;
            reachable
        })
        .collect()
}

/// The lesson following `lesson_id` in its course, if any.
pub fn next_lesson(course: &Course, lesson_id: LessonId) -> Option<LessonId> {
    let index = course.lessons.iter().position(|l| l.id == lesson_id)?;
    course.lessons.get(index + 1).map(|l| l.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use terminalia_core::{Course, Difficulty, Exercise, Language, Lesson};

    fn exercise(lesson_id: LessonId, position: u32, completed: bool) -> Exercise {
        let mut ex = Exercise::new(
            lesson_id,
            format!("ex-{position}"),
            position,
            10,
            Difficulty::Easy,
            Language::Html,
        );
        ex.completed = completed;
        ex
    }

    fn course_with_lessons(titles: &[&str]) -> Course {
        let mut course = Course::new("Test Course");
        for (i, title) in titles.iter().enumerate() {
            course.lessons.push(Lesson::new(*title, i as u32));
        }
        course
    }

    fn snapshot(courses: Vec<Course>, exercises: Vec<Exercise>) -> Snapshot {
        Snapshot::new(courses, exercises).unwrap()
    }

    #[test]
    fn first_lesson_is_always_unlocked() {
        let course = course_with_lessons(&["L1", "L2"]);
        let first = course.lessons[0].id;
        let snap = snapshot(vec![course], vec![]);

        let status = lesson_unlock_map(&snap);
        assert_eq!(status.get(&first), Some(&true));
    }

    #[test]
    fn second_lesson_unlocks_when_all_previous_exercises_complete() {
        let course = course_with_lessons(&["L1", "L2"]);
        let (l1, l2) = (course.lessons[0].id, course.lessons[1].id);
        let snap = snapshot(
            vec![course],
            vec![exercise(l1, 0, true), exercise(l1, 1, true)],
        );

        let status = lesson_unlock_map(&snap);
        assert_eq!(status.get(&l2), Some(&true));
    }

    #[test]
    fn second_lesson_stays_locked_with_one_incomplete_exercise() {
        let course = course_with_lessons(&["L1", "L2"]);
        let (l1, l2) = (course.lessons[0].id, course.lessons[1].id);
        let snap = snapshot(
            vec![course],
            vec![exercise(l1, 0, true), exercise(l1, 1, false)],
        );

        let status = lesson_unlock_map(&snap);
        assert_eq!(status.get(&l2), Some(&false));
    }

    #[test]
    fn lesson_with_no_exercises_blocks_its_successor() {
        let course = course_with_lessons(&["L1", "L2"]);
        let l2 = course.lessons[1].id;
        let snap = snapshot(vec![course], vec![]);

        let status = lesson_unlock_map(&snap);
        assert_eq!(status.get(&l2), Some(&false));
    }

    #[test]
    fn unlock_map_is_total_over_every_course() {
        let a = course_with_lessons(&["A1", "A2", "A3"]);
        let b = course_with_lessons(&["B1"]);
        let all_ids: Vec<LessonId> = a
            .lessons
            .iter()
            .chain(b.lessons.iter())
            .map(|l| l.id)
            .collect();
        let snap = snapshot(vec![a, b], vec![]);

        let status = lesson_unlock_map(&snap);
        for id in all_ids {
            assert!(status.contains_key(&id));
        }
    }

    #[test]
    fn courses_are_evaluated_independently() {
        let a = course_with_lessons(&["A1", "A2"]);
        let b = course_with_lessons(&["B1", "B2"]);
        let a1 = a.lessons[0].id;
        let a2 = a.lessons[1].id;
        let b2 = b.lessons[1].id;

        // Completing course A's first lesson must not touch course B.
        let snap = snapshot(vec![a, b], vec![exercise(a1, 0, true)]);
        let status = lesson_unlock_map(&snap);
        assert_eq!(status.get(&a2), Some(&true));
        assert_eq!(status.get(&b2), Some(&false));
    }

    #[test]
    fn unlock_map_is_idempotent_over_an_unchanged_snapshot() {
        let course = course_with_lessons(&["L1", "L2", "L3"]);
        let l1 = course.lessons[0].id;
        let snap = snapshot(
            vec![course],
            vec![exercise(l1, 0, true), exercise(l1, 1, false)],
        );

        assert_eq!(lesson_unlock_map(&snap), lesson_unlock_map(&snap));
    }

    #[test]
    fn reachability_gates_exercises_linearly() {
        let lesson = LessonId::new();
        let exercises = vec![
            exercise(lesson, 0, true),
            exercise(lesson, 1, false),
            exercise(lesson, 2, false),
        ];
        let refs: Vec<&Exercise> = exercises.iter().collect();

        // Third stays unreachable because the second is incomplete.
        assert_eq!(exercise_reachability(&refs, true), [true, true, false]);
    }

    #[test]
    fn locked_lesson_makes_everything_unreachable() {
        let lesson = LessonId::new();
        let exercises = vec![exercise(lesson, 0, true), exercise(lesson, 1, true)];
        let refs: Vec<&Exercise> = exercises.iter().collect();

        assert_eq!(exercise_reachability(&refs, false), [false, false]);
    }

    #[test]
    fn first_exercise_is_reachable_even_when_incomplete() {
        let lesson = LessonId::new();
        let exercises = vec![exercise(lesson, 0, false), exercise(lesson, 1, false)];
        let refs: Vec<&Exercise> = exercises.iter().collect();

        assert_eq!(exercise_reachability(&refs, true), [true, false]);
    }

    #[test]
    fn reachability_of_empty_lesson_is_empty() {
        assert!(exercise_reachability(&[], true).is_empty());
        assert!(exercise_reachability(&[], false).is_empty());
    }

    #[test]
    fn next_lesson_walks_position_order() {
        let course = course_with_lessons(&["L1", "L2", "L3"]);
        let (l1, l2, l3) = (
            course.lessons[0].id,
            course.lessons[1].id,
            course.lessons[2].id,
        );

        assert_eq!(next_lesson(&course, l1), Some(l2));
        assert_eq!(next_lesson(&course, l2), Some(l3));
        assert_eq!(next_lesson(&course, l3), None);
        assert_eq!(next_lesson(&course, LessonId::new()), None);
    }
}
