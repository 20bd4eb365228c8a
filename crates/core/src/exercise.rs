//! Exercise model - gradable coding tasks within a lesson.

use serde::{Deserialize, Serialize};

use crate::id::{ExerciseId, LessonId};

/// A gradable coding task belonging to exactly one lesson.
///
/// The `completed` flag is set externally once a grading pass succeeds;
/// this crate never resets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: ExerciseId,

    /// Owning lesson
    pub lesson_id: LessonId,

    /// Exercise title
    pub title: String,

    /// Position within the owning lesson (0 = first)
    pub position: u32,

    /// Whether the current learner has completed this exercise
    pub completed: bool,

    /// XP awarded on completion
    pub xp_reward: u32,

    /// Difficulty label
    pub difficulty: Difficulty,

    /// Language the exercise is graded in
    pub language: Language,
}

impl Exercise {
    /// Create an incomplete exercise.
    pub fn new(
        lesson_id: LessonId,
        title: impl Into<String>,
        position: u32,
        xp_reward: u32,
        difficulty: Difficulty,
        language: Language,
    ) -> Self {
        Self {
            id: ExerciseId::new(),
            lesson_id,
            title: title.into(),
            position,
            completed: false,
            xp_reward,
            difficulty,
            language,
        }
    }
}

/// Exercise difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Introductory exercise
    Easy,
    /// Intermediate exercise
    Medium,
    /// Advanced exercise
    Hard,
}

impl Difficulty {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language an exercise is authored and graded in.
///
/// A closed set: editor and grading behavior for each variant live in
/// the surrounding platform, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Markup exercises
    Html,
    /// Stylesheet exercises
    Css,
    /// Script exercises
    Javascript,
}

impl Language {
    /// File extension used for the editor buffer of this language.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "js",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "javascript",
        };
        f.write_str(s)
    }
}
