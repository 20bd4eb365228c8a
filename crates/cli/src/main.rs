//! Terminalia CLI - inspect course unlock state and progress.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use terminalia_core::{
    Course, CourseId, Difficulty, Exercise, Language, Lesson, LessonId, Snapshot,
};
use terminalia_progress::{
    course_progress, exercise_reachability, lesson_progress, lesson_unlock_map, xp_summary,
};
use terminalia_store::{JsonSnapshotStore, SnapshotStore};

#[derive(Parser)]
#[command(name = "terminalia")]
#[command(about = "Course progress and unlock inspector", long_about = None)]
struct Cli {
    /// Path to the snapshot file
    #[arg(long, default_value = "terminalia.json", global = true)]
    snapshot: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a small demo catalog to the snapshot file
    Init,
    /// List courses
    Courses,
    /// List lessons of a course with lock state and progress
    Lessons {
        /// Course ID
        course: String,
    },
    /// List exercises of a lesson with reachability
    Exercises {
        /// Lesson ID
        lesson: String,
    },
    /// Show per-course progress roll-up
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();
    let mut store = JsonSnapshotStore::new(&cli.snapshot);

    match cli.command {
        Commands::Init => {
            let snapshot = demo_snapshot()?;
            store.save_snapshot(&snapshot).await?;
            println!("Wrote demo catalog to {}", cli.snapshot.display());
        }
        Commands::Courses => {
            let snapshot = store.load_snapshot().await?;
            println!("Courses ({})", snapshot.courses.len());
            for course in &snapshot.courses {
                let xp = xp_summary(&snapshot, course.id).unwrap_or(terminalia_progress::XpSummary {
                    earned: 0,
                    available: 0,
                });
                println!(
                    "  {} | {} | {} lessons | {}/{} XP",
                    course.id,
                    course.title,
                    course.lessons.len(),
                    xp.earned,
                    xp.available,
                );
            }
        }
        Commands::Lessons { course } => {
            let snapshot = store.load_snapshot().await?;
            let course_id: CourseId = course
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid course ID"))?;
            let Some(course) = snapshot.course(course_id) else {
                println!("Course not found");
                return Ok(());
            };

            let unlocked = lesson_unlock_map(&snapshot);
            println!("{}", course.title);
            for lesson in &course.lessons {
                let progress = lesson_progress(&snapshot, lesson.id);
                println!(
                    "  {} | {} | {} | {}/{}{}",
                    lesson.id,
                    lesson.title,
                    if unlocked.get(&lesson.id).copied().unwrap_or(false) {
                        "UNLOCKED"
                    } else {
                        "LOCKED"
                    },
                    progress.completed,
                    progress.total,
                    if progress.all_done { " ✓" } else { "" },
                );
            }
        }
        Commands::Exercises { lesson } => {
            let snapshot = store.load_snapshot().await?;
            let lesson_id: LessonId = lesson
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid lesson ID"))?;
            let Some((_, lesson)) = snapshot.find_lesson(lesson_id) else {
                println!("Lesson not found");
                return Ok(());
            };

            let unlocked = lesson_unlock_map(&snapshot)
                .get(&lesson_id)
                .copied()
                .unwrap_or(false);
            let exercises = snapshot.lesson_exercises(lesson_id);
            let reachable = exercise_reachability(&exercises, unlocked);

            println!("{} ({})", lesson.title, if unlocked { "unlocked" } else { "locked" });
            for (index, (ex, reachable)) in exercises.iter().zip(reachable).enumerate() {
                println!(
                    "  Exercise {} | {} | {} | {} | +{} XP | {}",
                    index + 1,
                    ex.title,
                    ex.language,
                    ex.difficulty,
                    ex.xp_reward,
                    exercise_status(ex, unlocked, reachable),
                );
            }
        }
        Commands::Status => {
            let snapshot = store.load_snapshot().await?;
            println!("Terminalia Status");
            for course in &snapshot.courses {
                let Some(progress) = course_progress(&snapshot, course.id) else {
                    continue;
                };
                let xp = xp_summary(&snapshot, course.id).unwrap_or(terminalia_progress::XpSummary {
                    earned: 0,
                    available: 0,
                });
                println!(
                    "  {}: {:.0}% | {}/{} lessons done | {}/{} XP",
                    course.title,
                    progress.percentage,
                    progress.lessons_done,
                    progress.total_lessons,
                    xp.earned,
                    xp.available,
                );
            }
        }
    }

    Ok(())
}

fn exercise_status(exercise: &Exercise, lesson_unlocked: bool, reachable: bool) -> &'static str {
    if exercise.completed {
        "Completed"
    } else if !lesson_unlocked {
        "Lesson Locked"
    } else if !reachable {
        "Complete previous"
    } else {
        "Start"
    }
}

/// A two-course demo catalog with the first exercise already completed.
fn demo_snapshot() -> Result<Snapshot> {
    let mut html = Course::new("HTML Basics");
    html.lessons.push(Lesson::new("Tags & Elements", 0));
    html.lessons.push(Lesson::new("Attributes", 1));

    let mut css = Course::new("CSS Fundamentals");
    css.lessons.push(Lesson::new("Selectors", 0));

    let tags = html.lessons[0].id;
    let attributes = html.lessons[1].id;
    let selectors = css.lessons[0].id;

    let mut first = Exercise::new(tags, "Your first heading", 0, 10, Difficulty::Easy, Language::Html);
    first.completed = true;

    let exercises = vec![
        first,
        Exercise::new(tags, "Paragraphs and lists", 1, 20, Difficulty::Easy, Language::Html),
        Exercise::new(attributes, "Links and images", 0, 30, Difficulty::Medium, Language::Html),
        Exercise::new(selectors, "Class selectors", 0, 25, Difficulty::Easy, Language::Css),
        Exercise::new(selectors, "Combinators", 1, 50, Difficulty::Hard, Language::Css),
    ];

    Ok(Snapshot::new(vec![html, css], exercises)?)
}
