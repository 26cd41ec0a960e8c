use crate::error::LoadError;
use crate::logger;
use crate::models::Question;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};

pub fn get_quiz_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && let Some(ext) = path.extension()
                && ext == "json"
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

pub fn quiz_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn load_questions(path: &Path) -> Result<Vec<Question>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_questions(&content)
}

pub fn parse_questions(content: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(content)?;
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    for (i, question) in questions.iter().enumerate() {
        if !question.has_matching_option() {
            logger::log(&format!(
                "Question {} has an answer that matches none of its options: {:?}",
                i + 1,
                question.correct_answer
            ));
        }
    }

    Ok(questions)
}

/// Reads the externally supplied question count. Anything that is not a
/// plain integer counts as absent.
pub fn parse_requested_count(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
}

/// Returns the subset size to draw, or `None` when the whole set should be
/// used (count absent, below 1, or above what is available).
pub fn resolve_count(requested: Option<i64>, available: usize) -> Option<usize> {
    let requested = requested?;
    if requested < 1 {
        return None;
    }
    let requested = usize::try_from(requested).ok()?;
    (requested <= available).then_some(requested)
}

/// Builds the working set for a session. A valid count draws a uniformly
/// random subset in uniformly random order; otherwise the full set is used,
/// shuffled only when `shuffle_all` is set.
pub fn select_working_set<R: Rng + ?Sized>(
    mut questions: Vec<Question>,
    requested: Option<i64>,
    shuffle_all: bool,
    rng: &mut R,
) -> Vec<Question> {
    match resolve_count(requested, questions.len()) {
        Some(count) => {
            questions.shuffle(rng);
            questions.truncate(count);
        }
        None => {
            if shuffle_all {
                questions.shuffle(rng);
            }
        }
    }
    questions
}
