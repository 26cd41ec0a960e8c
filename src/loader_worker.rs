use crate::error::LoadError;
use crate::loader::{load_questions, quiz_name, select_working_set};
use crate::logger;
use crate::models::Question;
use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub path: PathBuf,
    pub requested_count: Option<i64>,
    pub shuffle_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedQuiz {
    pub name: String,
    pub questions: Vec<Question>,
    /// Size of the file's full question set, before any truncation.
    pub available: usize,
}

pub type LoadOutcome = Result<LoadedQuiz, LoadError>;

/// Loads the file and draws the working set. Runs on the loader thread.
pub fn run_load(request: &LoadRequest) -> LoadOutcome {
    logger::log(&format!("Loading quiz data from {}", request.path.display()));

    let questions = load_questions(&request.path)?;
    let available = questions.len();
    let questions = select_working_set(
        questions,
        request.requested_count,
        request.shuffle_all,
        &mut rand::thread_rng(),
    );

    logger::log(&format!(
        "Loaded {} of {} questions (requested {:?})",
        questions.len(),
        available,
        request.requested_count
    ));

    Ok(LoadedQuiz {
        name: quiz_name(&request.path),
        questions,
        available,
    })
}

/// Starts a one-shot loader thread. Exactly one outcome is sent on the
/// returned channel.
pub fn spawn_loader(request: LoadRequest) -> std::io::Result<Receiver<LoadOutcome>> {
    let (tx, rx): (Sender<LoadOutcome>, Receiver<LoadOutcome>) = bounded(1);

    thread::Builder::new()
        .name("multichoice-quiz::loader".to_string())
        .spawn(move || {
            let outcome = run_load(&request);
            if tx.send(outcome).is_err() {
                logger::log("Loader result dropped, receiver gone");
            }
        })?;

    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    const DATA: &str = r#"[
        {"question": "2+2?", "options": ["3", "4", "5"], "answer": "4"},
        {"question": "3+3?", "options": ["6", "7"], "answer": "6"},
        {"question": "1+1?", "options": ["1", "2"], "answer": "2"}
    ]"#;

    #[test]
    fn test_run_load_truncates_to_requested_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arith.json");
        fs::write(&path, DATA).unwrap();

        let loaded = run_load(&LoadRequest {
            path,
            requested_count: Some(2),
            shuffle_all: true,
        })
        .unwrap();

        assert_eq!(loaded.name, "arith");
        assert_eq!(loaded.questions.len(), 2);
        assert_eq!(loaded.available, 3);
    }

    #[test]
    fn test_spawn_loader_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arith.json");
        fs::write(&path, DATA).unwrap();

        let rx = spawn_loader(LoadRequest {
            path,
            requested_count: None,
            shuffle_all: false,
        })
        .unwrap();

        let loaded = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
        assert_eq!(loaded.questions.len(), 3);
        assert_eq!(loaded.questions[0].prompt, "2+2?");
    }

    #[test]
    fn test_spawn_loader_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let rx = spawn_loader(LoadRequest {
            path: dir.path().join("absent.json"),
            requested_count: Some(1),
            shuffle_all: true,
        })
        .unwrap();

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(outcome, Err(LoadError::Io { .. })));
    }
}
