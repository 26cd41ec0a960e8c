use std::path::PathBuf;

pub const DEFAULT_QUIZ_DIR: &str = "quizzes";
pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub quiz_dir: PathBuf,
    pub log_file: PathBuf,
    /// Raw requested question count, pre-filled into the menu.
    pub requested_count: Option<String>,
    /// Shuffle the question order even when the whole set is used.
    pub shuffle_all: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quiz_dir: PathBuf::from(DEFAULT_QUIZ_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            requested_count: None,
            shuffle_all: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            quiz_dir: lookup("QUIZ_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.quiz_dir),
            log_file: lookup("QUIZ_LOG_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            requested_count: lookup("QUIZ_COUNT").filter(|v| !v.trim().is_empty()),
            shuffle_all: lookup("QUIZ_SHUFFLE_ALL")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.shuffle_all),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
