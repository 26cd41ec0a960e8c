pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod loader_worker;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view;

// Re-exports for convenience
pub use app::{App, MenuState, QuizScreen};
pub use config::AppConfig;
pub use error::LoadError;
pub use input::handle_key;
pub use loader::{get_quiz_files, load_questions, parse_requested_count, select_working_set};
pub use loader_worker::{LoadOutcome, LoadRequest, LoadedQuiz, spawn_loader};
pub use models::{AnswerRecord, AppState, Phase, Question};
pub use session::{QuizResult, QuizSession, SelectOutcome, SubmitCheck};
pub use ui::draw;
pub use view::{OptionState, QuestionView, ResultView};
