use crate::config::AppConfig;
use crate::error::LoadError;
use crate::loader::{get_quiz_files, parse_requested_count};
use crate::loader_worker::{LoadOutcome, LoadRequest, spawn_loader};
use crate::logger;
use crate::models::{AppState, Question};
use crate::session::{QuizSession, SubmitCheck};
use crossbeam_channel::{Receiver, TryRecvError};
use std::path::PathBuf;

pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading quiz data. Please check the quiz file and try again.";

const MAX_COUNT_DIGITS: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub files: Vec<PathBuf>,
    pub selected: usize,
    /// Requested question count as typed; blank means the whole set.
    pub count_input: String,
}

impl MenuState {
    pub fn select_next(&mut self) {
        if self.selected < self.files.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn push_count_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.count_input.len() < MAX_COUNT_DIGITS {
            self.count_input.push(c);
        }
    }

    pub fn pop_count_digit(&mut self) {
        self.count_input.pop();
    }

    pub fn selected_file(&self) -> Option<&PathBuf> {
        self.files.get(self.selected)
    }
}

/// A running quiz plus the option the keyboard highlight is on.
#[derive(Debug, Clone)]
pub struct QuizScreen {
    pub session: QuizSession,
    pub highlighted: usize,
}

impl QuizScreen {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            highlighted: 0,
        }
    }

    pub fn highlight_next(&mut self) {
        let count = self.session.current_question().options.len();
        if self.highlighted + 1 < count {
            self.highlighted += 1;
        }
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }
}

#[derive(Debug)]
pub struct App {
    pub config: AppConfig,
    pub state: AppState,
    pub menu: MenuState,
    pub quiz: Option<QuizScreen>,
    pub load_error: Option<String>,
    pub should_quit: bool,
    pending_load: Option<Receiver<LoadOutcome>>,
    last_request: Option<LoadRequest>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let menu = MenuState {
            files: get_quiz_files(&config.quiz_dir),
            selected: 0,
            count_input: config
                .requested_count
                .as_deref()
                .map(|c| c.trim().to_string())
                .unwrap_or_default(),
        };
        Self {
            config,
            state: AppState::Menu,
            menu,
            quiz: None,
            load_error: None,
            should_quit: false,
            pending_load: None,
            last_request: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    pub fn start_selected(&mut self) {
        let Some(path) = self.menu.selected_file().cloned() else {
            return;
        };
        let request = LoadRequest {
            path,
            requested_count: parse_requested_count(Some(self.menu.count_input.as_str())),
            shuffle_all: self.config.shuffle_all,
        };
        self.start_load(request);
    }

    pub fn start_load(&mut self, request: LoadRequest) {
        self.quiz = None;
        self.load_error = None;
        self.last_request = Some(request.clone());

        match spawn_loader(request.clone()) {
            Ok(rx) => {
                self.pending_load = Some(rx);
                self.state = AppState::Loading;
            }
            Err(source) => {
                logger::log(&format!("Failed to start loader thread: {}", source));
                self.finish_load(Err(LoadError::Io {
                    path: request.path,
                    source,
                }));
            }
        }
    }

    /// Checks the loader channel without blocking. Returns true once the
    /// pending load has resolved.
    pub fn poll_load(&mut self) -> bool {
        let Some(rx) = &self.pending_load else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(LoadError::Disconnected),
        };
        self.pending_load = None;
        self.finish_load(outcome);
        true
    }

    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        self.pending_load = None;
        match outcome {
            Ok(loaded) => self.start_session(loaded.name, loaded.questions),
            Err(e) => {
                logger::log(&format!("Could not load quiz data: {}", e));
                self.load_error = Some(e.to_string());
                self.state = AppState::LoadFailed;
            }
        }
    }

    pub fn start_session(&mut self, name: String, questions: Vec<Question>) {
        if questions.is_empty() {
            self.finish_load(Err(LoadError::Empty));
            return;
        }
        self.quiz = Some(QuizScreen::new(QuizSession::new(name, questions)));
        self.state = AppState::Quiz;
    }

    /// Draws a fresh working set from the last loaded file.
    pub fn restart(&mut self) {
        if let Some(request) = self.last_request.clone() {
            self.start_load(request);
        }
    }

    pub fn return_to_menu(&mut self) {
        self.quiz = None;
        self.pending_load = None;
        self.load_error = None;
        self.menu.files = get_quiz_files(&self.config.quiz_dir);
        if self.menu.selected >= self.menu.files.len() {
            self.menu.selected = self.menu.files.len().saturating_sub(1);
        }
        self.state = AppState::Menu;
    }

    /// Submits right away when every question is answered, otherwise asks
    /// for confirmation first.
    pub fn request_submit(&mut self) {
        let Some(quiz) = &mut self.quiz else {
            return;
        };
        match quiz.session.submit_check() {
            SubmitCheck::Ready => {
                quiz.session.submit();
                self.state = AppState::Summary;
            }
            SubmitCheck::NeedsConfirmation { .. } => {
                self.state = AppState::SubmitConfirm;
            }
        }
    }

    pub fn confirm_submit(&mut self) {
        if let Some(quiz) = &mut self.quiz {
            quiz.session.submit();
            self.state = AppState::Summary;
        }
    }

    pub fn submit_prompt(&self) -> Option<String> {
        self.quiz
            .as_ref()
            .and_then(|quiz| quiz.session.submit_check().prompt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, Instant};

    fn question(prompt: &str) -> Question {
        Question {
            prompt: prompt.to_string(),
            options: vec!["yes".to_string(), "no".to_string()],
            correct_answer: "yes".to_string(),
        }
    }

    fn app_in(dir: &std::path::Path) -> App {
        App::new(AppConfig {
            quiz_dir: dir.to_path_buf(),
            ..AppConfig::default()
        })
    }

    fn wait_for_load(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.poll_load() {
            assert!(Instant::now() < deadline, "loader did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_menu_prefills_count_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(AppConfig {
            quiz_dir: dir.path().to_path_buf(),
            requested_count: Some(" 5 ".to_string()),
            ..AppConfig::default()
        });
        assert_eq!(app.menu.count_input, "5");
        assert_eq!(app.state, AppState::Menu);
    }

    #[test]
    fn test_count_input_accepts_digits_only() {
        let mut menu = MenuState::default();
        for c in ['1', 'a', '2', '-', '3'] {
            menu.push_count_digit(c);
        }
        assert_eq!(menu.count_input, "123");
        menu.pop_count_digit();
        assert_eq!(menu.count_input, "12");
    }

    #[test]
    fn test_load_moves_to_quiz() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("colours.json"),
            r#"[{"question": "Sky?", "options": ["Blue", "Red"], "answer": "Blue"},
                {"question": "Grass?", "options": ["Green", "Pink"], "answer": "Green"}]"#,
        )
        .unwrap();

        let mut app = app_in(dir.path());
        app.menu.count_input = "1".to_string();
        app.start_selected();
        assert_eq!(app.state, AppState::Loading);

        wait_for_load(&mut app);
        assert_eq!(app.state, AppState::Quiz);
        let quiz = app.quiz.as_ref().unwrap();
        assert_eq!(quiz.session.len(), 1);
        assert_eq!(quiz.session.name(), "colours");
    }

    #[test]
    fn test_retake_reloads_same_file_and_count() {
        use crate::input::handle_key;
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("trio.json"),
            r#"[{"question": "Q1", "options": ["a", "b"], "answer": "a"},
                {"question": "Q2", "options": ["a", "b"], "answer": "b"},
                {"question": "Q3", "options": ["a", "b"], "answer": "a"}]"#,
        )
        .unwrap();

        let mut app = app_in(dir.path());
        app.menu.count_input = "2".to_string();
        app.start_selected();
        wait_for_load(&mut app);
        app.quiz.as_mut().unwrap().session.select_current(0);
        app.confirm_submit();
        assert_eq!(app.state, AppState::Summary);

        // the retake reuses the original request, not the menu's current input
        app.menu.count_input.clear();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty()));
        assert_eq!(app.state, AppState::Loading);
        wait_for_load(&mut app);

        assert_eq!(app.state, AppState::Quiz);
        let session = &app.quiz.as_ref().unwrap().session;
        assert_eq!(session.name(), "trio");
        assert_eq!(session.len(), 2);
        assert_eq!(session.answered_count(), 0);
        assert!(!session.is_submitted());
    }

    #[test]
    fn test_load_failure_shows_error_state() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "not json").unwrap();

        let mut app = app_in(dir.path());
        app.start_selected();
        wait_for_load(&mut app);

        assert_eq!(app.state, AppState::LoadFailed);
        assert!(app.quiz.is_none());
        assert!(app.load_error.as_ref().unwrap().contains("malformed"));
    }

    #[test]
    fn test_start_selected_without_files_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.start_selected();
        assert_eq!(app.state, AppState::Menu);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_request_submit_complete_goes_to_summary() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.start_session("t".to_string(), vec![question("Q1")]);
        app.quiz.as_mut().unwrap().session.select(0, "yes");

        app.request_submit();
        assert_eq!(app.state, AppState::Summary);
        assert!(app.quiz.as_ref().unwrap().session.is_submitted());
    }

    #[test]
    fn test_request_submit_with_gaps_asks_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.start_session("t".to_string(), vec![question("Q1"), question("Q2")]);
        app.quiz.as_mut().unwrap().session.select(0, "yes");

        app.request_submit();
        assert_eq!(app.state, AppState::SubmitConfirm);
        assert!(app.submit_prompt().unwrap().contains("answered 1 of 2"));
        assert!(!app.quiz.as_ref().unwrap().session.is_submitted());

        app.confirm_submit();
        assert_eq!(app.state, AppState::Summary);
        assert_eq!(app.quiz.as_ref().unwrap().session.result().score, 1);
    }

    #[test]
    fn test_empty_session_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.start_session("t".to_string(), Vec::new());
        assert_eq!(app.state, AppState::LoadFailed);
    }
}
