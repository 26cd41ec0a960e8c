use serde::Deserialize;

/// One quiz item as stored in the JSON question files.
///
/// `correct_answer` is expected to equal one of `options`; nothing enforces
/// it, and a record where it doesn't can never be answered correctly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question", alias = "prompt")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answer", alias = "correctAnswer")]
    pub correct_answer: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }

    pub fn has_matching_option(&self) -> bool {
        self.options.iter().any(|o| o == &self.correct_answer)
    }
}

/// The user's first and only response to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub selected: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Presenting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Loading,
    LoadFailed,
    Quiz,
    SubmitConfirm,
    QuitConfirm,
    Summary,
}
