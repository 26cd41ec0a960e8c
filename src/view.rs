//! Pure projections of [`QuizSession`] into what the screens display.
//! Nothing here touches the terminal.

use crate::session::{QuizResult, QuizSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Unanswered question, option can be picked.
    Available,
    /// Answered question, option is neither picked nor correct.
    Disabled,
    /// The user's pick, and it was wrong.
    Incorrect,
    /// The correct option, not picked by the user.
    Correct,
    /// The user's pick, and it was right.
    CorrectSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryControl {
    Next,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { correct_answer: String },
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Correct => "Correct!".to_string(),
            Feedback::Incorrect { correct_answer } => {
                format!("Incorrect. The correct answer was: {}.", correct_answer)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub state: OptionState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub header: String,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub locked: bool,
    pub feedback: Option<Feedback>,
    pub score_status: String,
    pub can_retreat: bool,
    pub primary: PrimaryControl,
}

impl QuestionView {
    pub fn from_session(session: &QuizSession) -> Self {
        let index = session.current_index();
        let question = session.current_question();
        let answer = session.current_answer();

        let options = question
            .options
            .iter()
            .map(|option| {
                let state = match answer {
                    None => OptionState::Available,
                    Some(record) => {
                        let picked = *option == record.selected;
                        let correct = question.is_correct(option);
                        match (picked, correct) {
                            (true, true) => OptionState::CorrectSelected,
                            (true, false) => OptionState::Incorrect,
                            (false, true) => OptionState::Correct,
                            (false, false) => OptionState::Disabled,
                        }
                    }
                };
                OptionView {
                    label: option.clone(),
                    state,
                }
            })
            .collect();

        let feedback = answer.map(|record| {
            if record.is_correct {
                Feedback::Correct
            } else {
                Feedback::Incorrect {
                    correct_answer: question.correct_answer.clone(),
                }
            }
        });

        QuestionView {
            header: format!("Question {} of {}", index + 1, session.len()),
            prompt: format!("{}. {}", index + 1, question.prompt),
            options,
            locked: answer.is_some(),
            feedback,
            score_status: score_status(session),
            can_retreat: session.can_retreat(),
            primary: if session.is_last_question() {
                PrimaryControl::Submit
            } else {
                PrimaryControl::Next
            },
        }
    }
}

pub fn score_status(session: &QuizSession) -> String {
    format!(
        "Current Score: {} / {} | Answered: {} / {}",
        session.score(),
        session.len(),
        session.answered_count(),
        session.len()
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLine {
    pub number: usize,
    pub prompt: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub title: String,
    pub summary: String,
    pub result: QuizResult,
    pub review: Vec<ReviewLine>,
}

impl ResultView {
    pub fn from_session(session: &QuizSession) -> Self {
        let result = session.result();
        let review = session
            .questions()
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let answer = session.answer(i);
                ReviewLine {
                    number: i + 1,
                    prompt: question.prompt.clone(),
                    selected: answer.map(|a| a.selected.clone()),
                    correct_answer: question.correct_answer.clone(),
                    is_correct: answer.is_some_and(|a| a.is_correct),
                }
            })
            .collect();

        ResultView {
            title: format!("Results - {}", session.name()),
            summary: result.summary_line(),
            result,
            review,
        }
    }
}
