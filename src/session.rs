use crate::logger;
use crate::models::{AnswerRecord, Phase, Question};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Recorded(AnswerRecord),
    AlreadyAnswered,
    OutOfRange,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitCheck {
    Ready,
    NeedsConfirmation { answered: usize, total: usize },
}

impl SubmitCheck {
    pub fn prompt(&self) -> Option<String> {
        match self {
            SubmitCheck::Ready => None,
            SubmitCheck::NeedsConfirmation { answered, total } => Some(format!(
                "You have only answered {} of {} questions. Are you sure you want to submit?",
                answered, total
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub answered: usize,
    pub total: usize,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64 * 100.0
    }

    /// Percentage in tenths, with halves rounded up (6.25% is 63).
    fn percentage_tenths(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (2 * self.score * 1000 + self.total) / (2 * self.total)
    }

    pub fn summary_line(&self) -> String {
        let tenths = self.percentage_tenths();
        format!(
            "You scored {} out of {} ({}.{}%).",
            self.score,
            self.total,
            tenths / 10,
            tenths % 10
        )
    }
}

/// State of one quiz run: the working set, the cursor and the recorded
/// answers. The working set is fixed at construction.
#[derive(Debug, Clone)]
pub struct QuizSession {
    name: String,
    questions: Vec<Question>,
    current_index: usize,
    answers: BTreeMap<usize, AnswerRecord>,
    phase: Phase,
}

impl QuizSession {
    /// `questions` must not be empty; the loader rejects empty sets.
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        debug_assert!(!questions.is_empty());
        Self {
            name: name.into(),
            questions,
            current_index: 0,
            answers: BTreeMap::new(),
            phase: Phase::Presenting,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn can_advance(&self) -> bool {
        !self.is_submitted() && !self.is_last_question()
    }

    pub fn can_retreat(&self) -> bool {
        !self.is_submitted() && self.current_index > 0
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current_index += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Records `option` for question `index` unless it already has an answer.
    pub fn select(&mut self, index: usize, option: &str) -> SelectOutcome {
        if self.is_submitted() {
            return SelectOutcome::Submitted;
        }
        let Some(question) = self.questions.get(index) else {
            return SelectOutcome::OutOfRange;
        };
        if self.answers.contains_key(&index) {
            return SelectOutcome::AlreadyAnswered;
        }

        let record = AnswerRecord {
            selected: option.to_string(),
            is_correct: question.is_correct(option),
        };
        logger::log(&format!(
            "Question {} answered ({})",
            index + 1,
            if record.is_correct { "correct" } else { "incorrect" }
        ));
        self.answers.insert(index, record.clone());
        SelectOutcome::Recorded(record)
    }

    /// Selects the option at `option_index` of the current question.
    pub fn select_current(&mut self, option_index: usize) -> SelectOutcome {
        let index = self.current_index;
        match self.questions[index].options.get(option_index).cloned() {
            Some(option) => self.select(index, &option),
            None => SelectOutcome::OutOfRange,
        }
    }

    pub fn answer(&self, index: usize) -> Option<&AnswerRecord> {
        self.answers.get(&index)
    }

    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.answer(self.current_index)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn unanswered_count(&self) -> usize {
        self.questions.len() - self.answers.len()
    }

    pub fn score(&self) -> usize {
        self.answers.values().filter(|a| a.is_correct).count()
    }

    pub fn submit_check(&self) -> SubmitCheck {
        if self.unanswered_count() == 0 {
            SubmitCheck::Ready
        } else {
            SubmitCheck::NeedsConfirmation {
                answered: self.answered_count(),
                total: self.len(),
            }
        }
    }

    pub fn result(&self) -> QuizResult {
        QuizResult {
            score: self.score(),
            answered: self.answered_count(),
            total: self.len(),
        }
    }

    /// Ends the run. Confirmation for unanswered questions is the caller's
    /// job; see [`QuizSession::submit_check`].
    pub fn submit(&mut self) -> QuizResult {
        if !self.is_submitted() {
            self.phase = Phase::Submitted;
            let result = self.result();
            logger::log(&format!(
                "Quiz '{}' submitted: {}/{} correct, {} answered",
                self.name, result.score, result.total, result.answered
            ));
        }
        self.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, options: &[&str], answer: &str) -> Question {
        Question {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: answer.to_string(),
        }
    }

    fn three_questions() -> QuizSession {
        QuizSession::new(
            "Test",
            vec![
                question("2+2?", &["3", "4", "5"], "4"),
                question("Sky?", &["Blue", "Red"], "Blue"),
                question("Grass?", &["Green", "Pink"], "Green"),
            ],
        )
    }

    #[test]
    fn test_single_question_example() {
        let mut session = QuizSession::new("Math", vec![question("2+2?", &["3", "4", "5"], "4")]);

        let outcome = session.select(0, "4");
        assert_eq!(
            outcome,
            SelectOutcome::Recorded(AnswerRecord {
                selected: "4".to_string(),
                is_correct: true,
            })
        );
        assert_eq!(session.submit_check(), SubmitCheck::Ready);

        let result = session.submit();
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 1);
        assert_eq!(result.summary_line(), "You scored 1 out of 1 (100.0%).");
    }

    #[test]
    fn test_first_answer_wins() {
        let mut session = three_questions();
        assert!(matches!(session.select(0, "3"), SelectOutcome::Recorded(_)));
        assert_eq!(session.select(0, "4"), SelectOutcome::AlreadyAnswered);

        let record = session.answer(0).unwrap();
        assert_eq!(record.selected, "3");
        assert!(!record.is_correct);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut session = three_questions();
        assert_eq!(session.select(3, "x"), SelectOutcome::OutOfRange);
        assert_eq!(session.select_current(9), SelectOutcome::OutOfRange);
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_select_current_uses_cursor() {
        let mut session = three_questions();
        session.advance();
        let outcome = session.select_current(0);
        assert!(matches!(outcome, SelectOutcome::Recorded(ref r) if r.is_correct));
        assert!(session.answer(1).is_some());
        assert!(session.answer(0).is_none());
    }

    #[test]
    fn test_unmatched_answer_is_never_correct() {
        let mut session = QuizSession::new("Broken", vec![question("Q", &["a", "b"], "c")]);
        session.select(0, "a");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_score_all_correct_and_none() {
        let mut session = three_questions();
        assert_eq!(session.score(), 0);
        session.select(0, "4");
        session.select(1, "Blue");
        session.select(2, "Green");
        assert_eq!(session.score(), session.len());
        assert_eq!(session.submit().percentage(), 100.0);

        let mut session = three_questions();
        let result = session.submit();
        assert_eq!(result.score, 0);
        assert_eq!(result.answered, 0);
        assert_eq!(result.summary_line(), "You scored 0 out of 3 (0.0%).");
    }

    #[test]
    fn test_navigation_bounds() {
        let mut session = three_questions();
        assert!(!session.can_retreat());
        assert!(!session.retreat());
        assert_eq!(session.current_index(), 0);

        assert!(session.advance());
        assert!(session.advance());
        assert!(session.is_last_question());
        assert!(!session.can_advance());
        assert!(!session.advance());
        assert_eq!(session.current_index(), 2);

        assert!(session.retreat());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_single_question_is_last() {
        let session = QuizSession::new("One", vec![question("Q", &["a"], "a")]);
        assert!(session.is_last_question());
        assert!(!session.can_advance());
        assert!(!session.can_retreat());
    }

    #[test]
    fn test_submit_with_gaps_needs_confirmation() {
        let mut session = QuizSession::new(
            "Two",
            vec![question("Q1", &["a", "b"], "a"), question("Q2", &["a", "b"], "b")],
        );
        session.select(0, "a");

        let check = session.submit_check();
        assert_eq!(
            check,
            SubmitCheck::NeedsConfirmation {
                answered: 1,
                total: 2
            }
        );
        assert!(check.prompt().unwrap().contains("answered 1 of 2"));
    }

    #[test]
    fn test_submitted_session_rejects_changes() {
        let mut session = three_questions();
        session.select(0, "4");
        session.submit();

        assert!(session.is_submitted());
        assert_eq!(session.select(1, "Blue"), SelectOutcome::Submitted);
        assert!(!session.advance());
        assert!(!session.retreat());
        assert_eq!(session.submit().score, 1);
    }

    #[test]
    fn test_percentage_rounding() {
        let result = QuizResult {
            score: 1,
            answered: 3,
            total: 3,
        };
        assert_eq!(result.summary_line(), "You scored 1 out of 3 (33.3%).");

        let two_thirds = QuizResult {
            score: 2,
            answered: 3,
            total: 3,
        };
        assert_eq!(two_thirds.summary_line(), "You scored 2 out of 3 (66.7%).");
    }

    #[test]
    fn test_percentage_halves_round_up() {
        let line = |score, total| {
            QuizResult {
                score,
                answered: score,
                total,
            }
            .summary_line()
        };
        assert_eq!(line(1, 16), "You scored 1 out of 16 (6.3%).");
        assert_eq!(line(5, 16), "You scored 5 out of 16 (31.3%).");
        assert_eq!(line(9, 16), "You scored 9 out of 16 (56.3%).");
        assert_eq!(line(1, 80), "You scored 1 out of 80 (1.3%).");
        assert_eq!(line(16, 16), "You scored 16 out of 16 (100.0%).");
    }
}
