//! Quiz engine
//!
//! A small finite-state machine over a fixed, ordered list of questions.
//! The engine knows nothing about rendering: the UI asks it what to show
//! (current question, per-option marks, feedback, results) and forwards
//! clicks to the transition functions.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::SiteResult;

/// Feedback shown after a correct selection
pub const FEEDBACK_CORRECT: &str = "Correct! Well done! 🎉";
/// Feedback shown after a wrong selection
pub const FEEDBACK_WRONG: &str = "Not quite right. The correct answer is highlighted in green.";

const QUESTION_BANK_JSON: &str = include_str!("data/questions.json");

/// One selectable answer of a question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// A multiple-choice question.
///
/// Exactly one option is expected to be correct. This is not checked:
/// a question with no correct option can never be scored, one with several
/// marks all of them as correct when the answer is revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }

    /// Number of options flagged as correct
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }
}

/// Parse a question bank from its JSON representation
pub fn parse_question_bank(json: &str) -> SiteResult<Vec<Question>> {
    Ok(serde_json::from_str(json)?)
}

/// The question bank bundled with the site
pub fn default_question_bank() -> SiteResult<Vec<Question>> {
    parse_question_bank(QUESTION_BANK_JSON)
}

/// Current position of the quiz state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Question `index` is shown and every option is clickable
    AwaitingAnswer { index: usize },
    /// An option was chosen for question `index`; options are locked
    AnswerShown {
        index: usize,
        selected: usize,
        correct: bool,
    },
    /// All questions answered; the summary is shown
    Results,
}

/// Visual marker for an option once the answer is revealed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Unmarked,
    Correct,
    Wrong,
}

impl OptionMark {
    pub fn class(&self) -> &'static str {
        match self {
            OptionMark::Unmarked => "",
            OptionMark::Correct => "correct",
            OptionMark::Wrong => "wrong",
        }
    }
}

/// Rejected quiz transitions. State is left untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("an answer has already been locked in for this question")]
    AnswerLocked,
    #[error("option {index} does not exist (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("no answer has been selected yet")]
    NoAnswerYet,
}

/// Feedback for the most recent selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub message: &'static str,
}

impl Feedback {
    fn for_answer(correct: bool) -> Self {
        Self {
            correct,
            message: if correct {
                FEEDBACK_CORRECT
            } else {
                FEEDBACK_WRONG
            },
        }
    }

    pub fn class(&self) -> &'static str {
        if self.correct {
            "quiz-feedback correct"
        } else {
            "quiz-feedback wrong"
        }
    }
}

/// Final tally shown once the last question is done
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
}

impl QuizSummary {
    pub fn headline(&self) -> &'static str {
        "Quiz Complete! 🎉"
    }

    pub fn detail(&self) -> String {
        format!(
            "You scored {} out of {} ({}%)",
            self.score, self.total, self.percentage
        )
    }
}

/// round(score / total × 100); 0 for an empty quiz
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// A running quiz
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Arc<Vec<Question>>,
    phase: QuizPhase,
    score: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let questions = Arc::new(questions);
        let phase = Self::first_phase(&questions);
        Self {
            questions,
            phase,
            score: 0,
        }
    }

    fn first_phase(questions: &[Question]) -> QuizPhase {
        if questions.is_empty() {
            QuizPhase::Results
        } else {
            QuizPhase::AwaitingAnswer { index: 0 }
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Index of the question being shown; equals `total()` once finished
    pub fn index(&self) -> usize {
        match self.phase {
            QuizPhase::AwaitingAnswer { index } | QuizPhase::AnswerShown { index, .. } => index,
            QuizPhase::Results => self.questions.len(),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Results)
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::AwaitingAnswer { index } | QuizPhase::AnswerShown { index, .. } => {
                self.questions.get(index)
            }
            QuizPhase::Results => None,
        }
    }

    /// Whether option controls must reject input
    pub fn options_locked(&self) -> bool {
        !matches!(self.phase, QuizPhase::AwaitingAnswer { .. })
    }

    /// Marker for option `option` of the current question
    pub fn option_mark(&self, option: usize) -> OptionMark {
        let QuizPhase::AnswerShown {
            index,
            selected,
            correct,
        } = self.phase
        else {
            return OptionMark::Unmarked;
        };

        let is_correct_option = self.questions[index]
            .options
            .get(option)
            .is_some_and(|o| o.correct);

        if is_correct_option {
            OptionMark::Correct
        } else if option == selected && !correct {
            OptionMark::Wrong
        } else {
            OptionMark::Unmarked
        }
    }

    /// Feedback for the locked-in answer, if any
    pub fn feedback(&self) -> Option<Feedback> {
        match self.phase {
            QuizPhase::AnswerShown { correct, .. } => Some(Feedback::for_answer(correct)),
            _ => None,
        }
    }

    /// Whether the next/restart control is shown
    pub fn next_visible(&self) -> bool {
        !matches!(self.phase, QuizPhase::AwaitingAnswer { .. })
    }

    /// Label of the next/restart control
    pub fn next_label(&self) -> &'static str {
        if self.is_finished() {
            "Restart Quiz"
        } else {
            "Next Question"
        }
    }

    /// Lock in `option` for the current question.
    ///
    /// Only the first selection per question is honoured.
    pub fn select_answer(&mut self, option: usize) -> Result<Feedback, QuizError> {
        let index = match self.phase {
            QuizPhase::AwaitingAnswer { index } => index,
            QuizPhase::AnswerShown { .. } | QuizPhase::Results => {
                return Err(QuizError::AnswerLocked);
            }
        };

        let options = &self.questions[index].options;
        let chosen = options.get(option).ok_or(QuizError::OptionOutOfRange {
            index: option,
            len: options.len(),
        })?;

        let correct = chosen.correct;
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::AnswerShown {
            index,
            selected: option,
            correct,
        };

        Ok(Feedback::for_answer(correct))
    }

    /// Move past the answered question
    pub fn next_question(&mut self) -> Result<QuizPhase, QuizError> {
        let QuizPhase::AnswerShown { index, .. } = self.phase else {
            return Err(QuizError::NoAnswerYet);
        };

        let next = index + 1;
        self.phase = if next < self.questions.len() {
            QuizPhase::AwaitingAnswer { index: next }
        } else {
            QuizPhase::Results
        };
        Ok(self.phase)
    }

    /// Handle a click on the shared next/restart control
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        if self.is_finished() {
            self.restart();
            Ok(self.phase)
        } else {
            self.next_question()
        }
    }

    /// Back to the first question with a zero score, from any state
    pub fn restart(&mut self) {
        self.score = 0;
        self.phase = Self::first_phase(&self.questions);
    }

    /// Final tally, available only in the results phase
    pub fn summary(&self) -> Option<QuizSummary> {
        self.is_finished().then(|| QuizSummary {
            score: self.score,
            total: self.total(),
            percentage: percentage(self.score, self.total()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> Question {
        Question::new(
            "q",
            (0..4)
                .map(|i| AnswerOption::new(format!("option {i}"), i == correct))
                .collect(),
        )
    }

    #[test]
    fn test_initial_state() {
        let session = QuizSession::new(vec![question(0), question(1)]);
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer { index: 0 });
        assert_eq!(session.score(), 0);
        assert!(!session.options_locked());
        assert!(!session.next_visible());
        assert!(session.feedback().is_none());
    }

    #[test]
    fn test_empty_bank_starts_finished() {
        let session = QuizSession::new(Vec::new());
        assert!(session.is_finished());
        assert_eq!(session.summary().unwrap().percentage, 0);
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut session = QuizSession::new(vec![question(2)]);
        let feedback = session.select_answer(2).unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.message, FEEDBACK_CORRECT);
        assert_eq!(session.score(), 1);
        assert_eq!(session.option_mark(2), OptionMark::Correct);
        assert_eq!(session.option_mark(0), OptionMark::Unmarked);
    }

    #[test]
    fn test_wrong_answer_marks_both() {
        let mut session = QuizSession::new(vec![question(1)]);
        let feedback = session.select_answer(3).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.class(), "quiz-feedback wrong");
        assert_eq!(session.score(), 0);
        assert_eq!(session.option_mark(1), OptionMark::Correct);
        assert_eq!(session.option_mark(3), OptionMark::Wrong);
        assert_eq!(session.option_mark(0), OptionMark::Unmarked);
    }

    #[test]
    fn test_second_selection_is_rejected() {
        let mut session = QuizSession::new(vec![question(0), question(0)]);
        session.select_answer(0).unwrap();
        assert!(session.options_locked());
        assert_eq!(session.select_answer(0), Err(QuizError::AnswerLocked));
        assert_eq!(session.select_answer(1), Err(QuizError::AnswerLocked));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_out_of_range_option_leaves_state() {
        let mut session = QuizSession::new(vec![question(0)]);
        assert_eq!(
            session.select_answer(7),
            Err(QuizError::OptionOutOfRange { index: 7, len: 4 })
        );
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer { index: 0 });
    }

    #[test]
    fn test_next_requires_answer() {
        let mut session = QuizSession::new(vec![question(0)]);
        assert_eq!(session.next_question(), Err(QuizError::NoAnswerYet));
    }

    #[test]
    fn test_last_next_shows_results() {
        let mut session = QuizSession::new(vec![question(0)]);
        session.select_answer(0).unwrap();
        assert_eq!(session.next_label(), "Next Question");
        assert_eq!(session.next_question(), Ok(QuizPhase::Results));
        assert_eq!(session.index(), 1);
        assert_eq!(session.next_label(), "Restart Quiz");
        assert!(session.next_visible());
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_restart_from_any_state() {
        let mut session = QuizSession::new(vec![question(0), question(0)]);
        session.select_answer(0).unwrap();
        session.restart();
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer { index: 0 });
        assert_eq!(session.score(), 0);

        session.select_answer(0).unwrap();
        session.next_question().unwrap();
        session.select_answer(0).unwrap();
        session.next_question().unwrap();
        assert!(session.is_finished());
        session.advance().unwrap();
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer { index: 0 });
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 4), 0);
        assert_eq!(percentage(4, 4), 100);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_default_bank_parses() {
        let bank = default_question_bank().unwrap();
        assert_eq!(bank.len(), 4);
        for q in &bank {
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.correct_count(), 1);
        }
        assert_eq!(bank[3].options[2].text, "1092");
    }

    #[test]
    fn test_malformed_bank_is_error() {
        assert!(parse_question_bank("[{\"prompt\": 3}]").is_err());
    }
}
