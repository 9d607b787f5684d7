//! Quiz interaction port
//!
//! The quiz use case drives a session; this port is how it talks to the
//! person taking the quiz. Implementations live in the presentation layer
//! (console) or in tests (scripted answers).

use quizmaker_domain::{AnswerOutcome, DomainError, Question};
use thiserror::Error;

/// Errors raised while talking to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for InteractionError {
    fn from(err: std::io::Error) -> Self {
        InteractionError::Io(err.to_string())
    }
}

/// What the user typed at an answer prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    /// Raw comma-separated 1-based choice numbers
    Answer(String),
    /// Stop the quiz now and report the partial score
    Quit,
}

/// Callbacks used while a quiz runs
pub trait QuizInteraction {
    /// Called once the session exists, before the first question
    fn on_quiz_start(&mut self, _subject: &str, _effective_length: usize, _requested: usize) {}

    /// Show a question and its numbered choices
    fn present_question(&mut self, number: usize, total: usize, question: &Question);

    /// Read the user's answer for the question just presented
    fn read_answer(&mut self, question: &Question) -> Result<AnswerInput, InteractionError>;

    /// Tell the user their input could not be understood
    fn report_invalid_answer(&mut self, error: &DomainError);

    /// Tell the user whether they were right
    fn report_outcome(&mut self, question: &Question, outcome: &AnswerOutcome);
}
