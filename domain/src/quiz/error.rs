//! Quiz session errors

use thiserror::Error;

/// Errors raised by a [`QuizSession`](super::session::QuizSession)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("No questions available for the subject: {0}")]
    NoQuestionsForSubject(String),

    #[error("Question count must be positive, got {0}")]
    InvalidQuestionCount(usize),

    #[error("No question is waiting for an answer")]
    NoPendingQuestion,
}
