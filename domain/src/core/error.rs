//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while constructing questions or reading answers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question text cannot be empty")]
    EmptyText,

    #[error("Subject cannot be empty")]
    EmptySubject,

    #[error("A question needs at least one choice")]
    NoChoices,

    #[error("Choice {0} cannot be empty")]
    EmptyChoice(usize),

    #[error("At least one correct answer must be provided")]
    NoCorrectAnswers,

    #[error("Answer index {index} is out of range (question has {choices} choices)")]
    AnswerOutOfRange { index: usize, choices: usize },

    #[error("Invalid answer format: {0}")]
    InvalidAnswerFormat(String),
}

impl DomainError {
    /// Check if this error came from parsing user-supplied answer indexes
    pub fn is_answer_format(&self) -> bool {
        matches!(self, DomainError::InvalidAnswerFormat(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = DomainError::AnswerOutOfRange {
            index: 4,
            choices: 3,
        };
        assert_eq!(
            error.to_string(),
            "Answer index 4 is out of range (question has 3 choices)"
        );
    }

    #[test]
    fn test_is_answer_format() {
        assert!(DomainError::InvalidAnswerFormat("x".to_string()).is_answer_format());
        assert!(
            !DomainError::AnswerOutOfRange {
                index: 9,
                choices: 2
            }
            .is_answer_format()
        );
        assert!(!DomainError::EmptyText.is_answer_format());
        assert!(!DomainError::NoCorrectAnswers.is_answer_format());
    }
}
