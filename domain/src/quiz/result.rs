//! Quiz scoring results

use std::collections::BTreeSet;

/// Outcome of answering one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// 1-based position of the question within the session
    pub number: usize,
    pub correct: bool,
    /// 0-based indexes of the correct choices
    pub correct_answers: BTreeSet<usize>,
}

/// Final (or partial) result of a quiz session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub subject: String,
    pub score: usize,
    /// Effective length: `min(requested count, pool size)`
    pub total: usize,
    pub answered: usize,
    /// True when the session ended before every question was answered
    pub abandoned: bool,
}

impl QuizResult {
    /// Number the score is reported against.
    ///
    /// An abandoned session is scored against the questions actually
    /// answered.
    pub fn out_of(&self) -> usize {
        if self.abandoned {
            self.answered
        } else {
            self.total
        }
    }
}

impl std::fmt::Display for QuizResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} out of {}", self.score, self.out_of())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_complete() {
        let result = QuizResult {
            subject: "math".to_string(),
            score: 7,
            total: 10,
            answered: 10,
            abandoned: false,
        };
        assert_eq!(result.to_string(), "7 out of 10");
    }

    #[test]
    fn test_abandoned_scored_against_answered() {
        let result = QuizResult {
            subject: "math".to_string(),
            score: 2,
            total: 10,
            answered: 3,
            abandoned: true,
        };
        assert_eq!(result.out_of(), 3);
        assert_eq!(result.to_string(), "2 out of 3");
    }
}
