//! Quiz policy: limits the UI applies before a session starts.
//!
//! The session engine accepts any positive question count. The allowed
//! range for a requested count is a policy of the caller, kept here so it
//! can be configured and tested on its own.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const DEFAULT_MIN_QUESTIONS: usize = 10;
pub const DEFAULT_MAX_QUESTIONS: usize = 20;

/// What to do when an answer cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidAnswerPolicy {
    /// Ask again for the same question
    #[default]
    Reprompt,
    /// Count the question as answered incorrectly and move on
    ScoreIncorrect,
}

/// A requested question count fell outside the configured range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Number of questions must be between {min} and {max}, got {requested}")]
pub struct QuestionCountOutOfRange {
    pub requested: usize,
    pub min: usize,
    pub max: usize,
}

/// Quiz limits and answer retry behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizPolicy {
    /// Smallest question count a user may request
    pub min_questions: usize,
    /// Largest question count a user may request
    pub max_questions: usize,
    /// Handling of unparseable answers
    pub invalid_answer: InvalidAnswerPolicy,
}

impl Default for QuizPolicy {
    fn default() -> Self {
        Self {
            min_questions: DEFAULT_MIN_QUESTIONS,
            max_questions: DEFAULT_MAX_QUESTIONS,
            invalid_answer: InvalidAnswerPolicy::default(),
        }
    }
}

impl QuizPolicy {
    // ==================== Builder Methods ====================

    pub fn with_count_range(mut self, min: usize, max: usize) -> Self {
        self.min_questions = min;
        self.max_questions = max;
        self
    }

    pub fn with_invalid_answer(mut self, policy: InvalidAnswerPolicy) -> Self {
        self.invalid_answer = policy;
        self
    }

    // ==================== Queries ====================

    pub fn count_range(&self) -> RangeInclusive<usize> {
        self.min_questions..=self.max_questions
    }

    /// Accept `requested` if it lies within the configured range
    pub fn check_count(&self, requested: usize) -> Result<usize, QuestionCountOutOfRange> {
        if self.count_range().contains(&requested) {
            Ok(requested)
        } else {
            Err(QuestionCountOutOfRange {
                requested,
                min: self.min_questions,
                max: self.max_questions,
            })
        }
    }
}
