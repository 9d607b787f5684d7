//! Domain layer for quizmaker
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A multiple-choice [`Question`] carries its prompt, ordered choices, the
//! set of correct choice indexes and a subject label. Subjects match
//! case-insensitively.
//!
//! ## Quiz Session
//!
//! A [`QuizSession`] draws a non-repeating random subset of a subject's
//! questions, presents them one by one, and scores each answer by exact
//! set equality with the correct answers (no partial credit).

pub mod answer;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use answer::selection::{ANSWER_SEPARATOR, AnswerSelection};
pub use core::{error::DomainError, question::Question};
pub use quiz::{
    error::QuizError,
    result::{AnswerOutcome, QuizResult},
    sampler::draw_order,
    session::{QuizSession, SessionState},
};
