//! Application-level configuration.
//!
//! - [`QuizPolicy`]: caller-side limits and retry behaviour for quizzes

pub mod quiz_policy;

pub use quiz_policy::{InvalidAnswerPolicy, QuestionCountOutOfRange, QuizPolicy};
