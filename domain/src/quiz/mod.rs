//! Quiz session domain.
//!
//! - [`session::QuizSession`]: one run through a subject's questions
//! - [`sampler`]: non-repeating random draw order
//! - [`result::QuizResult`] / [`result::AnswerOutcome`]: scoring results
//! - [`error::QuizError`]: session errors

pub mod error;
pub mod result;
pub mod sampler;
pub mod session;
