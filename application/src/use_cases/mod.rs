//! Use cases (application services)
//!
//! - [`run_quiz::RunQuizUseCase`]: take a quiz on one subject
//! - [`add_questions::AddQuestionsUseCase`]: author a batch of questions

pub mod add_questions;
pub mod run_quiz;
