//! Question repository aggregate.
//!
//! [`QuestionRepository`] owns the in-memory question bank and writes it
//! through to a [`QuestionStore`](crate::ports::question_store::QuestionStore)
//! on every change.

mod question_repository;

pub use question_repository::QuestionRepository;
