//! Application layer for quizmaker
//!
//! This crate contains use cases, port definitions, the question repository
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod repository;
pub mod use_cases;

// Re-export commonly used types
pub use config::{InvalidAnswerPolicy, QuestionCountOutOfRange, QuizPolicy};
pub use ports::{
    question_authoring::QuestionAuthoring,
    question_store::{InMemoryQuestionStore, QuestionStore, StoreError},
    quiz_interaction::{AnswerInput, InteractionError, QuizInteraction},
};
pub use repository::QuestionRepository;
pub use use_cases::add_questions::{AddQuestionsError, AddQuestionsOutput, AddQuestionsUseCase};
pub use use_cases::run_quiz::{RunQuizError, RunQuizInput, RunQuizUseCase};
