//! Durable question store port
//!
//! Defines where the question bank lives between runs. The store is always
//! read and written as a whole collection.

use quizmaker_domain::Question;
use std::cell::{Cell, RefCell};
use thiserror::Error;

/// Errors that can occur while reading or writing the question store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Stored content could not be read back as a question collection
    #[error("Question store {location} is corrupt: {reason}")]
    Corrupt { location: String, reason: String },

    /// The collection could not be written
    #[error("Could not save questions to {location}: {reason}")]
    Persistence { location: String, reason: String },
}

impl StoreError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}

/// Durable storage for the full question collection.
///
/// Implementations live in the infrastructure layer.
///
/// - `load` returns an empty collection when nothing has been stored yet;
///   that is not an error.
/// - `save` replaces the stored collection wholesale.
pub trait QuestionStore {
    /// Read the full collection
    fn load(&self) -> Result<Vec<Question>, StoreError>;

    /// Overwrite the stored collection with `questions`
    fn save(&self, questions: &[Question]) -> Result<(), StoreError>;

    /// Human-readable location, used in messages and logs
    fn location(&self) -> String;
}

/// In-process store for tests and throwaway sessions.
///
/// Can be told to fail saves, to exercise the no-rollback path.
#[derive(Debug, Default)]
pub struct InMemoryQuestionStore {
    questions: RefCell<Vec<Question>>,
    fail_saves: Cell<bool>,
    save_count: Cell<usize>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `questions`
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: RefCell::new(questions),
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Snapshot of what has been saved
    pub fn stored(&self) -> Vec<Question> {
        self.questions.borrow().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl QuestionStore for InMemoryQuestionStore {
    fn load(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.borrow().clone())
    }

    fn save(&self, questions: &[Question]) -> Result<(), StoreError> {
        if self.fail_saves.get() {
            return Err(StoreError::Persistence {
                location: self.location(),
                reason: "saves disabled".to_string(),
            });
        }
        *self.questions.borrow_mut() = questions.to_vec();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
