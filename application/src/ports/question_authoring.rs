//! Question authoring port
//!
//! Batch authoring asks for one question at a time, then whether the author
//! wants to add another. Prompting, re-asking on bad input and parsing all
//! happen in the adapter; the use case only sees finished questions.

use super::quiz_interaction::InteractionError;
use quizmaker_domain::Question;

/// Source of newly authored questions
pub trait QuestionAuthoring {
    /// Collect one complete question.
    ///
    /// Returns `Ok(None)` when the author's input ends before a question is
    /// complete.
    fn compose_question(&mut self) -> Result<Option<Question>, InteractionError>;

    /// The "do you want to add another question?" gate
    fn add_another(&mut self) -> Result<bool, InteractionError>;
}
