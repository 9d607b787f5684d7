//! Add Questions use case
//!
//! Batch authoring: collect questions until the author says stop, then add
//! them to the repository one by one. Each add persists the full bank.

use crate::ports::question_authoring::QuestionAuthoring;
use crate::ports::question_store::{QuestionStore, StoreError};
use crate::ports::quiz_interaction::InteractionError;
use crate::repository::QuestionRepository;
use quizmaker_domain::Question;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while authoring questions
#[derive(Error, Debug)]
pub enum AddQuestionsError {
    #[error("Interaction failed: {0}")]
    Interaction(#[from] InteractionError),
}

/// Output of the AddQuestions use case
#[derive(Debug, Default)]
pub struct AddQuestionsOutput {
    /// Questions added to the in-memory bank
    pub added: usize,
    /// Save failures, one per failed add. Those questions are still in
    /// memory.
    pub save_errors: Vec<StoreError>,
}

impl AddQuestionsOutput {
    /// Whether the store matches the in-memory bank after the batch
    pub fn persisted(&self) -> bool {
        self.save_errors.is_empty()
    }
}

/// Use case for authoring a batch of questions
pub struct AddQuestionsUseCase<'a, S: QuestionStore> {
    repository: &'a mut QuestionRepository<S>,
}

impl<'a, S: QuestionStore> AddQuestionsUseCase<'a, S> {
    pub fn new(repository: &'a mut QuestionRepository<S>) -> Self {
        Self { repository }
    }

    /// Collect and add questions.
    ///
    /// If the author's input ends mid-batch, the questions completed so far
    /// are still added.
    pub fn execute(
        &mut self,
        authoring: &mut dyn QuestionAuthoring,
    ) -> Result<AddQuestionsOutput, AddQuestionsError> {
        let drafts = Self::collect(authoring)?;

        let mut output = AddQuestionsOutput::default();
        for question in drafts {
            let result = self.repository.add(question);
            output.added += 1;
            if let Err(e) = result {
                output.save_errors.push(e);
            }
        }

        if output.persisted() {
            info!("Added {} question(s)", output.added);
        } else {
            warn!(
                "Added {} question(s), {} save(s) failed",
                output.added,
                output.save_errors.len()
            );
        }
        Ok(output)
    }

    fn collect(authoring: &mut dyn QuestionAuthoring) -> Result<Vec<Question>, AddQuestionsError> {
        let mut drafts = Vec::new();
        loop {
            match authoring.compose_question()? {
                Some(question) => drafts.push(question),
                None => break,
            }
            if !authoring.add_another()? {
                break;
            }
        }
        Ok(drafts)
    }
}
