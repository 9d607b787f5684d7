//! Run Quiz use case
//!
//! Orchestrates one quiz: builds the candidate pool from the repository,
//! starts a [`QuizSession`], and walks the user through every selected
//! question via the [`QuizInteraction`] port.

use crate::config::InvalidAnswerPolicy;
use crate::ports::question_store::QuestionStore;
use crate::ports::quiz_interaction::{AnswerInput, InteractionError, QuizInteraction};
use crate::repository::QuestionRepository;
use quizmaker_domain::{
    AnswerOutcome, AnswerSelection, Question, QuizError, QuizResult, QuizSession,
};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a quiz
#[derive(Error, Debug)]
pub enum RunQuizError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("Interaction failed: {0}")]
    Interaction(#[from] InteractionError),
}

impl RunQuizError {
    /// Check if the quiz could not start because the subject has no questions
    pub fn is_no_questions(&self) -> bool {
        matches!(self, RunQuizError::Quiz(QuizError::NoQuestionsForSubject(_)))
    }
}

/// Input for the RunQuiz use case
#[derive(Debug, Clone)]
pub struct RunQuizInput {
    /// Subject to draw questions from (case-insensitive)
    pub subject: String,
    /// How many questions the user asked for
    pub requested_count: usize,
}

impl RunQuizInput {
    pub fn new(subject: impl Into<String>, requested_count: usize) -> Self {
        Self {
            subject: subject.into(),
            requested_count,
        }
    }
}

/// Use case for taking a quiz
///
/// Only reads from the repository.
pub struct RunQuizUseCase<'a, S: QuestionStore> {
    repository: &'a QuestionRepository<S>,
    invalid_answer: InvalidAnswerPolicy,
}

impl<'a, S: QuestionStore> RunQuizUseCase<'a, S> {
    pub fn new(repository: &'a QuestionRepository<S>) -> Self {
        Self {
            repository,
            invalid_answer: InvalidAnswerPolicy::default(),
        }
    }

    pub fn with_invalid_answer_policy(mut self, policy: InvalidAnswerPolicy) -> Self {
        self.invalid_answer = policy;
        self
    }

    /// Run a quiz to completion (or until the user quits)
    pub fn execute<R: Rng + ?Sized>(
        &self,
        input: RunQuizInput,
        interaction: &mut dyn QuizInteraction,
        rng: &mut R,
    ) -> Result<QuizResult, RunQuizError> {
        let pool: Vec<Question> = self
            .repository
            .questions_by_subject(&input.subject)
            .into_iter()
            .cloned()
            .collect();

        let mut session = QuizSession::start(input.subject, input.requested_count, pool, rng)?;

        info!(
            "Starting quiz on '{}': {} of {} requested question(s), pool of {}",
            session.subject(),
            session.effective_length(),
            session.requested_count(),
            session.pool_size()
        );
        interaction.on_quiz_start(
            session.subject(),
            session.effective_length(),
            session.requested_count(),
        );

        let total = session.effective_length();
        while let Some(question) = session.select_next().cloned() {
            let number = session.position();
            interaction.present_question(number, total, &question);

            let Some(outcome) = self.collect_answer(&mut session, &question, interaction)? else {
                let result = session.abandon();
                info!(
                    "Quiz abandoned after {} question(s): {}",
                    result.answered, result
                );
                return Ok(result);
            };

            debug!(
                "Question {}/{} answered {}, {} remaining",
                number,
                total,
                if outcome.correct { "correctly" } else { "incorrectly" },
                session.remaining()
            );
            interaction.report_outcome(&question, &outcome);
        }

        let result = session.finish();
        info!("Quiz finished: {}", result);
        Ok(result)
    }

    /// Read answers until one is scored. `None` means the user quit.
    fn collect_answer(
        &self,
        session: &mut QuizSession,
        question: &Question,
        interaction: &mut dyn QuizInteraction,
    ) -> Result<Option<AnswerOutcome>, RunQuizError> {
        loop {
            let raw = match interaction.read_answer(question)? {
                AnswerInput::Quit => return Ok(None),
                AnswerInput::Answer(raw) => raw,
            };

            match AnswerSelection::parse(&raw, question.choice_count()) {
                Ok(selection) => return Ok(Some(session.submit_answer(&selection)?)),
                Err(e) => {
                    debug!("Rejected answer {:?}: {}", raw, e);
                    interaction.report_invalid_answer(&e);
                    if self.invalid_answer == InvalidAnswerPolicy::ScoreIncorrect {
                        return Ok(Some(session.forfeit()?));
                    }
                }
            }
        }
    }
}
