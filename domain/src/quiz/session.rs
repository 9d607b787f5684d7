//! Quiz session entity.
//!
//! A [`QuizSession`] is created from a subject-filtered snapshot of the
//! question bank (the candidate pool). It decides the draw order up front,
//! then hands questions out one at a time and scores each submitted answer.
//!
//! ```text
//! start ──▶ AwaitingSelection ──select_next──▶ AwaitingAnswer
//!                  ▲                                 │
//!                  └──────submit_answer / forfeit────┘
//!
//! after `effective_length` answers: Exhausted ──finish──▶ QuizResult
//! ```
//!
//! The session never reads or writes the question store. It is not
//! persisted and cannot be resumed once finished.

use super::error::QuizError;
use super::result::{AnswerOutcome, QuizResult};
use super::sampler::draw_order;
use crate::answer::selection::AnswerSelection;
use crate::core::question::Question;
use rand::Rng;
use std::collections::BTreeSet;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to hand out the next question
    AwaitingSelection,
    /// A question has been presented and needs an answer
    AwaitingAnswer,
    /// Every selected question has been answered
    Exhausted,
}

/// One quiz run over a subject's candidate pool (Entity)
#[derive(Debug, Clone)]
pub struct QuizSession {
    subject: String,
    requested_count: usize,
    pool: Vec<Question>,
    draw_order: Vec<usize>,
    used_indexes: BTreeSet<usize>,
    pending: Option<usize>,
    answered: usize,
    score: usize,
}

impl QuizSession {
    /// Start a session over `pool`.
    ///
    /// The session length is `min(requested_count, pool.len())`. A request
    /// larger than the pool is truncated silently; callers that want to
    /// tell the user can compare [`effective_length`](Self::effective_length)
    /// with [`requested_count`](Self::requested_count).
    ///
    /// Any positive count is accepted here. Range limits such as 10..=20
    /// are the caller's policy.
    pub fn start<R: Rng + ?Sized>(
        subject: impl Into<String>,
        requested_count: usize,
        pool: Vec<Question>,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let subject = subject.into();

        if requested_count == 0 {
            return Err(QuizError::InvalidQuestionCount(requested_count));
        }
        if pool.is_empty() {
            return Err(QuizError::NoQuestionsForSubject(subject));
        }

        let draw_order = draw_order(pool.len(), requested_count, rng);

        Ok(Self {
            subject,
            requested_count,
            pool,
            draw_order,
            used_indexes: BTreeSet::new(),
            pending: None,
            answered: 0,
            score: 0,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    /// Number of questions this session will present
    pub fn effective_length(&self) -> usize {
        self.draw_order.len()
    }

    /// Whether the requested count was cut down to the pool size
    pub fn is_truncated(&self) -> bool {
        self.effective_length() < self.requested_count
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Pool indexes presented so far. Only ever grows.
    pub fn used_indexes(&self) -> &BTreeSet<usize> {
        &self.used_indexes
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn remaining(&self) -> usize {
        self.effective_length() - self.answered
    }

    pub fn state(&self) -> SessionState {
        if self.pending.is_some() {
            SessionState::AwaitingAnswer
        } else if self.answered >= self.effective_length() {
            SessionState::Exhausted
        } else {
            SessionState::AwaitingSelection
        }
    }

    /// The question waiting for an answer, if any
    pub fn current(&self) -> Option<&Question> {
        self.pending.map(|index| &self.pool[index])
    }

    /// 1-based position of the question being presented or next to be
    /// presented
    pub fn position(&self) -> usize {
        self.answered + 1
    }

    /// Present the next question in draw order.
    ///
    /// Calling this again before answering returns the same question.
    /// Returns `None` once the session is exhausted.
    pub fn select_next(&mut self) -> Option<&Question> {
        if self.pending.is_none() {
            let index = *self.draw_order.get(self.answered)?;
            let fresh = self.used_indexes.insert(index);
            debug_assert!(fresh, "pool index {index} drawn twice");
            self.pending = Some(index);
        }
        self.current()
    }

    /// Score an answer for the pending question.
    ///
    /// A correct answer adds one point; there is no partial credit.
    pub fn submit_answer(
        &mut self,
        selection: &AnswerSelection,
    ) -> Result<AnswerOutcome, QuizError> {
        let index = self.pending.ok_or(QuizError::NoPendingQuestion)?;
        let question = &self.pool[index];
        let correct = question.accepts(selection.indexes().iter().copied());
        Ok(self.record(index, correct))
    }

    /// Give up on the pending question, scoring it as incorrect
    pub fn forfeit(&mut self) -> Result<AnswerOutcome, QuizError> {
        let index = self.pending.ok_or(QuizError::NoPendingQuestion)?;
        Ok(self.record(index, false))
    }

    fn record(&mut self, index: usize, correct: bool) -> AnswerOutcome {
        let outcome = AnswerOutcome {
            number: self.position(),
            correct,
            correct_answers: self.pool[index].correct_answers().clone(),
        };
        if correct {
            self.score += 1;
        }
        self.answered += 1;
        self.pending = None;
        outcome
    }

    /// End the session and report the score against the effective length.
    ///
    /// If questions are still unanswered the result is marked abandoned.
    pub fn finish(self) -> QuizResult {
        let abandoned = self.answered < self.effective_length();
        self.into_result(abandoned)
    }

    /// Stop early and report the partial score
    pub fn abandon(self) -> QuizResult {
        self.into_result(true)
    }

    fn into_result(self, abandoned: bool) -> QuizResult {
        QuizResult {
            total: self.effective_length(),
            subject: self.subject,
            score: self.score,
            answered: self.answered,
            abandoned,
        }
    }
}
