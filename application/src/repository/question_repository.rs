use crate::ports::question_store::{QuestionStore, StoreError};
use quizmaker_domain::Question;
use quizmaker_domain::core::subject;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// The question bank (Aggregate)
///
/// Questions keep their insertion order. Every successful [`add`](Self::add)
/// rewrites the whole store (write-through). A failed save does NOT roll
/// back the in-memory addition: the question stays visible for the rest of
/// the process and the error is returned to the caller.
#[derive(Debug)]
pub struct QuestionRepository<S: QuestionStore> {
    store: S,
    questions: Vec<Question>,
}

impl<S: QuestionStore> QuestionRepository<S> {
    /// Load the bank from `store`, failing on corrupt content
    pub fn open(store: S) -> Result<Self, StoreError> {
        let questions = store.load()?;
        info!(
            "Loaded {} question(s) from {}",
            questions.len(),
            store.location()
        );
        Ok(Self { store, questions })
    }

    /// Load the bank from `store`, starting empty if the content is corrupt.
    ///
    /// The load error, if any, is handed back so the caller can report it.
    pub fn open_or_empty(store: S) -> (Self, Option<StoreError>) {
        match store.load() {
            Ok(questions) => {
                info!(
                    "Loaded {} question(s) from {}",
                    questions.len(),
                    store.location()
                );
                (Self { store, questions }, None)
            }
            Err(e) => {
                warn!("Starting with an empty question bank: {}", e);
                let repository = Self {
                    store,
                    questions: Vec::new(),
                };
                (repository, Some(e))
            }
        }
    }

    /// Append a question and persist the whole collection
    pub fn add(&mut self, question: Question) -> Result<(), StoreError> {
        debug!("Adding question: {}", question);
        self.questions.push(question);

        if let Err(e) = self.store.save(&self.questions) {
            warn!("Question kept in memory but not saved: {}", e);
            return Err(e);
        }

        info!(
            "Saved {} question(s) to {}",
            self.questions.len(),
            self.store.location()
        );
        Ok(())
    }

    /// All questions, in insertion order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions whose subject matches `subject` ignoring case, in insertion
    /// order. Empty when nothing matches.
    pub fn questions_by_subject(&self, subject: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.has_subject(subject))
            .collect()
    }

    /// Distinct subjects in insertion order.
    ///
    /// Subjects differing only in case are listed once, under the spelling
    /// seen first.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(Question::subject)
            .filter(|s| seen.insert(subject::normalize(s)))
            .collect()
    }

    /// Check submitted 0-based indexes against a question's correct answers.
    ///
    /// Set semantics: order is irrelevant and duplicates collapse. Anything
    /// other than an exact match is incorrect.
    pub fn validate_answers(question: &Question, submitted: &[usize]) -> bool {
        question.accepts(submitted.iter().copied())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
