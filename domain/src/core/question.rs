//! Question value object

use super::error::DomainError;
use super::subject;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A multiple-choice question tagged with a subject (Value Object)
///
/// Choices are stored 0-based; user-facing numbering is 1-based and
/// converted at the edges (see [`crate::AnswerSelection`]). A question is
/// immutable once built: editing means building a new one.
///
/// Every index in `correct_answers` is guaranteed to lie in
/// `0..choices.len()`, and the set is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    text: String,
    choices: Vec<String>,
    correct_answers: BTreeSet<usize>,
    subject: String,
}

impl Question {
    /// Build a question, checking every invariant.
    ///
    /// Duplicate correct-answer indexes collapse into one.
    pub fn try_new(
        text: impl Into<String>,
        choices: Vec<String>,
        correct_answers: impl IntoIterator<Item = usize>,
        subject: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        let subject = subject.into();

        if text.trim().is_empty() {
            return Err(DomainError::EmptyText);
        }
        if subject.trim().is_empty() {
            return Err(DomainError::EmptySubject);
        }
        if choices.is_empty() {
            return Err(DomainError::NoChoices);
        }
        if let Some(position) = choices.iter().position(|c| c.trim().is_empty()) {
            return Err(DomainError::EmptyChoice(position + 1));
        }

        let correct_answers: BTreeSet<usize> = correct_answers.into_iter().collect();
        if correct_answers.is_empty() {
            return Err(DomainError::NoCorrectAnswers);
        }
        if let Some(&index) = correct_answers.iter().find(|&&i| i >= choices.len()) {
            return Err(DomainError::AnswerOutOfRange {
                index,
                choices: choices.len(),
            });
        }

        Ok(Self {
            text,
            choices,
            correct_answers,
            subject,
        })
    }

    /// The prompt shown to the user
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices in presentation order
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// 0-based indexes of the correct choices
    pub fn correct_answers(&self) -> &BTreeSet<usize> {
        &self.correct_answers
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Check whether this question belongs to `subject` (case-insensitive)
    pub fn has_subject(&self, subject: &str) -> bool {
        subject::matches(&self.subject, subject)
    }

    /// Check a submitted answer against the correct-answer set.
    ///
    /// The submission is treated as a set: order does not matter and
    /// duplicates collapse. It must equal the correct set exactly; a
    /// partial overlap is simply wrong.
    pub fn accepts(&self, submitted: impl IntoIterator<Item = usize>) -> bool {
        let submitted: BTreeSet<usize> = submitted.into_iter().collect();
        submitted == self.correct_answers
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.subject, self.text)
    }
}

/// On-disk shape of a question.
///
/// Loading goes through [`Question::try_new`], so a stored record that
/// breaks an invariant fails to deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    text: String,
    choices: Vec<String>,
    correct_answers: Vec<usize>,
    subject: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = DomainError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::try_new(
            record.text,
            record.choices,
            record.correct_answers,
            record.subject,
        )
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            text: question.text,
            choices: question.choices,
            correct_answers: question.correct_answers.into_iter().collect(),
            subject: question.subject,
        }
    }
}
