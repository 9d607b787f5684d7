//! JSON file question store.
//!
//! The whole bank is one JSON array of question records, indented for
//! reading by hand:
//!
//! ```json
//! [
//!   {
//!     "text": "2+2?",
//!     "choices": ["3", "4", "5"],
//!     "correctAnswers": [1],
//!     "subject": "math"
//!   }
//! ]
//! ```
//!
//! Every save rewrites the file in place. There is no temp-file-and-rename
//! step, so two processes writing the same file can interleave.

use quizmaker_application::{QuestionStore, StoreError};
use quizmaker_domain::Question;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store path used when none is configured
pub const DEFAULT_STORE_PATH: &str = "questions.json";

/// Question store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonQuestionStore {
    path: PathBuf,
}

impl JsonQuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl ToString) -> StoreError {
        StoreError::Corrupt {
            location: self.location(),
            reason: reason.to_string(),
        }
    }

    fn persistence(&self, reason: impl ToString) -> StoreError {
        StoreError::Persistence {
            location: self.location(),
            reason: reason.to_string(),
        }
    }
}

impl QuestionStore for JsonQuestionStore {
    /// A missing file is an empty bank. An unreadable or malformed file is
    /// reported as corrupt.
    fn load(&self) -> Result<Vec<Question>, StoreError> {
        if !self.path.exists() {
            debug!("No question store at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.corrupt(e))?;
        serde_json::from_str(&content).map_err(|e| self.corrupt(e))
    }

    fn save(&self, questions: &[Question]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.persistence(e))?;
        }

        let json = serde_json::to_string_pretty(questions).map_err(|e| self.persistence(e))?;
        fs::write(&self.path, json).map_err(|e| self.persistence(e))?;

        debug!(
            "Wrote {} question(s) to {}",
            questions.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
