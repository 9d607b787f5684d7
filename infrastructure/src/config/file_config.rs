//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use application types where appropriate.

use crate::store::DEFAULT_STORE_PATH;
use quizmaker_application::config::quiz_policy::{DEFAULT_MAX_QUESTIONS, DEFAULT_MIN_QUESTIONS};
use quizmaker_application::{InvalidAnswerPolicy, QuizPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("store.path cannot be empty")]
    EmptyStorePath,

    #[error("quiz.min_questions cannot be 0")]
    ZeroMinQuestions,

    #[error("quiz.min_questions ({min}) cannot exceed quiz.max_questions ({max})")]
    InvertedQuestionRange { min: usize, max: usize },
}

/// Raw question store configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Path of the JSON question bank
    pub path: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
        }
    }
}

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Smallest question count a quiz may ask for
    pub min_questions: usize,
    /// Largest question count a quiz may ask for
    pub max_questions: usize,
    /// "reprompt" or "score_incorrect"
    pub invalid_answer: InvalidAnswerPolicy,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            min_questions: DEFAULT_MIN_QUESTIONS,
            max_questions: DEFAULT_MAX_QUESTIONS,
            invalid_answer: InvalidAnswerPolicy::default(),
        }
    }
}

impl FileQuizConfig {
    pub fn to_policy(&self) -> QuizPolicy {
        QuizPolicy::default()
            .with_count_range(self.min_questions, self.max_questions)
            .with_invalid_answer(self.invalid_answer)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write logs to this file instead of stderr
    pub file: Option<String>,
    /// Filter directive used when no `-v` flag is given (e.g. "info")
    pub level: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question store settings
    pub store: FileStoreConfig,
    /// Quiz settings
    pub quiz: FileQuizConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.store.path.trim().is_empty() {
            return Err(ConfigValidationError::EmptyStorePath);
        }

        if self.quiz.min_questions == 0 {
            return Err(ConfigValidationError::ZeroMinQuestions);
        }

        if self.quiz.min_questions > self.quiz.max_questions {
            return Err(ConfigValidationError::InvertedQuestionRange {
                min: self.quiz.min_questions,
                max: self.quiz.max_questions,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[store]
path = "banks/science.json"

[quiz]
min_questions = 5
max_questions = 15
invalid_answer = "score_incorrect"

[output]
color = false

[logging]
file = "quizmaker.log"
level = "debug"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.path, "banks/science.json");
        assert_eq!(config.quiz.min_questions, 5);
        assert_eq!(config.quiz.max_questions, 15);
        assert_eq!(config.quiz.invalid_answer, InvalidAnswerPolicy::ScoreIncorrect);
        assert!(!config.output.color);
        assert_eq!(config.logging.file.as_deref(), Some("quizmaker.log"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[quiz]
max_questions = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.max_questions, 30);
        // Defaults should apply
        assert_eq!(config.quiz.min_questions, 10);
        assert_eq!(config.store.path, "questions.json");
        assert!(config.output.color);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.store.path, "questions.json");
        assert_eq!(config.quiz.to_policy(), QuizPolicy::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_store_path() {
        let toml_str = r#"
[store]
path = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyStorePath));
    }

    #[test]
    fn test_validate_question_range() {
        let toml_str = r#"
[quiz]
min_questions = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroMinQuestions));

        let toml_str = r#"
[quiz]
min_questions = 12
max_questions = 8
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvertedQuestionRange { min: 12, max: 8 })
        );
    }

    #[test]
    fn test_unknown_invalid_answer_policy_rejected() {
        let toml_str = r#"
[quiz]
invalid_answer = "shrug"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_to_policy() {
        let config = FileQuizConfig {
            min_questions: 1,
            max_questions: 3,
            invalid_answer: InvalidAnswerPolicy::ScoreIncorrect,
        };
        let policy = config.to_policy();
        assert!(policy.check_count(3).is_ok());
        assert!(policy.check_count(4).is_err());
        assert_eq!(policy.invalid_answer, InvalidAnswerPolicy::ScoreIncorrect);
    }
}
