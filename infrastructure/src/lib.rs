//! Infrastructure layer for quizmaker
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileQuizConfig, FileStoreConfig,
};
pub use store::{DEFAULT_STORE_PATH, JsonQuestionStore};
