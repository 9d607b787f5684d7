//! Configuration file loading for quizmaker
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quizmaker.toml` or `./.quizmaker.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/quizmaker/config.toml`
//! 4. Fallback: `~/.config/quizmaker/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileQuizConfig,
    FileStoreConfig,
};
pub use loader::ConfigLoader;
