//! Presentation layer for quizmaker
//!
//! This crate contains the CLI definition, console adapters for the
//! application ports, the main menu and output formatting.

pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod menu;
pub mod output;

// Re-export commonly used types
pub use app::QuizApp;
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use console::{ConsoleAuthoring, ConsoleIo, ConsoleQuizInteraction};
pub use menu::{Menu, MenuAction, MenuEntry};
pub use output::console::ConsoleFormatter;
