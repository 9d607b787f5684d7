//! CLI entrypoint for quizmaker
//!
//! This is the main binary that wires together all layers: configuration,
//! logging, the JSON question store and the interactive console app.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use quizmaker_application::QuestionRepository;
use quizmaker_infrastructure::{ConfigLoader, FileConfig, FileLoggingConfig, JsonQuestionStore};
use quizmaker_presentation::{Cli, ConsoleFormatter, ConsoleIo, Menu, OutputConfig, QuizApp};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::config_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    // === Configuration ===
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, &config.logging)?;

    OutputConfig {
        color: config.output.color && !cli.no_color,
    }
    .apply();

    // === Dependency Injection ===
    let store_path = cli
        .store
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.store.path));
    let store = JsonQuestionStore::new(store_path);
    info!("Using question store {}", store.path().display());

    let (repository, load_error) = QuestionRepository::open_or_empty(store);

    let stdin = io::stdin();
    let console = ConsoleIo::new(stdin.lock(), io::stdout());
    let mut app = QuizApp::new(repository, Menu::default(), console, rand::rng())
        .with_policy(config.quiz.to_policy());

    if let Some(e) = load_error {
        app.notice(ConsoleFormatter::load_warning(&e));
    }

    app.run()?;
    Ok(())
}

/// Initialize logging based on verbosity level and the `[logging]` section.
///
/// Logs go to stderr unless a log file is configured, so they never mix with
/// prompts on stdout.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => match &logging.level {
            Some(level) => EnvFilter::try_new(level)
                .map_err(|e| anyhow!("Invalid logging.level '{}': {}", level, e))?,
            None => EnvFilter::new("warn"),
        },
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(file) = &logging.file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    };

    let path = Path::new(file);
    let name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", file))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", file))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}
