//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quizmaker
#[derive(Parser, Debug)]
#[command(name = "quizmaker")]
#[command(author, version, about = "Author multiple-choice questions and run randomized quizzes")]
#[command(long_about = r#"
Quizmaker keeps a bank of multiple-choice questions tagged by subject and
runs quizzes drawn at random from one subject.

From the menu you can:
1. Add questions (with one or more correct answers)
2. Take a quiz on a subject
3. List the subjects in the bank

Questions are saved to a JSON file after every addition.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quizmaker.toml    Project-level config
3. ~/.config/quizmaker/config.toml   Global config

Example:
  quizmaker
  quizmaker --store ~/quizzes/biology.json
  quizmaker --show-config
"#)]
pub struct Cli {
    /// Path of the question bank (overrides [store] path)
    #[arg(short, long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
