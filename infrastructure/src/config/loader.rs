//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["quizmaker.toml", ".quizmaker.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./quizmaker.toml` or `./.quizmaker.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/quizmaker/config.toml`
    /// 4. Fallback: `~/.config/quizmaker/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let project = Self::project_config_path();
        let global = Self::global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), project.as_deref(), config_path.map(PathBuf::as_path))
    }

    /// Merge the given files over the defaults, lowest priority first
    fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quizmaker/config.toml if set,
    /// otherwise falls back to ~/.config/quizmaker/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quizmaker").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn config_sources(explicit: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        if let Some(path) = explicit {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Explicit: {}", marker, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_CONFIG_FILES[0], PROJECT_CONFIG_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", marker, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizmaker_application::InvalidAnswerPolicy;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.store.path, "questions.json");
        assert_eq!(config.quiz.min_questions, 10);
        assert_eq!(config.quiz.max_questions, 20);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("quizmaker"));
    }

    #[test]
    fn test_load_from_no_files_is_default() {
        let config = ConfigLoader::load_from(None, None, None).unwrap();
        assert_eq!(config.store.path, "questions.json");
        assert!(config.output.color);
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        let explicit = dir.path().join("explicit.toml");

        fs::write(
            &global,
            "[store]\npath = \"global.json\"\n\n[quiz]\nmin_questions = 3\n",
        )
        .unwrap();
        fs::write(&project, "[store]\npath = \"project.json\"\n").unwrap();
        fs::write(&explicit, "[quiz]\ninvalid_answer = \"score_incorrect\"\n").unwrap();

        let config = ConfigLoader::load_from(
            Some(global.as_path()),
            Some(project.as_path()),
            Some(explicit.as_path()),
        )
        .unwrap();

        assert_eq!(config.store.path, "project.json");
        assert_eq!(config.quiz.min_questions, 3);
        assert_eq!(config.quiz.max_questions, 20);
        assert_eq!(config.quiz.invalid_answer, InvalidAnswerPolicy::ScoreIncorrect);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("broken.toml");
        fs::write(&explicit, "[quiz]\nmin_questions = \"many\"\n").unwrap();

        assert!(ConfigLoader::load_from(None, None, Some(explicit.as_path())).is_err());
    }

    #[test]
    fn test_config_sources_lists_explicit_path() {
        let explicit = PathBuf::from("/definitely/not/here.toml");
        let lines = ConfigLoader::config_sources(Some(&explicit));
        assert!(lines[0].starts_with("Configuration sources"));
        assert!(lines.iter().any(|l| l.contains("Explicit: /definitely/not/here.toml")));
        assert_eq!(lines.last().unwrap(), "  [     ] Default: built-in defaults");
    }
}
