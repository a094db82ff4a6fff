pub mod cli;
pub mod defaults;

use std::env;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::defaults::defaults as d;

/// Configuration error type
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

/// Settings as they appear in a config file. Every field is optional so a
/// file only overrides what it names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub context_lines: Option<u32>,
    pub include_status: Option<bool>,
    pub tracker_base_url: Option<String>,
    pub hint: Option<String>,
}

impl FileConfig {
    /// Load a config file, dispatching on the extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
            }
            other => Err(ConfigError::ParseError(format!(
                "Unsupported file format: {:?}",
                other
            ))),
        }
    }
}

/// Resolved configuration: defaults, overridden by the global config file,
/// the project config file, and finally the CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub context_lines: u32,
    pub include_status: bool,
    pub tracker_base_url: String,
    pub show_prompt: bool,
    pub hint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: d::DEFAULT_MODEL.to_string(),
            temperature: d::TEMPERATURE,
            max_tokens: d::MAX_TOKENS,
            context_lines: d::CONTEXT_LINES,
            include_status: d::INCLUDE_STATUS,
            tracker_base_url: d::TRACKER_BASE_URL.to_string(),
            show_prompt: false,
            hint: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources (global file, project file, args).
    pub fn load(args: &cli::Args) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(global_config_path) = Self::global_config_path() {
            if global_config_path.exists() {
                config.apply_file(&FileConfig::from_file(&global_config_path)?);
            }
        }

        if let Some(project_config_path) = Self::find_project_config() {
            config.apply_file(&FileConfig::from_file(&project_config_path)?);
        }

        config.apply_args(args);
        Ok(config)
    }

    fn apply_file(&mut self, file: &FileConfig) {
        if let Some(model) = &file.model {
            self.model = model.clone();
        }
        if let Some(temperature) = file.temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = file.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(context_lines) = file.context_lines {
            self.context_lines = context_lines;
        }
        if let Some(include_status) = file.include_status {
            self.include_status = include_status;
        }
        if let Some(tracker_base_url) = &file.tracker_base_url {
            self.tracker_base_url = tracker_base_url.clone();
        }
        if let Some(hint) = &file.hint {
            self.hint = Some(hint.clone());
        }
    }

    fn apply_args(&mut self, args: &cli::Args) {
        if let Some(model) = &args.model {
            self.model = model.clone();
        }
        if let Some(temperature) = args.temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = args.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(context_lines) = args.context_lines {
            self.context_lines = context_lines;
        }
        if args.no_status {
            self.include_status = false;
        }
        if args.show_prompt {
            self.show_prompt = true;
        }
        if let Some(hint) = &args.hint {
            self.hint = Some(hint.clone());
        }
    }

    /// Get the global config path
    fn global_config_path() -> Option<PathBuf> {
        env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join(d::GLOBAL_CONFIG_DIRNAME)
                .join(d::GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Find project config by walking up the directory tree
    fn find_project_config() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;
        let mut dir = current_dir.as_path();

        loop {
            let config_path = dir.join(d::DEFAULT_CONFIG_FILENAME);
            if config_path.exists() {
                return Some(config_path);
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.context_lines, 10);
        assert!(config.include_status);
        assert_eq!(
            config.tracker_base_url,
            "https://montaapp.atlassian.net/browse/"
        );
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "model = \"gpt-5\"\ncontext_lines = 3").unwrap();

        let mut config = Config::default();
        config.apply_file(&FileConfig::from_file(&path).unwrap());
        assert_eq!(config.model, "gpt-5");
        assert_eq!(config.context_lines, 3);
        // Untouched fields keep their defaults
        assert_eq!(config.max_tokens, 1024);
    }

    #[test]
    fn test_args_override_file() {
        let args = cli::Args::new_from(
            [
                "prgen",
                "default.md",
                "staging",
                "--model",
                "gpt-4.1",
                "--no-status",
            ]
            .iter()
            .map(ToString::to_string),
        );

        let mut config = Config::default();
        config.apply_file(&FileConfig {
            model: Some("gpt-5".to_string()),
            ..FileConfig::default()
        });
        config.apply_args(&args);

        assert_eq!(config.model, "gpt-4.1");
        assert!(!config.include_status);
    }

    #[test]
    fn test_unsupported_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "model: gpt-5").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_example_config_parses() {
        let example = defaults::example_config();
        let parsed: FileConfig = toml::from_str(&example).unwrap();
        assert_eq!(parsed.context_lines, Some(d::CONTEXT_LINES));
        assert_eq!(parsed.include_status, Some(d::INCLUDE_STATUS));
        assert_eq!(
            parsed.tracker_base_url.as_deref(),
            Some(d::TRACKER_BASE_URL)
        );
    }
}
