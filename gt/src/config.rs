//! Configuration for greeter

use eyre::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the name files
    #[serde(default = "default_names_dir")]
    pub names_dir: PathBuf,

    /// Glob pattern selecting name files inside `names_dir`
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Replacement greeting phrases (built-in set when absent)
    #[serde(default)]
    pub greetings: Option<Vec<String>>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_names_dir() -> PathBuf {
    PathBuf::from(crate::DEFAULT_NAMES_DIR)
}

fn default_pattern() -> String {
    crate::DEFAULT_PATTERN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names_dir: default_names_dir(),
            pattern: default_pattern(),
            greetings: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("greeter").join("greeter.yml")),
            Some(PathBuf::from("greeter.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from(path);
            }
        }

        Ok(Config::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).context(format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(greetings) = &self.greetings {
            if greetings.is_empty() {
                bail!("greetings must list at least one phrase");
            }
            if greetings.iter().any(|g| g.trim().is_empty()) {
                bail!("greetings must not contain blank phrases");
            }
        }
        Ok(())
    }
}
