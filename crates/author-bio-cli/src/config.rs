//! CLI configuration management.
//!
//! Values come from, in increasing precedence: built-in defaults, the
//! config file, environment variables (a `.env` file is honored), and
//! finally command line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::commands::render::OutputFormat;

/// Overrides the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "BIO_CONFIG_DIR";

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Directory that relative `--output` paths resolve against.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::load_file()?;

        if let Ok(format) = std::env::var("BIO_FORMAT") {
            config.default_format = format
                .parse()
                .with_context(|| "Invalid BIO_FORMAT environment variable")?;
        }
        if let Ok(output_dir) = std::env::var("BIO_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(output_dir);
        }

        Ok(config)
    }

    /// Load defaults and the config file only, without environment overrides.
    ///
    /// `config set` edits this view; environment values are never saved.
    pub fn load_file() -> Result<Self> {
        match Self::config_file_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                serde_json::from_str(&contents).with_context(|| "Failed to parse config file")
            }
            _ => Ok(Self::default()),
        }
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents)
                .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir).join("config.json"));
        }
        ProjectDirs::from("dev", "author-bio", "bio")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Resolve an output path against `output_dir`.
    pub fn resolve_output(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.output_dir.join(path)
        }
    }
}
