//! Configuration management for LearnFlow

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::content::Catalog;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How long correct/incorrect feedback stays visible (milliseconds)
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,

    /// How long toasts stay on screen (milliseconds)
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,

    /// Custom catalog to load instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Vim mode enabled
    #[serde(default = "default_vim_mode")]
    pub vim_mode: bool,
}

fn default_feedback_ms() -> u64 {
    600
}

fn default_toast_ms() -> u64 {
    3000
}

fn default_vim_mode() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feedback_ms: default_feedback_ms(),
            toast_ms: default_toast_ms(),
            catalog_path: None,
            vim_mode: default_vim_mode(),
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it with defaults if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "learnflow").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "learnflow").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the key-value store path
    pub fn store_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("store.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("learnflow.log"))
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog {:?}", path)),
            None => Ok(Catalog::builtin()),
        }
    }
}
