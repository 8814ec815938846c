use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional settings from `config.toml` in the platform config directory.
/// A missing file is simply the default config.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Overrides the default task file location.
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "task-list").map(|proj| proj.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}
