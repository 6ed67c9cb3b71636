//! Configuration handling for the compiler

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, overridden by command-line flags
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MouldConfig {
    /// Stylesheet replacing the built-in styles
    pub stylesheet: Option<PathBuf>,
    /// Root directory for generated artifacts
    pub out_dir: Option<PathBuf>,
    /// Reject unrecognized lines
    pub strict: Option<bool>,
    /// Basic-auth user for forms that don't set `form-user`
    pub default_user: Option<String>,
}

impl MouldConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "mould", "mould").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: MouldConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
