//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Settings for one verification session
#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    /// Name of the chat client the operator types into
    #[serde(default = "default_client")]
    pub client: String,

    /// Require an Enter press between checks
    #[serde(default = "default_pause")]
    pub pause_between_checks: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            client: default_client(),
            pause_between_checks: default_pause(),
        }
    }
}

fn default_client() -> String {
    "Cursor".to_string()
}

fn default_pause() -> bool {
    true
}

/// Report output settings
#[derive(Debug, Deserialize, Default)]
pub struct ReportConfig {
    /// Also write the report as JSON to this path
    #[serde(default)]
    pub json_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}
