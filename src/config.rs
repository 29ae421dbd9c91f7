//! Configuration loading and management
//!
//! Handles parsing of `.flowboard.toml` configuration files.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::DueDateReference;
use crate::state::Theme;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = ".flowboard.toml";

/// Value of `dashboard.due_today` selecting the real clock.
pub const DUE_TODAY_CLOCK: &str = "today";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dataset override file (JSON). Relative paths resolve against the
    /// directory holding the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    /// Terminal UI defaults
    #[serde(default)]
    pub ui: UiConfig,

    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Terminal UI defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Starting theme for the session
    #[serde(default)]
    pub theme: Theme,

    /// Start with the sidebar collapsed
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Date compared against for "Tasks due today": `YYYY-MM-DD` or `today`
    #[serde(default = "default_due_today")]
    pub due_today: String,
}

fn default_due_today() -> String {
    "2026-02-18".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            due_today: default_due_today(),
        }
    }
}

impl DashboardConfig {
    pub fn due_date_reference(&self) -> crate::error::Result<DueDateReference> {
        let value = self.due_today.trim();
        if value.eq_ignore_ascii_case(DUE_TODAY_CLOCK) {
            return Ok(DueDateReference::SystemClock);
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(DueDateReference::Fixed)
            .map_err(|_| {
                crate::error::Error::InvalidConfig(format!(
                    "dashboard.due_today must be YYYY-MM-DD or '{DUE_TODAY_CLOCK}' (got '{value}')"
                ))
            })
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| crate::error::Error::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate()?;
        if let (Some(data), Some(base)) = (config.data.as_ref(), path.parent()) {
            if data.is_relative() {
                config.data = Some(base.join(data));
            }
        }
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load(&config_path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %config_path.display(), error = %err, "ignoring config");
                Self::default()
            }
        }
    }

    /// An explicitly named file must load; otherwise fall back to the
    /// working directory's `.flowboard.toml`.
    pub fn resolve(explicit: Option<&Path>) -> crate::error::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let cwd = std::env::current_dir()?;
                Ok(Self::load_from_dir(&cwd))
            }
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.dashboard.due_date_reference()?;
        Ok(())
    }
}
