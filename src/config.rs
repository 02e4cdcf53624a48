//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// How long the simulated submission takes, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// ASCII art file drawn behind the card
    pub backdrop_path: Option<PathBuf>,
    /// Spotlight falloff radius, in columns
    pub spotlight_radius: Option<u16>,
}

impl TuiConfig {
    pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
    pub const DEFAULT_SPOTLIGHT_RADIUS: u16 = 12;

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(
            self.submit_delay_ms
                .unwrap_or(Self::DEFAULT_SUBMIT_DELAY_MS),
        )
    }

    pub fn spotlight_radius(&self) -> u16 {
        self.spotlight_radius
            .unwrap_or(Self::DEFAULT_SPOTLIGHT_RADIUS)
    }
}
