//! Configuration Management
//!
//! Handles persistent configuration storage for fleetview.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Last queried application
    #[serde(default)]
    pub application: Option<String>,
    /// Last used cloud provider filter
    #[serde(default)]
    pub cloud_provider: Option<String>,
    /// Provider document paths used when none are given on the command line
    #[serde(default)]
    pub providers: Vec<PathBuf>,
    /// Provider endpoints (`cloud=url`) used when none are given on the command line
    #[serde(default)]
    pub endpoints: Vec<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fleetview").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Get effective application (env > config)
    pub fn effective_application(&self) -> Option<String> {
        std::env::var("FLEETVIEW_APPLICATION")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.application.clone())
    }

    /// Remember the last queried application and filter
    pub fn remember_query(
        &mut self,
        application: &str,
        cloud_provider: Option<&str>,
    ) -> Result<()> {
        self.application = Some(application.to_string());
        self.cloud_provider = cloud_provider.map(str::to_string);
        self.save()
    }
}
