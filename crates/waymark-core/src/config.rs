//! Router configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL prefix the application is mounted under
    pub basename: String,
    /// History entries the router starts with
    pub initial_entries: Vec<String>,
    /// Starting position in `initial_entries` (last entry when unset)
    pub initial_index: Option<usize>,
    /// Maximum retained history entries
    pub history_limit: usize,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            basename: "/".to_string(),
            initial_entries: vec!["/".to_string()],
            initial_index: None,
            history_limit: 100,
            log_level: "info".to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;

        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration");

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(CoreError::Config("history_limit must be at least 1".to_string()));
        }
        if let Some(index) = self.initial_index {
            if index >= self.initial_entries.len().max(1) {
                return Err(CoreError::Config(format!(
                    "initial_index {} is out of range for {} entries",
                    index,
                    self.initial_entries.len()
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
