// Run configuration for the rearranger binary

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RearrangeConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Appended to the source table name when no output name is given.
    pub output_suffix: String,
    /// Overwrite the source table instead of adding a new one.
    pub replace_source: bool,
    /// Pretty-print the written database.
    pub pretty: bool,
}

impl Default for RearrangeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_suffix: "_rearranged".to_string(),
            replace_source: false,
            pretty: true,
        }
    }
}

impl RearrangeConfig {
    /// Load configuration from a JSON or TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses JSON first, then TOML.
    pub fn parse(content: &str) -> Result<Self> {
        if let Ok(config) = serde_json::from_str::<RearrangeConfig>(content) {
            return Ok(config);
        }
        toml::from_str::<RearrangeConfig>(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Name the realigned table is stored under.
    pub fn output_name(&self, source: &str, explicit: Option<&str>) -> String {
        match explicit {
            Some(name) => name.to_string(),
            None if self.replace_source => source.to_string(),
            None => format!("{}{}", source, self.output_suffix),
        }
    }
}
