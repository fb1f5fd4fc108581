use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Extension for generated script files
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Maximum subtitle file size in bytes
    #[serde(default = "default_max_file_size_bytes")]
    pub max_file_size_bytes: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for application logging
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    // @level: Error only
    Error,
    // @level: Warnings and errors
    Warn,
    // @level: Normal output
    #[default]
    Info,
    // @level: Debug output
    Debug,
    // @level: Full tracing
    Trace,
}

fn default_output_extension() -> String {
    "txt".to_string()
}

fn default_max_file_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_extension: default_output_extension(),
            max_file_size_bytes: default_max_file_size_bytes(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output_extension.trim().is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }

        if self.output_extension.starts_with('.') {
            return Err(anyhow!(
                "Output extension must not include a leading dot: {}",
                self.output_extension
            ));
        }

        // Writing scripts as .srt/.ass would make folder runs rediscover
        // their own outputs as inputs on the next pass
        if crate::file_utils::is_subtitle_extension(&self.output_extension.to_lowercase()) {
            return Err(anyhow!(
                "Output extension must not be a subtitle extension: {}",
                self.output_extension
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow!("Maximum file size must be greater than zero"));
        }

        Ok(())
    }
}
