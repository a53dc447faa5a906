//! Logging configuration types

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_REGISTRY_LOG_LEVEL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Level for the resolution engine's own events
    pub registry_level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            registry_level: DEFAULT_REGISTRY_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
