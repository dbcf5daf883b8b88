//! Configuration for the cgidec tool.
//!
//! The configuration file is optional YAML:
//!
//! ```yaml
//! log_level: info
//! default_export: cgi-breakdown.txt
//! ```
//!
//! A missing file means defaults; an unreadable or invalid file is an
//! error at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::logging::LogLevel;

/// Tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CgidecConfig {
    /// Log level for the tracing subscriber
    #[serde(default)]
    pub log_level: LogLevel,
    /// Fallback path used by `export` when no path argument is given
    #[serde(default)]
    pub default_export: Option<String>,
}

/// Loads the configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CgidecConfig, Error> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_config_from_str(&contents)
}

/// Loads the configuration from a YAML string.
pub fn load_config_from_str(yaml: &str) -> Result<CgidecConfig, Error> {
    let config: CgidecConfig = serde_yaml::from_str(yaml)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates a configuration.
///
/// `default_export`, when present, must not be blank.
pub fn validate_config(config: &CgidecConfig) -> Result<(), Error> {
    if let Some(path) = &config.default_export {
        if path.trim().is_empty() {
            return Err(Error::Config(
                "default_export must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}
