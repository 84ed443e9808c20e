//! Validator configuration
//!
//! Loaded from JSON or built in code. Every field has a default, so `{}` is
//! a complete configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{self, Event};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Maximum container nesting the validator descends into (default: 64)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Emit begin/complete trace events per pass (default: true)
    #[serde(default = "default_log_passes")]
    pub log_passes: bool,
}

fn default_max_depth() -> usize {
    64
}

fn default_log_passes() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            log_passes: default_log_passes(),
        }
    }
}

impl ValidatorConfig {
    /// Same configuration with a different depth limit
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Same configuration with pass logging switched on or off
    pub fn with_log_passes(self, log_passes: bool) -> Self {
        Self { log_passes, ..self }
    }

    /// Parse and check a JSON configuration
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.check()?;

        let max_depth = config.max_depth.to_string();
        observability::emit(Event::ConfigLoaded, &[("max_depth", max_depth.as_str())]);
        Ok(config)
    }

    /// Read, parse and check a JSON configuration file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    fn check(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.max_depth, 64);
        assert!(config.log_passes);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ValidatorConfig::from_json("{}").unwrap(), ValidatorConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = ValidatorConfig::from_json(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(config.max_depth, 8);
        assert!(config.log_passes);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = ValidatorConfig::from_json(r#"{"max_depth": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ValidatorConfig::from_json("{max_depth").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_depth": 16, "log_passes": false}}"#).unwrap();

        let config = ValidatorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_depth, 16);
        assert!(!config.log_passes);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = ValidatorConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
