//! Configuration for the adaptive reasoning router
//!
//! Loaded from TOML. Every section and field has a default, so an empty file is
//! a valid configuration. Invariant violations are rejected at load time.
//!
//! ```toml
//! [thresholds]
//! non_thinking_max = 30.0
//! simplified_min = 25.0
//! simplified_max = 70.0
//! full_thinking_min = 65.0
//!
//! [batch]
//! max_concurrency = 8
//! task_timeout_ms = 30000
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::routing::ModeThresholds;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReasonerConfig {
    #[serde(default)]
    pub thresholds: ModeThresholds,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Batch execution settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchConfig {
    /// Maximum executor calls in flight at once (must be at least 1)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Per-task execution timeout in milliseconds; unset means no timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_timeout_ms: Option<u64>,
}

fn default_max_concurrency() -> usize {
    8
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            task_timeout_ms: None,
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == 0 {
            return Err(ConfigError::InvalidConfig(
                "batch.max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.task_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "batch.task_timeout_ms must be greater than 0 when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn task_timeout(&self) -> Option<Duration> {
        self.task_timeout_ms.map(Duration::from_millis)
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ReasonerConfig {
    /// Load and validate configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ReasonerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml_content = r#"
[thresholds]
non_thinking_max = 20.0
simplified_min = 15.0
simplified_max = 60.0
full_thinking_min = 55.0

[batch]
max_concurrency = 4
task_timeout_ms = 1500
"#;

        let config = ReasonerConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.thresholds.non_thinking_max, 20.0);
        assert_eq!(config.thresholds.simplified_max, 60.0);
        assert_eq!(config.batch.max_concurrency, 4);
        assert_eq!(
            config.batch.task_timeout(),
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ReasonerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ReasonerConfig::default());
        assert_eq!(config.batch.max_concurrency, 8);
        assert_eq!(config.batch.task_timeout(), None);
    }

    #[test]
    fn test_partial_thresholds_keep_defaults() {
        let config = ReasonerConfig::from_toml_str(
            r#"
[thresholds]
simplified_max = 80.0
"#,
        )
        .unwrap();

        assert_eq!(config.thresholds.non_thinking_max, 30.0);
        assert_eq!(config.thresholds.simplified_max, 80.0);
    }

    #[test]
    fn test_inverted_thresholds_rejected_at_load() {
        let result = ReasonerConfig::from_toml_str(
            r#"
[thresholds]
non_thinking_max = 75.0
simplified_max = 70.0
"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidThresholds(_))));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let result = ReasonerConfig::from_toml_str(
            r#"
[batch]
max_concurrency = 0
"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = ReasonerConfig::from_toml_str(
            r#"
[batch]
task_timeout_ms = 0
"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = ReasonerConfig::from_toml_str("[thresholds\nnon_thinking_max = ");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = ReasonerConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert_eq!(ReasonerConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
