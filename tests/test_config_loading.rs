//! Configuration loading and validation tests

use adaptive_reasoning::config::{ConfigError, ReasonerConfig};
use adaptive_reasoning::routing::ModeThresholds;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_config_loads_successfully_from_valid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[thresholds]
non_thinking_max = 25.0
simplified_min = 20.0
simplified_max = 75.0
full_thinking_min = 70.0

[batch]
max_concurrency = 16
task_timeout_ms = 30000
"#
    )
    .unwrap();

    let config = ReasonerConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.thresholds.non_thinking_max, 25.0);
    assert_eq!(config.thresholds.simplified_max, 75.0);
    assert_eq!(config.batch.max_concurrency, 16);
    assert_eq!(config.batch.task_timeout(), Some(Duration::from_secs(30)));
}

#[test]
fn test_empty_file_uses_defaults() {
    let temp_file = NamedTempFile::new().unwrap();

    let config = ReasonerConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config, ReasonerConfig::default());
    assert_eq!(config.thresholds, ModeThresholds::default());
    assert_eq!(config.batch.task_timeout(), None);
}

#[test]
fn test_partial_thresholds_fall_back_per_field() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[thresholds]
simplified_max = 80.0
"#
    )
    .unwrap();

    let config = ReasonerConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.thresholds.non_thinking_max, 30.0);
    assert_eq!(config.thresholds.simplified_max, 80.0);
}

#[test]
fn test_inverted_thresholds_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[thresholds]
non_thinking_max = 70.0
simplified_max = 30.0
"#
    )
    .unwrap();

    let result = ReasonerConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::InvalidThresholds(_))));
}

#[test]
fn test_zero_concurrency_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[batch]\nmax_concurrency = 0").unwrap();

    let result = ReasonerConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
fn test_malformed_toml_reports_parse_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[thresholds\nnon_thinking_max = ").unwrap();

    let result = ReasonerConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ReasonerConfig::load_from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = ReasonerConfig::default();
    let rendered = toml::to_string_pretty(&config).unwrap();
    assert_eq!(ReasonerConfig::from_toml_str(&rendered).unwrap(), config);
}
