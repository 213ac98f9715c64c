//! Complexity thresholds for the general mode-selection rule

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ConfigError;
use crate::scoring::MAX_COMPLEXITY;

/// Complexity boundaries between reasoning modes
///
/// Selection only reads `non_thinking_max` and `simplified_max`; the two
/// `*_min` values describe the intended overlap bands and are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeThresholds {
    #[serde(default = "default_non_thinking_max")]
    pub non_thinking_max: f64,
    #[serde(default = "default_simplified_min")]
    pub simplified_min: f64,
    #[serde(default = "default_simplified_max")]
    pub simplified_max: f64,
    #[serde(default = "default_full_thinking_min")]
    pub full_thinking_min: f64,
}

fn default_non_thinking_max() -> f64 {
    30.0
}

fn default_simplified_min() -> f64 {
    25.0
}

fn default_simplified_max() -> f64 {
    70.0
}

fn default_full_thinking_min() -> f64 {
    65.0
}

impl Default for ModeThresholds {
    fn default() -> Self {
        Self {
            non_thinking_max: default_non_thinking_max(),
            simplified_min: default_simplified_min(),
            simplified_max: default_simplified_max(),
            full_thinking_min: default_full_thinking_min(),
        }
    }
}

impl ModeThresholds {
    /// Check ordering and range invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("non_thinking_max", self.non_thinking_max),
            ("simplified_min", self.simplified_min),
            ("simplified_max", self.simplified_max),
            ("full_thinking_min", self.full_thinking_min),
        ];
        for (name, value) in named {
            if !value.is_finite() || !(0.0..=MAX_COMPLEXITY).contains(&value) {
                return Err(ConfigError::InvalidThresholds(format!(
                    "{name} = {value} must be a finite value within [0, {MAX_COMPLEXITY}]"
                )));
            }
        }

        if self.non_thinking_max >= self.simplified_max {
            return Err(ConfigError::InvalidThresholds(format!(
                "non_thinking_max ({}) must be lower than simplified_max ({})",
                self.non_thinking_max, self.simplified_max
            )));
        }

        if self.simplified_min > self.full_thinking_min {
            warn!(
                simplified_min = self.simplified_min,
                full_thinking_min = self.full_thinking_min,
                "simplified_min exceeds full_thinking_min; selection ignores both"
            );
        }

        Ok(())
    }

    /// Apply a partial override, returning the merged thresholds
    ///
    /// The result is not validated; callers validate before installing it.
    pub fn merged(&self, overrides: &ThresholdOverrides) -> Self {
        Self {
            non_thinking_max: overrides.non_thinking_max.unwrap_or(self.non_thinking_max),
            simplified_min: overrides.simplified_min.unwrap_or(self.simplified_min),
            simplified_max: overrides.simplified_max.unwrap_or(self.simplified_max),
            full_thinking_min: overrides
                .full_thinking_min
                .unwrap_or(self.full_thinking_min),
        }
    }
}

/// Partial threshold update; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    pub non_thinking_max: Option<f64>,
    pub simplified_min: Option<f64>,
    pub simplified_max: Option<f64>,
    pub full_thinking_min: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let thresholds = ModeThresholds::default();
        assert!(thresholds.validate().is_ok());
        assert_eq!(thresholds.non_thinking_max, 30.0);
        assert_eq!(thresholds.simplified_max, 70.0);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let thresholds = ModeThresholds {
            non_thinking_max: 70.0,
            simplified_max: 30.0,
            ..Default::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThresholds(_)));
        assert!(err.to_string().contains("non_thinking_max"));
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let thresholds = ModeThresholds {
            non_thinking_max: 50.0,
            simplified_max: 50.0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let thresholds = ModeThresholds {
            simplified_max: 120.0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());

        let thresholds = ModeThresholds {
            non_thinking_max: f64::NAN,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_advisory_overlap_is_not_enforced() {
        let thresholds = ModeThresholds {
            simplified_min: 80.0,
            full_thinking_min: 10.0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_merge_partial_overrides() {
        let merged = ModeThresholds::default().merged(&ThresholdOverrides {
            simplified_max: Some(60.0),
            ..Default::default()
        });

        assert_eq!(merged.non_thinking_max, 30.0);
        assert_eq!(merged.simplified_max, 60.0);
        assert_eq!(merged.simplified_min, 25.0);
    }
}
