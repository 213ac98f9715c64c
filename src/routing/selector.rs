//! Mode selection and confidence scoring
//!
//! Task-type rules come first; everything else falls through to the general
//! complexity thresholds.
//!
//! ```text
//! Programming    complexity <= 40 → NonThinking, else Simplified
//! MathReasoning  complexity >= 50 → FullThinking, else Simplified
//! other          <= non_thinking_max → NonThinking
//!                <= simplified_max   → Simplified
//!                else                → FullThinking
//! ```

use tracing::debug;

use super::mode::ReasoningMode;
use super::thresholds::{ModeThresholds, ThresholdOverrides};
use crate::analysis::{TaskFeatures, TaskType};
use crate::config::ConfigError;

/// Programming tasks at or below this complexity are answered directly
pub const PROGRAMMING_NON_THINKING_MAX: f64 = 40.0;
/// Math reasoning tasks at or above this complexity get full reasoning
pub const MATH_FULL_THINKING_MIN: f64 = 50.0;

pub const BASE_CONFIDENCE: f64 = 0.7;
pub const MIN_CONFIDENCE: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 1.0;

const MATCHED_TYPE_BONUS: f64 = 0.2;
const SIMPLE_QA_BONUS: f64 = 0.15;
const MISMATCH_PENALTY: f64 = 0.1;
const NON_THINKING_PENALTY_ABOVE: f64 = 40.0;
const FULL_THINKING_PENALTY_BELOW: f64 = 30.0;

/// Maps task features to a reasoning mode
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModeSelector {
    thresholds: ModeThresholds,
}

impl ModeSelector {
    /// Create a selector, rejecting thresholds that violate ordering
    pub fn new(thresholds: ModeThresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &ModeThresholds {
        &self.thresholds
    }

    /// Replace the thresholds; on error the current ones stay in force
    pub fn set_thresholds(&mut self, thresholds: ModeThresholds) -> Result<(), ConfigError> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(())
    }

    /// Merge a partial update into the current thresholds
    pub fn update_thresholds(&mut self, overrides: &ThresholdOverrides) -> Result<(), ConfigError> {
        self.set_thresholds(self.thresholds.merged(overrides))
    }

    pub fn select(&self, features: &TaskFeatures) -> ReasoningMode {
        let complexity = features.complexity_score;

        let mode = match features.task_type {
            TaskType::Programming => {
                if complexity <= PROGRAMMING_NON_THINKING_MAX {
                    ReasoningMode::NonThinking
                } else {
                    ReasoningMode::Simplified
                }
            }
            TaskType::MathReasoning => {
                if complexity >= MATH_FULL_THINKING_MIN {
                    ReasoningMode::FullThinking
                } else {
                    ReasoningMode::Simplified
                }
            }
            _ => self.select_by_complexity(complexity),
        };

        debug!(
            task_type = %features.task_type,
            complexity,
            mode = %mode,
            "Selected reasoning mode"
        );
        mode
    }

    fn select_by_complexity(&self, complexity: f64) -> ReasoningMode {
        if complexity <= self.thresholds.non_thinking_max {
            ReasoningMode::NonThinking
        } else if complexity <= self.thresholds.simplified_max {
            ReasoningMode::Simplified
        } else {
            ReasoningMode::FullThinking
        }
    }

    /// Heuristic confidence in `mode` for these features, within `[0.1, 1.0]`
    ///
    /// Every adjustment is checked independently.
    pub fn confidence(&self, features: &TaskFeatures, mode: ReasoningMode) -> f64 {
        let complexity = features.complexity_score;
        let mut confidence = BASE_CONFIDENCE;

        if features.task_type == TaskType::Programming && mode == ReasoningMode::NonThinking {
            confidence += MATCHED_TYPE_BONUS;
        }
        if features.task_type == TaskType::MathReasoning && mode == ReasoningMode::FullThinking {
            confidence += MATCHED_TYPE_BONUS;
        }
        if features.task_type == TaskType::SimpleQA && mode == ReasoningMode::NonThinking {
            confidence += SIMPLE_QA_BONUS;
        }

        if mode == ReasoningMode::NonThinking && complexity > NON_THINKING_PENALTY_ABOVE {
            confidence -= MISMATCH_PENALTY;
        }
        if mode == ReasoningMode::FullThinking && complexity < FULL_THINKING_PENALTY_BELOW {
            confidence -= MISMATCH_PENALTY;
        }

        confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }

    /// Select a mode and score it in one call
    pub fn select_with_confidence(&self, features: &TaskFeatures) -> (ReasoningMode, f64) {
        let mode = self.select(features);
        (mode, self.confidence(features, mode))
    }
}
