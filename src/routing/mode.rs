//! Reasoning modes

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much step-by-step elaboration to request from the downstream model
///
/// Ordered by depth: `NonThinking < Simplified < FullThinking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningMode {
    /// Answer directly, no visible reasoning
    NonThinking,
    /// Show only the key steps
    Simplified,
    /// Full analysis, derivation and self-check
    FullThinking,
}

impl ReasoningMode {
    pub const ALL: [ReasoningMode; 3] = [
        ReasoningMode::NonThinking,
        ReasoningMode::Simplified,
        ReasoningMode::FullThinking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningMode::NonThinking => "non_thinking",
            ReasoningMode::Simplified => "simplified",
            ReasoningMode::FullThinking => "full_thinking",
        }
    }
}

impl fmt::Display for ReasoningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_ordered_by_depth() {
        assert!(ReasoningMode::NonThinking < ReasoningMode::Simplified);
        assert!(ReasoningMode::Simplified < ReasoningMode::FullThinking);
        assert_eq!(
            ReasoningMode::ALL.iter().max(),
            Some(&ReasoningMode::FullThinking)
        );
    }

    #[test]
    fn test_mode_serialization() {
        for mode in ReasoningMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
            let parsed: ReasoningMode = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, mode);
        }
    }
}
