//! Reasoning Mode Selection
//!
//! Maps a task's type and complexity score onto one of three reasoning modes
//! and attaches a heuristic confidence value.
//!
//! ## Modes (mode.rs)
//!
//! The closed, depth-ordered set of modes a downstream call can run in.
//!
//! ## Thresholds (thresholds.rs)
//!
//! Runtime-adjustable complexity boundaries for the general rule, validated on
//! every change.
//!
//! ## Selector (selector.rs)
//!
//! Type-specific rules, the general threshold rule, and confidence scoring.

pub mod mode;
pub mod selector;
pub mod thresholds;

pub use mode::ReasoningMode;
pub use selector::ModeSelector;
pub use thresholds::{ModeThresholds, ThresholdOverrides};
