//! Adaptive reasoning router
//!
//! Estimates how much deliberation a task needs from its text alone and routes
//! it to one of three reasoning modes before handing it to an executor.
//!
//! # Overview
//!
//! - [`analysis`]: feature extraction (code and math detection, keyword counts)
//! - [`scoring`]: bounded complexity score and task-type classification
//! - [`routing`]: threshold rules mapping features to a [`ReasoningMode`]
//! - [`execution`]: the [`ReasoningExecutor`] seam and prompt builders
//! - [`orchestrator`]: the [`AdaptiveReasoner`] pipeline, batches and statistics
//!
//! # Quick Start
//!
//! ```rust
//! use adaptive_reasoning::{AdaptiveReasoner, ReasoningMode, SimulatedExecutor, TaskType};
//! use std::sync::Arc;
//!
//! let reasoner = AdaptiveReasoner::new(Arc::new(SimulatedExecutor::new()));
//!
//! let classification = reasoner.classify_and_select("什么是人工智能？", None);
//! assert_eq!(classification.task_type, TaskType::SimpleQA);
//! assert_eq!(classification.reasoning_mode, ReasoningMode::NonThinking);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod execution;
pub mod observability;
pub mod orchestrator;
pub mod routing;
pub mod scoring;
pub mod testing;

pub use analysis::{TaskAnalyzer, TaskFeatures, TaskType};
pub use config::{BatchConfig, ConfigError, ReasonerConfig};
pub use error::{ExecutionError, ReasonerError, ReasonerResult};
pub use execution::{ReasoningExecutor, SimulatedExecutor};
pub use orchestrator::{
    AdaptiveReasoner, BatchRun, BatchTask, Classification, ReasoningResult, ReasoningStats,
    StatsReport,
};
pub use routing::{ModeSelector, ModeThresholds, ReasoningMode, ThresholdOverrides};
