//! Orchestration of classification, routing and execution
//!
//! [`AdaptiveReasoner`] owns the pipeline. Results come back as
//! [`ReasoningResult`] records and outcomes accumulate in [`ReasoningStats`].

pub mod batch;
pub mod ids;
pub mod reasoner;
pub mod result;
pub mod stats;

pub use batch::BatchRun;
pub use ids::{SequentialTaskIds, TaskIdGenerator, UuidTaskIds};
pub use reasoner::AdaptiveReasoner;
pub use result::{BatchTask, Classification, ReasoningResult};
pub use stats::{ReasoningStats, StatsReport, UsageShare};
