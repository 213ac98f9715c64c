//! Reasoning executor abstraction
//!
//! The orchestrator never talks to a model directly. It hands the task text, the
//! selected mode and the extracted features to an injected executor and takes
//! back response text.

use async_trait::async_trait;

use crate::analysis::TaskFeatures;
use crate::error::ExecutionError;
use crate::routing::ReasoningMode;

/// Executes a task in a given reasoning mode
///
/// Implementations wrap whatever actually answers the task: an LLM client, a
/// simulator, or a test double. Failures are reported as [`ExecutionError`] and
/// are turned into degraded results by the orchestrator.
#[async_trait]
pub trait ReasoningExecutor: Send + Sync {
    /// Executor name for logs
    fn name(&self) -> &str;

    /// Produce a response for `text` in `mode`
    async fn execute(
        &self,
        text: &str,
        mode: ReasoningMode,
        features: &TaskFeatures,
    ) -> Result<String, ExecutionError>;
}
