//! Deterministic offline executor

use async_trait::async_trait;
use tracing::debug;

use super::executor::ReasoningExecutor;
use super::prompts::build_prompt;
use crate::analysis::TaskFeatures;
use crate::error::ExecutionError;
use crate::routing::ReasoningMode;

/// Executor that builds the real prompt but answers with a canned response
///
/// Used by the CLI and in tests where no model is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedExecutor;

impl SimulatedExecutor {
    pub fn new() -> Self {
        Self
    }

    fn respond(mode: ReasoningMode, features: &TaskFeatures) -> String {
        let task_type = features.task_type;
        let complexity = features.complexity_score;

        match mode {
            ReasoningMode::NonThinking => format!(
                "Direct answer for {task_type} task (complexity {complexity:.1}): [simulated answer]"
            ),
            ReasoningMode::Simplified => format!(
                "Brief reasoning for {task_type} task (complexity {complexity:.1}):\n\
                 Key steps: 1) analyze 2) compute 3) check\n\
                 Answer: [simulated answer]"
            ),
            ReasoningMode::FullThinking => format!(
                "Full reasoning for {task_type} task (complexity {complexity:.1}):\n\
                 1. Analysis: ...\n\
                 2. Approach: ...\n\
                 3. Steps: ...\n\
                 4. Verification: ...\n\
                 5. Final answer: [simulated answer]"
            ),
        }
    }
}

#[async_trait]
impl ReasoningExecutor for SimulatedExecutor {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn execute(
        &self,
        text: &str,
        mode: ReasoningMode,
        features: &TaskFeatures,
    ) -> Result<String, ExecutionError> {
        let prompt = build_prompt(mode, text, features);
        debug!(mode = %mode, prompt_chars = prompt.chars().count(), "Built simulated prompt");
        Ok(Self::respond(mode, features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TaskType;

    #[tokio::test]
    async fn test_simulated_response_reflects_mode() {
        let executor = SimulatedExecutor::new();
        let features = TaskFeatures::synthetic(TaskType::Programming, 12.34);

        let direct = executor
            .execute("write a function", ReasoningMode::NonThinking, &features)
            .await
            .unwrap();
        assert!(direct.starts_with("Direct answer for programming task"));
        assert!(direct.contains("complexity 12.3"));

        let full = executor
            .execute("write a function", ReasoningMode::FullThinking, &features)
            .await
            .unwrap();
        assert!(full.contains("5. Final answer"));
    }

    #[tokio::test]
    async fn test_simulated_executor_never_fails() {
        let executor = SimulatedExecutor::new();
        let features = TaskFeatures::synthetic(TaskType::Unknown, 0.0);
        for mode in ReasoningMode::ALL {
            assert!(executor.execute("", mode, &features).await.is_ok());
        }
    }
}
