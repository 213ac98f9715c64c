//! Test helpers and utilities for integration tests

use adaptive_reasoning::config::{BatchConfig, ReasonerConfig};
use adaptive_reasoning::orchestrator::{AdaptiveReasoner, BatchTask, SequentialTaskIds};
use adaptive_reasoning::testing::mocks::MockExecutor;
use std::sync::Arc;

/// Marker that makes [`MockExecutor`] fail a task
#[allow(dead_code)]
pub const FAIL_MARKER: &str = "#fail";

/// Marker that makes [`MockExecutor`] stall a task
#[allow(dead_code)]
pub const SLOW_MARKER: &str = "#slow";

/// Reasoner over a mock executor with deterministic ids
#[allow(dead_code)]
pub fn mock_reasoner(executor: MockExecutor) -> AdaptiveReasoner {
    AdaptiveReasoner::new(Arc::new(executor))
        .with_id_generator(Arc::new(SequentialTaskIds::new("test")))
}

/// Reasoner with custom batch settings
#[allow(dead_code)]
pub fn mock_reasoner_with_batch(executor: MockExecutor, batch: BatchConfig) -> AdaptiveReasoner {
    let config = ReasonerConfig {
        batch,
        ..ReasonerConfig::default()
    };
    AdaptiveReasoner::from_config(&config, Arc::new(executor))
        .expect("test config is valid")
        .with_id_generator(Arc::new(SequentialTaskIds::new("test")))
}

/// Five varied tasks with explicit ids `t1`..`t5`
#[allow(dead_code)]
pub fn sample_batch() -> Vec<BatchTask> {
    vec![
        BatchTask::with_id("t1", "什么是人工智能？"),
        BatchTask::with_id("t2", "def fib(n): return n if n < 2 else fib(n-1) + fib(n-2)"),
        BatchTask::with_id("t3", "Prove the theorem and verify each step"),
        BatchTask::with_id("t4", "Solve the equation x^2 + 2x + 1 = 0"),
        BatchTask::with_id("t5", "Explain the history of the printing press"),
    ]
}
