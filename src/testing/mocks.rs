//! Mock executor for testing
//!
//! Behaviour is keyed on markers in the task text so a single executor can
//! serve a whole batch where some tasks fail, stall or panic.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::analysis::TaskFeatures;
use crate::error::ExecutionError;
use crate::execution::ReasoningExecutor;
use crate::routing::ReasoningMode;

/// One recorded call to [`MockExecutor::execute`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorCall {
    pub text: String,
    pub mode: ReasoningMode,
    pub features: TaskFeatures,
}

/// Mock reasoning executor
#[derive(Debug, Clone)]
pub struct MockExecutor {
    pub response: String,
    pub should_fail: bool,
    pub fail_markers: Vec<String>,
    pub panic_markers: Vec<String>,
    pub delay: Option<Duration>,
    pub delay_markers: Vec<(String, Duration)>,
    pub calls: Arc<Mutex<Vec<ExecutorCall>>>,
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self {
            response: "Mock response".to_string(),
            should_fail: false,
            fail_markers: Vec::new(),
            panic_markers: Vec::new(),
            delay: None,
            delay_markers: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor that fails every call
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    /// Fail calls whose text contains `marker`
    pub fn failing_on(mut self, marker: impl Into<String>) -> Self {
        self.fail_markers.push(marker.into());
        self
    }

    /// Panic on calls whose text contains `marker`
    pub fn panicking_on(mut self, marker: impl Into<String>) -> Self {
        self.panic_markers.push(marker.into());
        self
    }

    /// Sleep before answering every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sleep before answering calls whose text contains `marker`
    pub fn delaying_on(mut self, marker: impl Into<String>, delay: Duration) -> Self {
        self.delay_markers.push((marker.into(), delay));
        self
    }

    pub async fn get_calls(&self) -> Vec<ExecutorCall> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    pub async fn clear_history(&self) {
        self.calls.lock().await.clear();
    }

    fn delay_for(&self, text: &str) -> Option<Duration> {
        self.delay_markers
            .iter()
            .find(|(marker, _)| text.contains(marker.as_str()))
            .map(|(_, delay)| *delay)
            .or(self.delay)
    }
}

#[async_trait]
impl ReasoningExecutor for MockExecutor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn execute(
        &self,
        text: &str,
        mode: ReasoningMode,
        features: &TaskFeatures,
    ) -> Result<String, ExecutionError> {
        self.calls.lock().await.push(ExecutorCall {
            text: text.to_string(),
            mode,
            features: features.clone(),
        });

        if let Some(delay) = self.delay_for(text) {
            tokio::time::sleep(delay).await;
        }

        if self.panic_markers.iter().any(|m| text.contains(m.as_str())) {
            panic!("mock executor panic");
        }

        if self.should_fail || self.fail_markers.iter().any(|m| text.contains(m.as_str())) {
            return Err(ExecutionError::failed("Mock executor failure"));
        }

        Ok(format!("{} [{mode}]", self.response))
    }
}
