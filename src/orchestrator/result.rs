//! Classification and result records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::analysis::{TaskFeatures, TaskType};
use crate::error::{ExecutionError, ReasonerResult};
use crate::routing::ReasoningMode;

/// Metadata key holding the error description of a degraded result
pub const METADATA_ERROR: &str = "error";
/// Metadata key holding the machine-readable error kind
pub const METADATA_ERROR_KIND: &str = "error_kind";

/// Outcome of classifying a task, before anything is executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub task_id: String,
    pub task_type: TaskType,
    pub complexity_score: f64,
    pub reasoning_mode: ReasoningMode,
    pub confidence_score: f64,
    pub features: TaskFeatures,
}

/// A task submitted for batch processing
///
/// An entry without text is processed as the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "task")]
    pub text: String,
}

impl BatchTask {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }

    pub fn with_id<I: Into<String>, S: Into<String>>(id: I, text: S) -> Self {
        Self {
            id: Some(id.into()),
            text: text.into(),
        }
    }

    /// Read a JSON array of tasks from a file
    pub fn load_from_file(path: &Path) -> ReasonerResult<Vec<BatchTask>> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Final record for one processed task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningResult {
    pub task_id: String,
    pub reasoning_mode: ReasoningMode,
    pub response: String,
    /// Seconds spent classifying and executing
    pub execution_time: f64,
    pub confidence_score: f64,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl ReasoningResult {
    /// Result of a successful execution
    pub fn completed(classification: &Classification, response: String, execution_time: f64) -> Self {
        let mut metadata = Map::new();
        metadata.insert(
            "features".to_string(),
            serde_json::to_value(&classification.features).unwrap_or(Value::Null),
        );
        metadata.insert(
            "complexity_score".to_string(),
            Value::from(classification.complexity_score),
        );
        metadata.insert(
            "task_type".to_string(),
            Value::from(classification.task_type.as_str()),
        );

        Self {
            task_id: classification.task_id.clone(),
            reasoning_mode: classification.reasoning_mode,
            response,
            execution_time,
            confidence_score: classification.confidence_score,
            metadata,
            created_at: Utc::now(),
        }
    }

    /// Stand-in result for a task whose execution failed
    ///
    /// Always `NonThinking` with zero confidence and zero execution time.
    pub fn degraded<S: Into<String>>(task_id: S, error: &ExecutionError) -> Self {
        let message = error.sanitized_message();

        let mut metadata = Map::new();
        metadata.insert(METADATA_ERROR.to_string(), Value::from(message.clone()));
        metadata.insert(METADATA_ERROR_KIND.to_string(), Value::from(error.kind()));

        Self {
            task_id: task_id.into(),
            reasoning_mode: ReasoningMode::NonThinking,
            response: format!("Error: {message}"),
            execution_time: 0.0,
            confidence_score: 0.0,
            metadata,
            created_at: Utc::now(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.metadata.contains_key(METADATA_ERROR)
    }

    /// Error description of a degraded result
    pub fn error(&self) -> Option<&str> {
        self.metadata.get(METADATA_ERROR).and_then(Value::as_str)
    }

    pub fn error_kind(&self) -> Option<&str> {
        self.metadata.get(METADATA_ERROR_KIND).and_then(Value::as_str)
    }
}
