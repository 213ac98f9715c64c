//! Error types for the adaptive reasoning router
//!
//! Classification itself never fails: any text, including the empty string, is
//! valid input. Errors come from two places only: the injected executor
//! ([`ExecutionError`], always recovered per task) and configuration
//! ([`crate::config::ConfigError`], surfaced eagerly).

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum length of an error description stored in result metadata
pub const MAX_ERROR_MESSAGE_LEN: usize = 500;

const TRUNCATE_SUFFIX: &str = "...[truncated]";

static SECRET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(password|token|key|secret)[=:]\s*\S+").expect("valid secret pattern")
});

/// Failure of the injected reasoning executor for a single task
///
/// The orchestrator converts every variant into a degraded result; none of them
/// escape a batch.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecutionError {
    #[error("Execution failed: {message}")]
    Failed { message: String },

    #[error("Execution timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Execution cancelled")]
    Cancelled,

    #[error("Executor panicked: {message}")]
    Panicked { message: String },
}

impl ExecutionError {
    /// Create a generic execution failure
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }

    /// Stable machine-readable label recorded as `error_kind` in result metadata
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutionError::Failed { .. } | ExecutionError::Panicked { .. } => "execution_failed",
            ExecutionError::Timeout { .. } => "timeout",
            ExecutionError::Cancelled => "cancelled",
        }
    }

    /// Error description safe to store in result metadata
    pub fn sanitized_message(&self) -> String {
        sanitize_error_message(&self.to_string())
    }
}

/// Crate-level error type
#[derive(Debug, Error)]
pub enum ReasonerError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reasoner operations
pub type ReasonerResult<T> = Result<T, ReasonerError>;

/// Redact credentials and cap the length of an error description
///
/// Executors wrap remote APIs, so their messages may echo keys or tokens back.
pub fn sanitize_error_message(message: &str) -> String {
    let mut sanitized = SECRET_PATTERN
        .replace_all(message, "${1}=***")
        .into_owned();

    if sanitized.len() > MAX_ERROR_MESSAGE_LEN {
        let mut cut = MAX_ERROR_MESSAGE_LEN - TRUNCATE_SUFFIX.len();
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str(TRUNCATE_SUFFIX);
    }

    sanitized
}
