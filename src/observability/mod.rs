//! Observability: structured logging and span helpers

pub mod logging;

pub use logging::{
    init_default_logging, init_logging, init_logging_with_level, parse_level, LogFormat,
};

// Span macros for structured logging
pub use logging::{batch_span, task_span};
