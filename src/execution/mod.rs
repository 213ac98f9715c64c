//! Reasoning execution layer
//!
//! Defines the injected executor seam, the mode-specific prompt builders, and a
//! deterministic simulated executor for offline use.

pub mod executor;
pub mod prompts;
pub mod simulated;

pub use executor::ReasoningExecutor;
pub use prompts::build_prompt;
pub use simulated::SimulatedExecutor;
