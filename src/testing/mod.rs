//! Testing utilities and mock implementations
//!
//! Lets the orchestrator be exercised without a real model behind the
//! executor seam.

pub mod mocks;

pub use mocks::*;
