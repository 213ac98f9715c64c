//! Complexity scoring and task type determination

pub mod complexity;
pub mod task_type;

pub use complexity::{complexity_score, score_breakdown, ScoreBreakdown, MAX_COMPLEXITY};
pub use task_type::determine_task_type;
