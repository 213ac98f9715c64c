//! Task type determination from keyword counts
//!
//! Rules are evaluated in order and the first match wins.

use crate::analysis::{KeywordCounts, TaskType};

/// More than this many programming keywords marks algorithm design work
pub const ALGORITHM_DESIGN_MIN_KEYWORDS: usize = 3;

pub fn determine_task_type(counts: &KeywordCounts, contains_code: bool) -> TaskType {
    let KeywordCounts {
        programming,
        math,
        verification,
    } = *counts;

    if contains_code || programming > math + verification {
        if programming > ALGORITHM_DESIGN_MIN_KEYWORDS {
            return TaskType::AlgorithmDesign;
        }
        return TaskType::Programming;
    }

    if math > 0 && verification > 0 {
        return TaskType::MathReasoning;
    }

    if verification > 2 || math > 3 {
        return TaskType::ComplexReasoning;
    }

    if counts.total() <= 2 {
        return TaskType::SimpleQA;
    }

    TaskType::Unknown
}
