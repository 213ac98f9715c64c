//! Task feature extraction
//!
//! Turns raw task text into a [`TaskFeatures`] record. Never fails: empty or
//! garbage text simply yields a low-complexity record.

use tracing::debug;

use super::features::{KeywordCategory, KeywordCounts, TaskFeatures};
use super::keywords::KeywordSet;
use super::patterns::{detect_code, detect_math};
use crate::scoring::{determine_task_type, score_breakdown};

const STEP_MARKER_CJK: &str = "步骤";
const STEP_MARKER: &str = "step";

/// Stateless analyzer; all tables are process-wide statics
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskAnalyzer;

impl TaskAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Extract features from task text
    pub fn analyze(&self, text: &str) -> TaskFeatures {
        let lowered = text.to_lowercase();

        let contains_code = detect_code(text);
        let contains_math = detect_math(text);
        let keyword_counts = count_keywords(&lowered);

        let breakdown = score_breakdown(text, &keyword_counts);

        let requires_verification = keyword_counts.verification > 0
            || keyword_counts.math > keyword_counts.programming
            || text.contains(STEP_MARKER_CJK)
            || lowered.contains(STEP_MARKER);

        let task_type = determine_task_type(&keyword_counts, contains_code);

        debug!(
            contains_code,
            contains_math,
            programming = keyword_counts.programming,
            math = keyword_counts.math,
            verification = keyword_counts.verification,
            length_score = breakdown.length,
            keyword_score = breakdown.keywords,
            special_score = breakdown.special,
            "Extracted task features"
        );

        TaskFeatures {
            contains_code,
            contains_math,
            complexity_score: breakdown.total,
            requires_verification,
            task_type,
            keyword_counts,
        }
    }
}

fn count_keywords(lowered: &str) -> KeywordCounts {
    KeywordCounts {
        programming: KeywordSet::for_category(KeywordCategory::Programming).count_in(lowered),
        math: KeywordSet::for_category(KeywordCategory::Math).count_in(lowered),
        verification: KeywordSet::for_category(KeywordCategory::Verification).count_in(lowered),
    }
}
