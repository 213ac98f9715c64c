//! Bounded complexity score
//!
//! Three additive components, each capped on its own, summed and capped again:
//!
//! | Component | Rule                                          | Cap |
//! |-----------|-----------------------------------------------|-----|
//! | length    | `chars / 50`                                  | 50  |
//! | keywords  | `2·programming + 3·math + 4·verification`     | 30  |
//! | special   | prove +15, algorithm +10, optimize +10        | 20  |
//!
//! The total is capped at 100.

use serde::{Deserialize, Serialize};

use crate::analysis::KeywordCounts;

pub const MAX_COMPLEXITY: f64 = 100.0;
pub const LENGTH_CAP: f64 = 50.0;
pub const KEYWORD_CAP: f64 = 30.0;
pub const SPECIAL_CAP: f64 = 20.0;

const CHARS_PER_POINT: f64 = 50.0;

/// Special markers: (CJK form, English form, weight)
const SPECIAL_MARKERS: &[(&str, &str, f64)] = &[
    ("证明", "prove", 15.0),
    ("算法", "algorithm", 10.0),
    ("优化", "optimize", 10.0),
];

/// Per-component contributions to a complexity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub length: f64,
    pub keywords: f64,
    pub special: f64,
    pub total: f64,
}

/// Compute the complexity score of `text` given its keyword counts
pub fn complexity_score(text: &str, counts: &KeywordCounts) -> f64 {
    score_breakdown(text, counts).total
}

/// Compute the complexity score with its component breakdown
pub fn score_breakdown(text: &str, counts: &KeywordCounts) -> ScoreBreakdown {
    let lowered = text.to_lowercase();

    let length = length_component(text);
    let keywords = keyword_component(counts);
    let special = special_component(text, &lowered);
    let total = (length + keywords + special).clamp(0.0, MAX_COMPLEXITY);

    ScoreBreakdown {
        length,
        keywords,
        special,
        total,
    }
}

fn length_component(text: &str) -> f64 {
    (text.chars().count() as f64 / CHARS_PER_POINT).min(LENGTH_CAP)
}

fn keyword_component(counts: &KeywordCounts) -> f64 {
    let weighted = 2 * counts.programming + 3 * counts.math + 4 * counts.verification;
    (weighted as f64).min(KEYWORD_CAP)
}

fn special_component(text: &str, lowered: &str) -> f64 {
    SPECIAL_MARKERS
        .iter()
        .filter(|(cjk, english, _)| text.contains(cjk) || lowered.contains(english))
        .map(|(_, _, weight)| weight)
        .sum::<f64>()
        .min(SPECIAL_CAP)
}
