//! Feature record produced by task analysis

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Coarse category of a task, used to pick type-specific threshold rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Programming,
    MathReasoning,
    #[serde(rename = "simple_qa")]
    SimpleQA,
    ComplexReasoning,
    AlgorithmDesign,
    Unknown,
}

impl TaskType {
    pub const ALL: [TaskType; 6] = [
        TaskType::Programming,
        TaskType::MathReasoning,
        TaskType::SimpleQA,
        TaskType::ComplexReasoning,
        TaskType::AlgorithmDesign,
        TaskType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Programming => "programming",
            TaskType::MathReasoning => "math_reasoning",
            TaskType::SimpleQA => "simple_qa",
            TaskType::ComplexReasoning => "complex_reasoning",
            TaskType::AlgorithmDesign => "algorithm_design",
            TaskType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword families counted during analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Programming,
    Math,
    Verification,
}

/// Number of distinct keywords found per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCounts {
    pub programming: usize,
    pub math: usize,
    pub verification: usize,
}

impl KeywordCounts {
    pub fn new(programming: usize, math: usize, verification: usize) -> Self {
        Self {
            programming,
            math,
            verification,
        }
    }

    pub fn get(&self, category: KeywordCategory) -> usize {
        match category {
            KeywordCategory::Programming => self.programming,
            KeywordCategory::Math => self.math,
            KeywordCategory::Verification => self.verification,
        }
    }

    pub fn total(&self) -> usize {
        self.programming + self.math + self.verification
    }

    /// Category → count view, in category order
    pub fn to_map(&self) -> BTreeMap<KeywordCategory, usize> {
        [
            KeywordCategory::Programming,
            KeywordCategory::Math,
            KeywordCategory::Verification,
        ]
        .into_iter()
        .map(|category| (category, self.get(category)))
        .collect()
    }
}

/// Everything the mode selector needs to know about a task
///
/// Produced once per classification and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFeatures {
    pub contains_code: bool,
    pub contains_math: bool,
    /// Always within `[0, 100]`
    pub complexity_score: f64,
    pub requires_verification: bool,
    pub task_type: TaskType,
    pub keyword_counts: KeywordCounts,
}

impl TaskFeatures {
    /// Synthetic features for a given type and score, mostly useful when
    /// exercising the mode selector directly
    pub fn synthetic(task_type: TaskType, complexity_score: f64) -> Self {
        Self {
            contains_code: false,
            contains_math: false,
            complexity_score: complexity_score.clamp(0.0, 100.0),
            requires_verification: false,
            task_type,
            keyword_counts: KeywordCounts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_serialization() {
        assert_eq!(
            serde_json::to_string(&TaskType::SimpleQA).unwrap(),
            "\"simple_qa\""
        );
        assert_eq!(
            serde_json::to_string(&TaskType::MathReasoning).unwrap(),
            "\"math_reasoning\""
        );
        for task_type in TaskType::ALL {
            let json = serde_json::to_string(&task_type).unwrap();
            assert_eq!(json, format!("\"{}\"", task_type.as_str()));
        }
    }

    #[test]
    fn test_keyword_counts_views() {
        let counts = KeywordCounts::new(3, 1, 2);

        assert_eq!(counts.total(), 6);
        assert_eq!(counts.get(KeywordCategory::Math), 1);

        let map = counts.to_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map[&KeywordCategory::Programming], 3);
        assert_eq!(map[&KeywordCategory::Verification], 2);
    }

    #[test]
    fn test_synthetic_features_clamp_score() {
        assert_eq!(
            TaskFeatures::synthetic(TaskType::Unknown, 250.0).complexity_score,
            100.0
        );
        assert_eq!(
            TaskFeatures::synthetic(TaskType::Unknown, -3.0).complexity_score,
            0.0
        );
    }
}
