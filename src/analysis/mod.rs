//! Task Feature Extraction
//!
//! Scans raw task text for code and math notation and counts bilingual keyword
//! hits, producing the [`TaskFeatures`] record that drives mode selection.

pub mod extractor;
pub mod features;
pub mod keywords;
pub mod patterns;

pub use extractor::TaskAnalyzer;
pub use features::{KeywordCategory, KeywordCounts, TaskFeatures, TaskType};
pub use keywords::KeywordSet;
pub use patterns::{detect_code, detect_math};
