//! Bilingual keyword tables
//!
//! Each table is a process-wide hash set built on first use. Matching is by
//! substring against lowercased text; CJK entries are unaffected by lowercasing.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::features::KeywordCategory;

const PROGRAMMING_KEYWORDS: &[&str] = &[
    "function", "class", "def", "import", "return", "if", "else", "for", "while", "try",
    "except", "print", "input", "list", "dict", "array", "variable", "algorithm", "code",
    "program", "script", "debug", "compile", "execute", "函数", "类", "变量", "算法", "代码",
    "程序", "脚本", "调试", "编译", "执行",
];

const MATH_KEYWORDS: &[&str] = &[
    "equation", "formula", "calculate", "solve", "proof", "theorem", "derivative",
    "integral", "matrix", "vector", "probability", "statistics", "geometry", "方程", "公式",
    "计算", "求解", "证明", "定理", "导数", "积分", "矩阵", "向量", "概率", "统计", "几何",
];

const VERIFICATION_KEYWORDS: &[&str] = &[
    "prove", "verify", "check", "validate", "confirm", "ensure", "step by step", "reasoning",
    "logic", "analysis", "derivation", "证明", "验证", "检查", "确认", "逐步", "推理", "逻辑",
    "分析", "推导",
];

static PROGRAMMING: Lazy<KeywordSet> = Lazy::new(|| KeywordSet::new(PROGRAMMING_KEYWORDS));
static MATH: Lazy<KeywordSet> = Lazy::new(|| KeywordSet::new(MATH_KEYWORDS));
static VERIFICATION: Lazy<KeywordSet> = Lazy::new(|| KeywordSet::new(VERIFICATION_KEYWORDS));

/// An immutable set of keywords for one category
#[derive(Debug)]
pub struct KeywordSet {
    words: HashSet<&'static str>,
}

impl KeywordSet {
    fn new(words: &[&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    /// Shared table for a category
    pub fn for_category(category: KeywordCategory) -> &'static KeywordSet {
        match category {
            KeywordCategory::Programming => &PROGRAMMING,
            KeywordCategory::Math => &MATH,
            KeywordCategory::Verification => &VERIFICATION,
        }
    }

    /// Count distinct keywords occurring in `lowered` (already lowercased text)
    pub fn count_in(&self, lowered: &str) -> usize {
        self.words
            .iter()
            .filter(|word| lowered.contains(*word))
            .count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(KeywordSet::for_category(KeywordCategory::Programming).len(), 34);
        assert_eq!(KeywordSet::for_category(KeywordCategory::Math).len(), 26);
        assert_eq!(KeywordSet::for_category(KeywordCategory::Verification).len(), 20);
    }

    #[test]
    fn test_proof_keyword_shared_between_math_and_verification() {
        assert!(KeywordSet::for_category(KeywordCategory::Math).contains("证明"));
        assert!(KeywordSet::for_category(KeywordCategory::Verification).contains("证明"));
        assert!(!KeywordSet::for_category(KeywordCategory::Programming).contains("证明"));
    }

    #[test]
    fn test_count_is_distinct_keywords() {
        let set = KeywordSet::for_category(KeywordCategory::Math);
        // "matrix" three times still counts once
        assert_eq!(set.count_in("matrix matrix matrix"), 1);
        assert_eq!(set.count_in("solve the equation with a matrix"), 3);
    }

    #[test]
    fn test_count_matches_substrings() {
        let set = KeywordSet::for_category(KeywordCategory::Programming);
        // "different" contains "if"
        assert_eq!(set.count_in("different"), 1);
    }

    #[test]
    fn test_cjk_keywords_match_directly() {
        let set = KeywordSet::for_category(KeywordCategory::Verification);
        assert_eq!(set.count_in("请逐步推理并验证"), 3);
    }

    #[test]
    fn test_multi_word_keyword() {
        let set = KeywordSet::for_category(KeywordCategory::Verification);
        assert_eq!(set.count_in("explain step by step"), 1);
    }
}
