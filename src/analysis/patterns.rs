//! Regex detectors for code and mathematical notation

use once_cell::sync::Lazy;
use regex::Regex;

const CODE_PATTERNS: &[&str] = &[
    r"(?is)```.*?```",         // fenced block
    r"(?i)`[^`]+`",            // inline span
    r"(?i)def\s+\w+\s*\(",     // python def
    r"(?i)function\s+\w+",     // javascript function
    r"(?i)class\s+\w+",        // class declaration
    r"(?i)#include\s*<",       // C/C++ header
    r"(?i)import\s+\w+",       // import statement
];

const MATH_PATTERNS: &[&str] = &[
    r"\$.*?\$",                    // inline formula
    r"\\[a-zA-Z]+",                // escaped command
    r"[∑∏∫∆∇]",                    // operators
    r"\b\d+\s*[+\-*/]\s*\d+",      // arithmetic
    r"[=<>≤≥≠]",                   // comparison
    r"[∈∉⊂⊃∩∪]",                   // set operators
];

static CODE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(CODE_PATTERNS));
static MATH_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(MATH_PATTERNS));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("detector patterns are valid"))
        .collect()
}

/// True if the text looks like it contains source code
pub fn detect_code(text: &str) -> bool {
    CODE_REGEXES.iter().any(|re| re.is_match(text))
}

/// True if the text contains mathematical notation
pub fn detect_math(text: &str) -> bool {
    MATH_REGEXES.iter().any(|re| re.is_match(text))
}
