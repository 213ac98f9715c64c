//! Mode-specific prompt builders

use crate::analysis::TaskFeatures;
use crate::routing::ReasoningMode;

/// Build the downstream prompt for `text` in `mode`
pub fn build_prompt(mode: ReasoningMode, text: &str, features: &TaskFeatures) -> String {
    match mode {
        ReasoningMode::NonThinking => non_thinking_prompt(text),
        ReasoningMode::Simplified => simplified_prompt(text),
        ReasoningMode::FullThinking => full_thinking_prompt(text, features),
    }
}

fn non_thinking_prompt(text: &str) -> String {
    format!(
        "Answer the following directly. Do not show your reasoning.\n\n{text}\n\nAnswer:"
    )
}

fn simplified_prompt(text: &str) -> String {
    format!(
        "Answer the following, showing only the key steps.\n\n{text}\n\n\
         Respond in this format:\n\
         Key steps: [2-3 key steps]\n\
         Answer: [final answer]"
    )
}

fn full_thinking_prompt(text: &str, features: &TaskFeatures) -> String {
    let check_line = if features.requires_verification {
        "4. Verification: [check every step and the final result]"
    } else {
        "4. Check: [sanity-check the result]"
    };

    format!(
        "Answer the following in full detail, showing your complete reasoning.\n\n{text}\n\n\
         Respond in this format:\n\
         1. Analysis: [requirements and constraints]\n\
         2. Approach: [how to solve it]\n\
         3. Steps: [the solution, step by step]\n\
         {check_line}\n\
         5. Final answer: [the answer]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TaskType;

    #[test]
    fn test_every_mode_embeds_task_text() {
        let features = TaskFeatures::synthetic(TaskType::Unknown, 10.0);
        for mode in ReasoningMode::ALL {
            let prompt = build_prompt(mode, "What is a monad?", &features);
            assert!(prompt.contains("What is a monad?"), "{mode} prompt lost the task");
        }
    }

    #[test]
    fn test_prompts_differ_by_depth() {
        let features = TaskFeatures::synthetic(TaskType::Unknown, 10.0);
        let direct = build_prompt(ReasoningMode::NonThinking, "q", &features);
        let brief = build_prompt(ReasoningMode::Simplified, "q", &features);
        let full = build_prompt(ReasoningMode::FullThinking, "q", &features);

        assert!(direct.contains("Do not show your reasoning"));
        assert!(brief.contains("Key steps"));
        assert!(full.contains("5. Final answer"));
    }

    #[test]
    fn test_full_prompt_asks_for_verification_when_required() {
        let mut features = TaskFeatures::synthetic(TaskType::MathReasoning, 80.0);
        features.requires_verification = true;

        let prompt = build_prompt(ReasoningMode::FullThinking, "prove it", &features);
        assert!(prompt.contains("4. Verification"));
    }
}
