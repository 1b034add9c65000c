use tasklens_core::Priority;

use super::rules::{Rule, TaskText, first_match};

/// Urgency rules. Keyword checks precede the exclamation-mark fallback.
pub const PRIORITY_RULES: [Rule<Priority>; 3] = [
    Rule::keywords(
        &[
            "urgent",
            "asap",
            "immediately",
            "critical",
            "important",
            "emergency",
            "deadline",
            "due today",
        ],
        Priority::High,
    ),
    Rule::keywords(
        &[
            "maybe",
            "sometime",
            "eventually",
            "when free",
            "optional",
            "nice to have",
        ],
        Priority::Low,
    ),
    Rule::contains_char('!', Priority::High),
];

/// Infer urgency, defaulting to [`Priority::Medium`].
pub fn detect_priority(text: &TaskText<'_>) -> Priority {
    first_match(&PRIORITY_RULES, text).unwrap_or_default()
}
