use core::time::Duration;
use std::sync::LazyLock;

use regex::Regex;
use tasklens_core::DEFAULT_DURATION;

use super::rules::{Rule, TaskText, first_match};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;

/// Effort rules keyed on task vocabulary. These take precedence over explicit
/// "N minutes" / "N hours" mentions.
pub const DURATION_RULES: [Rule<Duration>; 3] = [
    Rule::keywords(
        &["quick", "brief", "short", "email", "call", "text", "message"],
        Duration::from_secs(15 * MINUTE),
    ),
    Rule::keywords(
        &[
            "project",
            "research",
            "write",
            "document",
            "report",
            "presentation",
            "plan",
        ],
        Duration::from_secs(2 * HOUR),
    ),
    Rule::keywords(
        &["meeting", "appointment", "grocery", "shopping", "workout"],
        Duration::from_secs(HOUR),
    ),
];

/// Explicit mentions, minutes before hours, with the seconds per unit.
static EXPLICIT_MENTIONS: LazyLock<[(Regex, u64); 2]> = LazyLock::new(|| {
    [
        (compile(r"(\d+)\s*(?:minutes?|mins?)"), MINUTE),
        (compile(r"(\d+)\s*(?:hours?|hrs?)"), HOUR),
    ]
});

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Duration regex is invalid: {err}"),
    }
}

/// Estimate effort, defaulting to [`DEFAULT_DURATION`]. Never zero.
pub fn estimate_duration(text: &TaskText<'_>) -> Duration {
    first_match(&DURATION_RULES, text)
        .or_else(|| explicit_mention(text))
        .unwrap_or(DEFAULT_DURATION)
}

/// First explicit positive amount that fits in a [`Duration`].
fn explicit_mention(text: &TaskText<'_>) -> Option<Duration> {
    EXPLICIT_MENTIONS.iter().find_map(|(pattern, unit_seconds)| {
        let amount: u64 = pattern.captures(text.lowered())?.get(1)?.as_str().parse().ok()?;
        if amount == 0 {
            return None;
        }
        amount.checked_mul(*unit_seconds).map(Duration::from_secs)
    })
}
