use core::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tasklens_core::types::duration_secs;
use tasklens_core::{AnalysisResult, Category, Priority, TaskRecord};

use crate::analyzer::{TaskTextAnalyzer, TextAnalyzer};

/// Leading phrases removed from an utterance to form a title.
const TITLE_PREFIXES: [&str; 10] = [
    "add",
    "create",
    "new task",
    "i need to",
    "i have to",
    "i should",
    "remember to",
    "don't forget to",
    "don\u{2019}t forget to",
    "remind me to",
];

/// An utterance longer than its title by more than this many characters is
/// quoted in the description.
const DESCRIPTION_SLACK: usize = 20;

const BASE_CONFIDENCE: f64 = 0.7;
const CONFIDENCE_STEP: f64 = 0.1;

/// Fallback description for utterances that are essentially the title.
pub const DEFAULT_DESCRIPTION: &str = "Task created via assistant";

/// A proposed task built from a conversational utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSuggestion {
    /// Proposed title
    pub title: String,
    /// Proposed description
    pub description: String,
    /// Inferred urgency
    pub priority: Priority,
    /// Inferred topical bucket
    pub category: Category,
    /// Inferred deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<FixedOffset>>,
    /// Inferred effort, serialized as whole seconds
    #[serde(with = "duration_secs")]
    pub estimated_duration: Duration,
    /// Salient words
    pub keywords: Vec<String>,
    /// How much of the utterance was understood, in `[0.0, 1.0]`
    pub confidence: f64,
}

impl TaskSuggestion {
    /// Materialize the suggestion as a fresh, incomplete task record.
    #[must_use]
    pub fn into_task_record(self, created_at: DateTime<FixedOffset>) -> TaskRecord {
        TaskRecord::new(self.title, self.description, created_at)
            .with_priority(self.priority)
            .with_category(self.category)
            .with_due_date(self.due_date)
            .with_estimated_duration(self.estimated_duration)
            .with_keywords(self.keywords)
    }
}

/// Builds [`TaskSuggestion`]s from utterances using a [`TextAnalyzer`].
#[derive(Debug, Default, Clone)]
pub struct SuggestionBuilder<A: TextAnalyzer = TaskTextAnalyzer> {
    analyzer: A,
}

impl<A: TextAnalyzer> SuggestionBuilder<A> {
    /// Use `analyzer` for attribute inference.
    pub const fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Turn `utterance` into a suggestion, resolving dates against `now`.
    pub fn suggest(&self, utterance: &str, now: DateTime<FixedOffset>) -> TaskSuggestion {
        let utterance = utterance.trim();
        let analysis = self.analyzer.analyze(utterance, now);
        let title = extract_title(utterance);
        let description = extract_description(utterance, &title);
        let confidence = confidence(&analysis);

        tracing::debug!("suggested {title:?} with confidence {confidence:.1}");

        TaskSuggestion {
            title,
            description,
            priority: analysis.priority,
            category: analysis.category,
            due_date: analysis.due_date,
            estimated_duration: analysis.estimated_duration,
            keywords: analysis.keywords,
            confidence,
        }
    }
}

/// Strip the first matching request prefix and capitalize what remains.
///
/// A prefix only counts when followed by a non-alphanumeric character or the
/// end of the utterance, so "Address the envelope" keeps its first word.
pub fn extract_title(utterance: &str) -> String {
    let utterance = utterance.trim();
    let remainder = TITLE_PREFIXES
        .iter()
        .find_map(|prefix| strip_prefix_word(utterance, prefix))
        .unwrap_or(utterance);
    capitalize_first(remainder.trim())
}

fn strip_prefix_word<'text>(utterance: &'text str, prefix: &str) -> Option<&'text str> {
    let head = utterance.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    let rest = utterance.get(prefix.len()..)?;
    rest.chars()
        .next()
        .is_none_or(|next| !next.is_alphanumeric())
        .then_some(rest)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Quote the utterance when it says noticeably more than the title.
pub fn extract_description(utterance: &str, title: &str) -> String {
    if utterance.chars().count() > title.chars().count() + DESCRIPTION_SLACK {
        format!("Created from: {utterance}")
    } else {
        DEFAULT_DESCRIPTION.to_owned()
    }
}

/// 0.7 plus 0.1 for each of: a due date, a specific category, any keywords.
pub fn confidence(analysis: &AnalysisResult) -> f64 {
    let signals = [
        analysis.due_date.is_some(),
        analysis.category != Category::General,
        !analysis.keywords.is_empty(),
    ];
    let hits = signals.iter().filter(|signal| **signal).count();
    CONFIDENCE_STEP.mul_add(hits as f64, BASE_CONFIDENCE).min(1.0)
}
