//! Rule-based interpretation of free-text task descriptions.
//!
//! [`TaskTextAnalyzer`] turns a string such as "Call the dentist tomorrow
//! morning" into an [`AnalysisResult`]: due date, priority, category,
//! estimated duration, keywords and a sentiment score. The [`assistant`]
//! module layers conversational helpers on top of it.

/// Text analysis passes and the analyzer that runs them.
pub mod analyzer;
/// Conversational helpers built on the analyzer.
pub mod assistant;

use chrono::{DateTime, FixedOffset};
use tasklens_core::AnalysisResult;

pub use analyzer::{TaskText, TaskTextAnalyzer, TextAnalyzer};
pub use assistant::{
    IntentClassifier, SuggestionBuilder, TaskSuggestion, UserIntent, extract_task_reference,
    find_matching_tasks, format_duration,
};

/// Analyze `text` against the reference instant `now` with the default
/// rule set.
pub fn analyze(text: &str, now: DateTime<FixedOffset>) -> AnalysisResult {
    TaskTextAnalyzer.analyze(text, now)
}
