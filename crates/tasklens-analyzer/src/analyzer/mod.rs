//! Text analysis passes.
//!
//! Each pass is independent and reads the same [`TaskText`]; none of them can
//! fail, so an unrecognized input simply yields the defaults of
//! [`AnalysisResult`].

/// Category detection
pub mod category;
/// Due-date extraction
pub mod due_date;
/// Effort estimation
pub mod duration;
/// Keyword extraction
pub mod keywords;
/// Urgency detection
pub mod priority;
/// Ordered rule tables shared by the passes
pub mod rules;
/// Sentiment scoring
pub mod sentiment;
/// Lexical-class tagging for keyword selection
pub mod tagger;

use chrono::{DateTime, FixedOffset};
use tasklens_core::AnalysisResult;

pub use rules::TaskText;

/// Strategy for turning free text into structured task attributes.
pub trait TextAnalyzer: Send + Sync {
    /// Analyze `text`, resolving relative dates against `now`.
    fn analyze(&self, text: &str, now: DateTime<FixedOffset>) -> AnalysisResult;
}

/// Rule-based analyzer. Stateless; every call is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskTextAnalyzer;

impl TextAnalyzer for TaskTextAnalyzer {
    fn analyze(&self, text: &str, now: DateTime<FixedOffset>) -> AnalysisResult {
        let text = TaskText::new(text);
        if text.is_empty() {
            return AnalysisResult::default();
        }

        let result = AnalysisResult {
            due_date: due_date::extract_due_date(&text, now),
            priority: priority::detect_priority(&text),
            category: category::categorize(&text),
            estimated_duration: duration::estimate_duration(&text),
            keywords: keywords::extract_keywords(&text),
            sentiment_score: sentiment::score_sentiment(&text),
        };

        tracing::debug!(
            "analyzed {:?}: due={:?} priority={} category={} duration={}s keywords={:?} sentiment={:.2}",
            text.raw(),
            result.due_date,
            result.priority,
            result.category,
            result.estimated_seconds(),
            result.keywords,
            result.sentiment_score
        );
        result
    }
}
