//! Conversational helpers built on the analyzer.
//!
//! Everything here is a pure function of its input: classifying what an
//! utterance asks for, turning it into a [`TaskSuggestion`], and locating the
//! task a completion request refers to.

/// Human-readable durations
pub mod format;
/// Utterance intent classification
pub mod intent;
/// Task-reference extraction and lookup
pub mod matching;
/// Task suggestions from utterances
pub mod suggestion;

pub use format::format_duration;
pub use intent::{IntentClassifier, UserIntent};
pub use matching::{extract_task_reference, find_matching_tasks};
pub use suggestion::{SuggestionBuilder, TaskSuggestion};
