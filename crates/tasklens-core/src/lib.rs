//! Core types for the tasklens workspace.
//!
//! This crate provides the domain types produced by task-text analysis, the
//! task record callers materialize from them, error handling, and the
//! configuration file shared by the front ends.

/// Reference-time parsing and the current instant.
pub mod clock;
/// Configuration loading and persistence.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Task records materialized from analysis results.
pub mod task;
/// Analysis result and classification enums.
pub mod types;

pub use clock::{parse_reference_time, reference_now};
pub use config::{AnalysisConfig, LoggingConfig, OutputConfig, OutputFormat, TasklensConfig};
pub use error::{Error, Result};
pub use task::{
    TaskId, TaskRecord, completed_tasks, high_priority_tasks, pending_tasks,
    tasks_by_category, total_pending_estimate,
};
pub use types::{AnalysisResult, Category, DEFAULT_DURATION, MAX_KEYWORDS, Priority};
