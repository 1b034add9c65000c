use core::fmt;
use core::time::Duration;
use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{AnalysisResult, Category, DEFAULT_DURATION, Priority, duration_secs};

/// Unique identifier for a task record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// A task as handed to the persistence layer.
///
/// Built by callers after merging user overrides with an [`AnalysisResult`];
/// the analyzer never produces one directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Record identifier
    pub id: TaskId,
    /// Short title
    pub title: String,
    /// Longer free-form description
    pub description: String,
    /// Urgency tier
    pub priority: Priority,
    /// Topical bucket
    pub category: Category,
    /// Completion flag, false on creation
    pub is_completed: bool,
    /// Creation instant
    pub created_at: DateTime<FixedOffset>,
    /// Optional deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<FixedOffset>>,
    /// Expected effort
    #[serde(with = "duration_secs")]
    pub estimated_duration: Duration,
    /// Search keywords
    pub keywords: Vec<String>,
}

impl TaskRecord {
    /// Create an incomplete record with default attributes.
    #[must_use]
    pub fn new(title: String, description: String, created_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            priority: Priority::Medium,
            category: Category::General,
            is_completed: false,
            created_at,
            due_date: None,
            estimated_duration: DEFAULT_DURATION,
            keywords: Vec::new(),
        }
    }

    /// Create a record whose attributes come from an analysis.
    #[must_use]
    pub fn from_analysis(
        title: String,
        description: String,
        analysis: &AnalysisResult,
        created_at: DateTime<FixedOffset>,
    ) -> Self {
        Self::new(title, description, created_at)
            .with_priority(analysis.priority)
            .with_category(analysis.category)
            .with_due_date(analysis.due_date)
            .with_estimated_duration(analysis.estimated_duration)
            .with_keywords(analysis.keywords.clone())
    }

    /// Override the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Override the category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Override the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<DateTime<FixedOffset>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Override the estimated duration.
    #[must_use]
    pub fn with_estimated_duration(mut self, estimated_duration: Duration) -> Self {
        self.estimated_duration = estimated_duration;
        self
    }

    /// Override the keywords.
    #[must_use]
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Flip the completion flag.
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

/// Tasks not yet completed, in input order.
#[must_use]
pub fn pending_tasks(tasks: &[TaskRecord]) -> Vec<&TaskRecord> {
    tasks.iter().filter(|task| !task.is_completed).collect()
}

/// Completed tasks, in input order.
#[must_use]
pub fn completed_tasks(tasks: &[TaskRecord]) -> Vec<&TaskRecord> {
    tasks.iter().filter(|task| task.is_completed).collect()
}

/// High-priority tasks regardless of completion, in input order.
#[must_use]
pub fn high_priority_tasks(tasks: &[TaskRecord]) -> Vec<&TaskRecord> {
    tasks
        .iter()
        .filter(|task| task.priority == Priority::High)
        .collect()
}

/// Tasks grouped by category; categories with no tasks are absent.
#[must_use]
pub fn tasks_by_category(tasks: &[TaskRecord]) -> HashMap<Category, Vec<&TaskRecord>> {
    let mut groups: HashMap<Category, Vec<&TaskRecord>> = HashMap::new();
    for task in tasks {
        groups.entry(task.category).or_default().push(task);
    }
    groups
}

/// Summed estimate of the pending tasks, saturating at [`Duration::MAX`].
#[must_use]
pub fn total_pending_estimate(tasks: &[TaskRecord]) -> Duration {
    tasks
        .iter()
        .filter(|task| !task.is_completed)
        .fold(Duration::ZERO, |total, task| {
            total.saturating_add(task.estimated_duration)
        })
}
