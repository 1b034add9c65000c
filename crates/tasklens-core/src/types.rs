use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Maximum number of keywords carried by an [`AnalysisResult`].
pub const MAX_KEYWORDS: usize = 5;

/// Duration assumed when the text carries no effort signal.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(30 * 60);

/// Task urgency tier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    /// Can wait
    Low,
    /// Default urgency
    #[default]
    Medium,
    /// Needs attention soon
    High,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Rank used when sorting task lists, higher is more urgent.
    pub const fn sort_order(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::UnknownVariant {
                kind: "priority",
                value: value.to_owned(),
            })
    }
}

/// Topical bucket a task belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Calls, meetings, interviews
    Meeting,
    /// Purchases and errands
    Shopping,
    /// Job-related work
    Work,
    /// Personal matters; never inferred, only set by callers
    Personal,
    /// Medical and fitness
    Health,
    /// Money, bills, taxes
    Finance,
    /// Trips and bookings
    Travel,
    /// Fallback when nothing matches
    #[default]
    General,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Meeting,
        Self::Shopping,
        Self::Work,
        Self::Personal,
        Self::Health,
        Self::Finance,
        Self::Travel,
        Self::General,
    ];

    /// Display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meeting => "Meeting",
            Self::Shopping => "Shopping",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Finance => "Finance",
            Self::Travel => "Travel",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::UnknownVariant {
                kind: "category",
                value: value.to_owned(),
            })
    }
}

/// Structured interpretation of a free-text task description.
///
/// Every field carries a usable value even when nothing in the text matched;
/// only `due_date` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Absolute point in time inferred from date phrases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<FixedOffset>>,
    /// Inferred urgency
    pub priority: Priority,
    /// Inferred topical bucket
    pub category: Category,
    /// Inferred effort, serialized as whole seconds
    #[serde(with = "duration_secs")]
    pub estimated_duration: Duration,
    /// Salient words, deduplicated, at most [`MAX_KEYWORDS`]
    pub keywords: Vec<String>,
    /// Polarity estimate in `[-1.0, 1.0]`
    pub sentiment_score: f64,
}

impl AnalysisResult {
    /// Estimated duration in whole seconds.
    pub fn estimated_seconds(&self) -> u64 {
        self.estimated_duration.as_secs()
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            due_date: None,
            priority: Priority::default(),
            category: Category::default(),
            estimated_duration: DEFAULT_DURATION,
            keywords: Vec::new(),
            sentiment_score: 0.0,
        }
    }
}

/// Serde adapter writing a [`Duration`] as an integer number of seconds.
pub mod duration_secs {
    use core::time::Duration;

    use serde::{Deserialize as _, Deserializer, Serializer};

    /// Serialize as an unsigned integer count of seconds.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_secs())
    }

    /// Deserialize from an unsigned integer count of seconds.
    ///
    /// # Errors
    /// Fails when the input is not a non-negative integer.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
