//! End-to-end properties of `analyze` over realistic task descriptions.

#![cfg_attr(
    test,
    allow(
        clippy::tests_outside_test_module,
        clippy::missing_panics_doc,
        reason = "Test file allows"
    )
)]

use std::collections::HashSet;
use std::thread;

use chrono::{DateTime, Datelike as _, Duration as ChronoDuration, FixedOffset, Weekday};
use tasklens_analyzer::analyze;
use tasklens_core::{AnalysisResult, Category, MAX_KEYWORDS, Priority};

const CORPUS: [&str; 14] = [
    "",
    "   ",
    "Call the dentist tomorrow morning",
    "Urgent: finish project proposal by Friday!!",
    "in 3 days submit report",
    "let's meet monday",
    "maybe clean the garage sometime",
    "Buy groceries tonight, milk eggs bread cheese apples bananas",
    "Pay the credit card bill next month",
    "Book flight and hotel for the vacation in 2 weeks",
    "I really hate doing taxes, not a great day!!!!",
    "Research, write, document and present the quarterly research report",
    "stretch for 45 minutes",
    "ÜBERWEISUNG an die Bank 🙂 heute",
];

fn at(timestamp: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(timestamp)
        .unwrap_or_else(|err| panic!("invalid timestamp {timestamp}: {err}"))
}

/// Wednesday mid-morning.
fn wednesday() -> DateTime<FixedOffset> {
    at("2025-01-15T10:30:45+02:00")
}

#[test]
fn test_every_field_is_in_range() {
    for text in CORPUS {
        let result = analyze(text, wednesday());
        assert!(result.estimated_seconds() > 0, "{text:?}");
        assert!(
            (-1.0..=1.0).contains(&result.sentiment_score),
            "{text:?}: {}",
            result.sentiment_score
        );
        assert!(result.keywords.len() <= MAX_KEYWORDS, "{text:?}");

        let distinct: HashSet<&String> = result.keywords.iter().collect();
        assert_eq!(distinct.len(), result.keywords.len(), "{text:?}");
        assert!(Priority::ALL.contains(&result.priority));
        assert!(Category::ALL.contains(&result.category));
    }
}

#[test]
fn test_repeated_calls_agree() {
    for text in CORPUS {
        assert_eq!(analyze(text, wednesday()), analyze(text, wednesday()), "{text:?}");
    }
}

#[test]
fn test_concurrent_calls_agree() {
    let expected: Vec<AnalysisResult> =
        CORPUS.iter().map(|text| analyze(text, wednesday())).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    CORPUS
                        .iter()
                        .map(|text| analyze(text, wednesday()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            let results = handle
                .join()
                .unwrap_or_else(|_| panic!("analysis thread panicked"));
            assert_eq!(results, expected);
        }
    });
}

#[test]
fn test_empty_text_is_all_defaults() {
    let result = analyze("", wednesday());
    assert_eq!(result, AnalysisResult::default());
    assert!(result.due_date.is_none());
    assert_eq!(result.priority, Priority::Medium);
    assert_eq!(result.category, Category::General);
    assert_eq!(result.estimated_seconds(), 1800);
    assert!(result.keywords.is_empty());
    assert!(result.sentiment_score.abs() < f64::EPSILON);
}

#[test]
fn test_dentist_tomorrow_morning() {
    let result = analyze("Call the dentist tomorrow morning", wednesday());
    assert_eq!(result.due_date, Some(at("2025-01-16T09:00:00+02:00")));
    assert_eq!(result.category, Category::Meeting);
    assert_eq!(result.priority, Priority::Medium);
    assert_eq!(result.estimated_seconds(), 900);
    assert_eq!(result.keywords, ["call", "dentist"]);
}

#[test]
fn test_urgent_proposal_by_friday() {
    let result = analyze("Urgent: finish project proposal by Friday!!", wednesday());
    assert_eq!(result.priority, Priority::High);
    assert_eq!(result.category, Category::Work);
    assert_eq!(result.estimated_seconds(), 7200);

    let Some(due) = result.due_date else {
        panic!("expected a due date");
    };
    assert_eq!(due.weekday(), Weekday::Fri);
    assert_eq!(due, at("2025-01-17T10:30:45+02:00"));
}

#[test]
fn test_relative_days_with_report() {
    let now = wednesday();
    let result = analyze("in 3 days submit report", now);
    assert_eq!(result.due_date, Some(now + ChronoDuration::days(3)));
    assert_eq!(result.estimated_seconds(), 7200);
    assert_eq!(result.category, Category::Work);
}

#[test]
fn test_same_weekday_rolls_a_full_week() {
    let monday = at("2025-01-13T08:00:00-05:00");
    let result = analyze("let's meet monday", monday);
    assert_eq!(result.due_date, Some(monday + ChronoDuration::days(7)));
}

#[test]
fn test_month_arithmetic_clamps_to_month_end() {
    let result = analyze("next month", at("2025-01-31T12:00:00Z"));
    assert_eq!(result.due_date, Some(at("2025-02-28T12:00:00Z")));
}

#[test]
fn test_offset_of_now_is_kept() {
    let result = analyze("dinner tonight", at("2025-07-04T07:15:00-07:00"));
    assert_eq!(result.due_date, Some(at("2025-07-04T18:00:00-07:00")));
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let now = wednesday();
    assert_eq!(
        analyze("  \tBuy milk tomorrow\n", now),
        analyze("Buy milk tomorrow", now)
    );
}

#[test]
fn test_keywords_capped_in_first_seen_order() {
    let result = analyze(
        "Buy groceries tonight, milk eggs bread cheese apples bananas",
        wednesday(),
    );
    assert_eq!(result.keywords, ["groceries", "milk", "eggs", "bread", "cheese"]);
}

#[test]
fn test_sentiment_follows_wording() {
    assert!(analyze("Celebrate the wonderful launch", wednesday()).sentiment_score > 0.0);
    assert!(analyze("Deal with the awful broken sink", wednesday()).sentiment_score < 0.0);
}
