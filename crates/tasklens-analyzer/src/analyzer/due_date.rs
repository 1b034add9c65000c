//! Due-date extraction from relative and weekday phrases.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike as _, Days, FixedOffset, Months, Timelike as _, Weekday};
use regex::Regex;

use super::rules::{Rule, TaskText, first_match};

/// Outcome of a phrase rule that fired: the resolved instant, or `None` when
/// the arithmetic left the supported calendar range.
type Resolved = Option<DateTime<FixedOffset>>;

type PhraseRule = fn(&TaskText<'_>, DateTime<FixedOffset>) -> Option<Resolved>;

/// Phrase families in precedence order; the first that fires decides.
const PHRASE_RULES: [(&str, PhraseRule); 6] = [
    ("same day", same_day),
    ("next day", next_day),
    ("weekday", weekday),
    ("next week", next_week),
    ("next month", next_month),
    ("relative count", relative_count),
];

const SAME_DAY_TIMES: [Rule<u32>; 3] = [
    Rule::keywords(&["morning"], 9),
    Rule::keywords(&["afternoon"], 14),
    Rule::keywords(&["evening", "tonight"], 18),
];

const NEXT_DAY_TIMES: [Rule<u32>; 2] = [
    Rule::keywords(&["morning"], 9),
    Rule::keywords(&["afternoon"], 14),
];

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

#[derive(Debug, Clone, Copy)]
enum CalendarUnit {
    Day,
    Week,
    Month,
}

static RELATIVE_PATTERNS: LazyLock<[(Regex, CalendarUnit); 3]> = LazyLock::new(|| {
    [
        (compile(r"in (\d+) days?"), CalendarUnit::Day),
        (compile(r"in (\d+) weeks?"), CalendarUnit::Week),
        (compile(r"in (\d+) months?"), CalendarUnit::Month),
    ]
});

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Relative date regex is invalid: {err}"),
    }
}

/// Infer a due date from `text`, resolving relative phrases against `now`.
///
/// Returns `None` when no phrase is recognized.
pub fn extract_due_date(
    text: &TaskText<'_>,
    now: DateTime<FixedOffset>,
) -> Option<DateTime<FixedOffset>> {
    PHRASE_RULES.iter().find_map(|(name, rule)| {
        let resolved = rule(text, now)?;
        tracing::trace!("due date phrase '{name}' resolved to {resolved:?}");
        Some(resolved)
    })?
}

/// Move `instant` to `hour`:00:00 on the same local date.
fn at_hour(instant: DateTime<FixedOffset>, hour: u32) -> Resolved {
    instant
        .with_hour(hour)?
        .with_minute(0)?
        .with_second(0)?
        .with_nanosecond(0)
}

fn same_day(text: &TaskText<'_>, now: DateTime<FixedOffset>) -> Option<Resolved> {
    text.find_any(&["today", "tonight"])?;
    Some(first_match(&SAME_DAY_TIMES, text).map_or(Some(now), |hour| at_hour(now, hour)))
}

fn next_day(text: &TaskText<'_>, now: DateTime<FixedOffset>) -> Option<Resolved> {
    text.find_any(&["tomorrow"])?;
    let tomorrow = now.checked_add_days(Days::new(1));
    Some(first_match(&NEXT_DAY_TIMES, text).map_or(tomorrow, |hour| {
        tomorrow.and_then(|date| at_hour(date, hour))
    }))
}

fn weekday(text: &TaskText<'_>, now: DateTime<FixedOffset>) -> Option<Resolved> {
    let (_, target) = WEEKDAYS
        .iter()
        .find(|(name, _)| text.lowered().contains(name))?;
    Some(now.checked_add_days(Days::new(days_until(now.weekday(), *target))))
}

/// Days from `current` to the next `target`, never zero.
fn days_until(current: Weekday, target: Weekday) -> u64 {
    let ahead = (7 + target.num_days_from_monday() - current.num_days_from_monday()) % 7;
    if ahead == 0 { 7 } else { u64::from(ahead) }
}

fn next_week(text: &TaskText<'_>, now: DateTime<FixedOffset>) -> Option<Resolved> {
    text.find_any(&["next week"])?;
    Some(now.checked_add_days(Days::new(7)))
}

fn next_month(text: &TaskText<'_>, now: DateTime<FixedOffset>) -> Option<Resolved> {
    text.find_any(&["next month"])?;
    Some(now.checked_add_months(Months::new(1)))
}

fn relative_count(text: &TaskText<'_>, now: DateTime<FixedOffset>) -> Option<Resolved> {
    RELATIVE_PATTERNS.iter().find_map(|(pattern, unit)| {
        let count: u32 = pattern.captures(text.lowered())?.get(1)?.as_str().parse().ok()?;
        Some(match unit {
            CalendarUnit::Day => now.checked_add_days(Days::new(u64::from(count))),
            CalendarUnit::Week => now.checked_add_days(Days::new(u64::from(count) * 7)),
            CalendarUnit::Month => now.checked_add_months(Months::new(count)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    /// Wednesday 2025-01-15 10:30:45 at UTC+02:00.
    fn wednesday() -> DateTime<FixedOffset> {
        let Some(offset) = FixedOffset::east_opt(2 * 3600) else {
            panic!("valid offset");
        };
        match offset.with_ymd_and_hms(2025, 1, 15, 10, 30, 45).single() {
            Some(instant) => instant,
            None => panic!("unambiguous instant"),
        }
    }

    fn due(text: &str) -> Option<String> {
        extract_due_date(&TaskText::new(text), wednesday()).map(|date| date.to_rfc3339())
    }

    #[test]
    fn test_today_variants() {
        assert_eq!(due("finish today").as_deref(), Some("2025-01-15T10:30:45+02:00"));
        assert_eq!(due("gym today morning").as_deref(), Some("2025-01-15T09:00:00+02:00"));
        assert_eq!(
            due("Today afternoon review").as_deref(),
            Some("2025-01-15T14:00:00+02:00")
        );
        assert_eq!(due("dinner tonight").as_deref(), Some("2025-01-15T18:00:00+02:00"));
        assert_eq!(due("today evening").as_deref(), Some("2025-01-15T18:00:00+02:00"));
    }

    #[test]
    fn test_tonight_with_morning_prefers_morning() {
        assert_eq!(
            due("tonight, or tomorrow morning").as_deref(),
            Some("2025-01-15T09:00:00+02:00")
        );
    }

    #[test]
    fn test_tomorrow_variants() {
        assert_eq!(due("tomorrow").as_deref(), Some("2025-01-16T10:30:45+02:00"));
        assert_eq!(
            due("Call the dentist tomorrow morning").as_deref(),
            Some("2025-01-16T09:00:00+02:00")
        );
        assert_eq!(due("tomorrow afternoon").as_deref(), Some("2025-01-16T14:00:00+02:00"));
        assert_eq!(due("tomorrow evening").as_deref(), Some("2025-01-16T10:30:45+02:00"));
    }

    #[test]
    fn test_weekday_is_strictly_after_now() {
        assert_eq!(due("on friday").as_deref(), Some("2025-01-17T10:30:45+02:00"));
        assert_eq!(due("monday standup").as_deref(), Some("2025-01-20T10:30:45+02:00"));
        assert_eq!(due("wednesday sync").as_deref(), Some("2025-01-22T10:30:45+02:00"));
    }

    #[test]
    fn test_weekday_table_order_wins_over_text_order() {
        assert_eq!(
            due("friday or monday").as_deref(),
            Some("2025-01-20T10:30:45+02:00")
        );
    }

    #[test]
    fn test_next_week_and_month() {
        assert_eq!(due("next week").as_deref(), Some("2025-01-22T10:30:45+02:00"));
        assert_eq!(due("next month").as_deref(), Some("2025-02-15T10:30:45+02:00"));
    }

    #[test]
    fn test_relative_counts() {
        assert_eq!(due("in 3 days").as_deref(), Some("2025-01-18T10:30:45+02:00"));
        assert_eq!(due("In 1 day").as_deref(), Some("2025-01-16T10:30:45+02:00"));
        assert_eq!(due("in 2 weeks").as_deref(), Some("2025-01-29T10:30:45+02:00"));
        assert_eq!(due("in 2 months").as_deref(), Some("2025-03-15T10:30:45+02:00"));
    }

    #[test]
    fn test_relative_count_days_before_weeks() {
        assert_eq!(
            due("in 2 weeks or in 1 day").as_deref(),
            Some("2025-01-16T10:30:45+02:00")
        );
    }

    #[test]
    fn test_unparseable_count_falls_through() {
        assert_eq!(
            due("in 99999999999 days or in 1 week").as_deref(),
            Some("2025-01-22T10:30:45+02:00")
        );
    }

    #[test]
    fn test_overflowing_count_is_absent() {
        assert_eq!(due("in 4000000000 months"), None);
    }

    #[test]
    fn test_no_phrase() {
        assert_eq!(due("water the plants"), None);
        assert_eq!(due(""), None);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(Weekday::Mon, Weekday::Mon), 7);
        assert_eq!(days_until(Weekday::Sun, Weekday::Mon), 1);
        assert_eq!(days_until(Weekday::Mon, Weekday::Sun), 6);
    }
}
