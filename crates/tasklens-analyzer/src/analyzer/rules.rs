//! Ordered (predicate, outcome) tables.
//!
//! Every classification pass is a slice of [`Rule`]s evaluated top to bottom;
//! the first rule whose predicate holds decides the outcome. Reordering a
//! table changes results, so the tables are the single source of precedence.

/// Typographic apostrophe that mobile keyboards substitute for `'`.
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Free text prepared for rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskText<'text> {
    raw: &'text str,
    lowered: String,
}

impl<'text> TaskText<'text> {
    /// Trim surrounding whitespace and keep a lower-cased copy with curly
    /// apostrophes folded to `'`.
    pub fn new(text: &'text str) -> Self {
        let raw = text.trim();
        Self {
            raw,
            lowered: raw.to_lowercase().replace(RIGHT_SINGLE_QUOTE, "'"),
        }
    }

    /// The trimmed text with its original casing.
    pub fn raw(&self) -> &'text str {
        self.raw
    }

    /// The trimmed text, lower-cased, with `'` as the only apostrophe.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Whether there is nothing left after trimming.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// First keyword from `keywords` that occurs in the lower-cased text.
    pub fn find_any(&self, keywords: &[&'static str]) -> Option<&'static str> {
        keywords
            .iter()
            .copied()
            .find(|keyword| self.lowered.contains(keyword))
    }
}

/// Condition a rule checks against the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Any of the phrases occurs in the lower-cased text
    AnyKeyword(&'static [&'static str]),
    /// The character occurs in the raw text
    ContainsChar(char),
}

impl Predicate {
    /// Evaluate against `text`.
    pub fn holds(&self, text: &TaskText<'_>) -> bool {
        match *self {
            Self::AnyKeyword(keywords) => text.find_any(keywords).is_some(),
            Self::ContainsChar(needle) => text.raw().contains(needle),
        }
    }
}

/// A predicate paired with the outcome it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<T> {
    /// What must hold
    pub predicate: Predicate,
    /// What the rule yields
    pub outcome: T,
}

impl<T: Copy> Rule<T> {
    /// Rule firing when any keyword occurs.
    pub const fn keywords(keywords: &'static [&'static str], outcome: T) -> Self {
        Self {
            predicate: Predicate::AnyKeyword(keywords),
            outcome,
        }
    }

    /// Rule firing when a character occurs in the raw text.
    pub const fn contains_char(needle: char, outcome: T) -> Self {
        Self {
            predicate: Predicate::ContainsChar(needle),
            outcome,
        }
    }
}

/// Evaluate `rules` in order, returning the outcome of the first that holds.
pub fn first_match<T: Copy>(rules: &[Rule<T>], text: &TaskText<'_>) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.predicate.holds(text))
        .map(|rule| rule.outcome)
}
