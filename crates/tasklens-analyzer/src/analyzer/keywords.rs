//! Content-word extraction.

use std::collections::HashSet;
use std::sync::OnceLock;

use tasklens_core::MAX_KEYWORDS;
use unicode_segmentation::UnicodeSegmentation as _;

use super::rules::TaskText;
use super::tagger::tag;

/// Words of this many characters or fewer never become keywords.
const MIN_KEYWORD_CHARS: usize = 3;

fn stopwords() -> &'static HashSet<&'static str> {
    static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOPWORDS.get_or_init(|| {
        [
            "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was",
            "one", "our", "out", "day", "get", "has", "him", "his", "how", "its", "may", "new",
            "now", "old", "see", "two", "way", "who", "boy", "did", "man", "try", "need", "want",
            "remember", "remind", "please", "thing", "things", "stuff", "make", "sure", "like",
            "task", "todo", "lets",
        ]
        .into_iter()
        .collect()
    })
}

/// Strip a trailing possessive so "Sarah's" and "Sarah" collapse.
fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s").unwrap_or(word)
}

/// Up to [`MAX_KEYWORDS`] distinct lower-cased nouns and verbs, in order of
/// first appearance.
pub fn extract_keywords(text: &TaskText<'_>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for word in text.lowered().unicode_words() {
        let candidate = strip_possessive(word);
        if candidate.chars().count() <= MIN_KEYWORD_CHARS
            || stopwords().contains(candidate)
            || !tag(candidate).is_content()
        {
            continue;
        }
        if seen.insert(candidate.to_owned()) {
            keywords.push(candidate.to_owned());
            if keywords.len() == MAX_KEYWORDS {
                break;
            }
        }
    }

    tracing::trace!("extracted keywords {keywords:?}");
    keywords
}
