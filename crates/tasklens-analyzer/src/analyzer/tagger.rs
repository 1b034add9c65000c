//! Heuristic lexical-class tagging for single words.
//!
//! Closed word classes come from lookup tables; open classes fall back to
//! suffix rules, then to [`LexicalClass::Noun`]. Good enough to pick content
//! words out of short task descriptions.

/// Part of speech assigned to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalClass {
    /// Things and concepts
    Noun,
    /// Actions
    Verb,
    /// Qualities
    Adjective,
    /// Manner, degree and time words
    Adverb,
    /// Personal and indefinite pronouns
    Pronoun,
    /// Articles, possessives, quantifiers
    Determiner,
    /// Prepositions and particles
    Preposition,
    /// Coordinating and subordinating conjunctions
    Conjunction,
    /// Auxiliary and modal verbs, contractions
    Auxiliary,
    /// Greetings and exclamations
    Interjection,
    /// Anything containing a digit
    Number,
}

impl LexicalClass {
    /// Nouns and verbs carry the topic of a task.
    pub const fn is_content(self) -> bool {
        matches!(self, Self::Noun | Self::Verb)
    }
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "each", "every", "all", "both", "no", "another", "other", "few",
    "many", "much", "several",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "someone", "somebody", "anyone",
    "anybody", "everyone", "everybody", "something", "anything", "everything", "nothing", "who",
    "whom", "what", "which", "whatever", "mine", "yours", "ours", "theirs",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beside", "between", "beyond", "by", "during", "for", "from", "in",
    "inside", "into", "near", "of", "off", "on", "onto", "out", "outside", "over", "past",
    "since", "through", "till", "to", "toward", "towards", "under", "until", "up", "upon",
    "with", "within", "without", "via", "per",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "whether", "than", "once", "whereas",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "having", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    "ought",
];

const ADVERBS: &[&str] = &[
    "very", "really", "just", "also", "too", "quite", "soon", "later", "now", "then", "again",
    "maybe", "perhaps", "sometime", "sometimes", "eventually", "asap", "immediately", "not",
    "never", "always", "often", "already", "still", "here", "there", "when", "where", "how",
    "why", "finally", "definitely",
];

/// Date and time-of-day vocabulary; resolved by the due-date pass instead.
const TEMPORAL: &[&str] = &[
    "today", "tonight", "tomorrow", "yesterday", "morning", "afternoon", "evening", "night",
    "noon", "midnight", "week", "weekend", "weeks", "month", "months", "year", "years", "day",
    "days", "hour", "hours", "minute", "minutes", "monday", "tuesday", "wednesday", "thursday",
    "friday", "saturday", "sunday", "next", "last",
];

const ADJECTIVES: &[&str] = &[
    "urgent", "important", "critical", "quick", "brief", "short", "long", "new", "old", "good",
    "great", "bad", "optional", "free", "big", "small", "little", "nice", "happy", "sad", "busy",
    "late", "early", "first", "second", "final", "whole", "weekly", "daily", "monthly",
    "quarterly", "annual", "due", "overdue", "ready", "sure", "easy", "hard",
];

const INTERJECTIONS: &[&str] = &["hi", "hello", "hey", "thanks", "please", "ok", "okay", "ugh"];

/// Frequent task verbs that suffix rules would otherwise miss or mistag.
const KNOWN_VERBS: &[&str] = &[
    "call", "buy", "finish", "submit", "schedule", "book", "pay", "send", "write", "read",
    "review", "clean", "fix", "plan", "prepare", "pick", "email", "text", "meet", "visit",
    "check", "update", "renew", "cancel", "order", "drive", "arrive", "give", "leave", "make",
    "take", "bring", "return", "file", "print", "sign", "draft", "research", "organize",
    "remember", "remind", "forget", "need", "want", "start", "complete", "deliver", "ship",
    "water", "feed", "walk", "wash", "cook", "bake", "study", "practice", "go", "see", "get",
];

/// Nouns whose endings look adverbial or adjectival to the suffix rules.
const KNOWN_NOUNS: &[&str] = &[
    "family", "supply", "reply", "assembly", "july", "rally", "belly", "jelly", "anomaly",
    "monopoly", "italy", "handful", "mouthful", "spoonful",
];

const ADVERB_SUFFIXES: &[&str] = &["ly"];
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "less"];
const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify"];

/// Shortest word the suffix rules apply to, so "fly" or "red" stay nouns.
const SUFFIX_MIN_CHARS: usize = 5;

/// Ordered closed-class tables; earlier tables win for words listed twice.
const CLOSED_CLASSES: [(&[&str], LexicalClass); 9] = [
    (DETERMINERS, LexicalClass::Determiner),
    (PRONOUNS, LexicalClass::Pronoun),
    (PREPOSITIONS, LexicalClass::Preposition),
    (CONJUNCTIONS, LexicalClass::Conjunction),
    (AUXILIARIES, LexicalClass::Auxiliary),
    (TEMPORAL, LexicalClass::Adverb),
    (ADVERBS, LexicalClass::Adverb),
    (ADJECTIVES, LexicalClass::Adjective),
    (INTERJECTIONS, LexicalClass::Interjection),
];

/// Tag a single lower-cased word.
pub fn tag(word: &str) -> LexicalClass {
    if word.chars().any(|letter| letter.is_ascii_digit()) {
        return LexicalClass::Number;
    }
    if word.contains(['\'', '\u{2019}']) {
        return LexicalClass::Auxiliary;
    }
    if let Some((_, class)) = CLOSED_CLASSES
        .iter()
        .find(|(words, _)| words.contains(&word))
    {
        return *class;
    }
    if KNOWN_VERBS.contains(&word) {
        return LexicalClass::Verb;
    }
    if KNOWN_NOUNS.contains(&word) {
        return LexicalClass::Noun;
    }
    if word.chars().count() >= SUFFIX_MIN_CHARS {
        if has_suffix(word, ADVERB_SUFFIXES) {
            return LexicalClass::Adverb;
        }
        if has_suffix(word, ADJECTIVE_SUFFIXES) {
            return LexicalClass::Adjective;
        }
        if has_suffix(word, VERB_SUFFIXES) {
            return LexicalClass::Verb;
        }
    }
    LexicalClass::Noun
}

fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_classes() {
        assert_eq!(tag("the"), LexicalClass::Determiner);
        assert_eq!(tag("they"), LexicalClass::Pronoun);
        assert_eq!(tag("with"), LexicalClass::Preposition);
        assert_eq!(tag("because"), LexicalClass::Conjunction);
        assert_eq!(tag("should"), LexicalClass::Auxiliary);
        assert_eq!(tag("hello"), LexicalClass::Interjection);
    }

    #[test]
    fn test_temporal_words_are_adverbial() {
        for word in ["tomorrow", "morning", "friday", "tonight", "week"] {
            assert_eq!(tag(word), LexicalClass::Adverb, "{word}");
        }
    }

    #[test]
    fn test_open_classes() {
        assert_eq!(tag("call"), LexicalClass::Verb);
        assert_eq!(tag("scheduling"), LexicalClass::Verb);
        assert_eq!(tag("finalize"), LexicalClass::Verb);
        assert_eq!(tag("quickly"), LexicalClass::Adverb);
        assert_eq!(tag("careful"), LexicalClass::Adjective);
        assert_eq!(tag("urgent"), LexicalClass::Adjective);
        assert_eq!(tag("dentist"), LexicalClass::Noun);
        assert_eq!(tag("groceries"), LexicalClass::Noun);
    }

    #[test]
    fn test_known_nouns_override_suffix_rules() {
        for word in ["family", "supply", "reply", "assembly", "july", "handful"] {
            assert_eq!(tag(word), LexicalClass::Noun, "{word}");
        }
        assert_eq!(tag("weekly"), LexicalClass::Adjective);
        assert_eq!(tag("slowly"), LexicalClass::Adverb);
    }

    #[test]
    fn test_short_words_skip_suffix_rules() {
        assert_eq!(tag("fly"), LexicalClass::Noun);
        assert_eq!(tag("bed"), LexicalClass::Noun);
    }

    #[test]
    fn test_numbers_and_contractions() {
        assert_eq!(tag("3pm"), LexicalClass::Number);
        assert_eq!(tag("2025"), LexicalClass::Number);
        assert_eq!(tag("don't"), LexicalClass::Auxiliary);
        assert_eq!(tag("won\u{2019}t"), LexicalClass::Auxiliary);
    }

    #[test]
    fn test_content_classes() {
        assert!(LexicalClass::Noun.is_content());
        assert!(LexicalClass::Verb.is_content());
        assert!(!LexicalClass::Adjective.is_content());
        assert!(!LexicalClass::Adverb.is_content());
    }
}
