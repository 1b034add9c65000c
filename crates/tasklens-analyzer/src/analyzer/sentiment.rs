//! Lexicon-based sentiment scoring.
//!
//! Each scored word contributes its valence (roughly -4.0 to 4.0). A negator
//! up to three tokens earlier flips and damps the word, an intensifier right
//! before it pushes it further from zero, and exclamation marks amplify the
//! total. The sum is squashed into (-1, 1) with `s / sqrt(s² + 15)`.

use unicode_segmentation::UnicodeSegmentation as _;

use super::rules::TaskText;

const NEGATION_WINDOW: usize = 3;
const NEGATION_SCALAR: f64 = -0.74;
const INTENSIFIER_STEP: f64 = 0.293;
const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("celebrate", 2.7),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fantastic", 2.6),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("love", 3.2),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("relax", 1.9),
    ("success", 2.7),
    ("thanks", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("angry", -2.3),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broken", -1.7),
    ("dread", -2.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("late", -0.6),
    ("miss", -1.2),
    ("overdue", -1.3),
    ("painful", -2.2),
    ("problem", -1.7),
    ("sad", -2.1),
    ("sick", -2.3),
    ("stress", -1.8),
    ("stressful", -2.2),
    ("terrible", -2.1),
    ("tired", -1.9),
    ("ugh", -1.8),
    ("worried", -1.2),
    ("worst", -3.1),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "without", "don't", "dont", "doesn't",
    "didn't", "isn't", "aren't", "wasn't", "won't", "can't", "cannot", "shouldn't", "wouldn't",
];

const BOOSTERS: &[&str] = &[
    "very", "really", "extremely", "so", "super", "incredibly", "totally", "absolutely", "truly",
];

const DAMPENERS: &[&str] = &["slightly", "somewhat", "barely", "hardly", "little", "marginally"];

fn valence_of(token: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, valence)| *valence)
}

/// Apply negation and intensifiers from the tokens preceding a scored word.
fn adjust(valence: f64, preceding: &[&str]) -> f64 {
    let mut adjusted = valence;
    if let Some(previous) = preceding.last() {
        if BOOSTERS.contains(previous) {
            adjusted += INTENSIFIER_STEP.copysign(valence);
        } else if DAMPENERS.contains(previous) {
            adjusted -= INTENSIFIER_STEP.copysign(valence);
        }
    }
    if preceding.iter().any(|token| NEGATORS.contains(token)) {
        adjusted *= NEGATION_SCALAR;
    }
    adjusted
}

/// Score in `[-1.0, 1.0]`; `0.0` when no word carries sentiment.
pub fn score_sentiment(text: &TaskText<'_>) -> f64 {
    let tokens: Vec<&str> = text.lowered().unicode_words().collect();
    let mut sum = 0.0;
    let mut scored = 0;

    for (index, token) in tokens.iter().enumerate() {
        let Some(valence) = valence_of(token) else {
            continue;
        };
        let window = &tokens[index.saturating_sub(NEGATION_WINDOW)..index];
        sum += adjust(valence, window);
        scored += 1;
    }

    if scored == 0 || sum == 0.0 {
        return 0.0;
    }

    let exclamations = text.raw().matches('!').count().min(MAX_EXCLAMATIONS);
    sum += (EXCLAMATION_STEP * exclamations as f64).copysign(sum);

    let score = sum / sum.mul_add(sum, NORMALIZATION_ALPHA).sqrt();
    tracing::trace!("sentiment sum {sum:.3} over {scored} words -> {score:.3}");
    score.clamp(-1.0, 1.0)
}
