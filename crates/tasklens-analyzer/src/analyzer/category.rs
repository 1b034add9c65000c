use tasklens_core::Category;

use super::rules::{Rule, TaskText, first_match};

/// Category rules in precedence order.
///
/// "appointment" appears under both Meeting and Health; Meeting is checked
/// first and therefore wins.
pub const CATEGORY_RULES: [Rule<Category>; 6] = [
    Rule::keywords(
        &[
            "meeting",
            "call",
            "conference",
            "interview",
            "appointment",
            "presentation",
            "discussion",
        ],
        Category::Meeting,
    ),
    Rule::keywords(
        &[
            "buy", "purchase", "shop", "grocery", "store", "mall", "order", "amazon",
        ],
        Category::Shopping,
    ),
    Rule::keywords(
        &[
            "project", "report", "document", "client", "office", "deadline", "proposal", "email",
        ],
        Category::Work,
    ),
    Rule::keywords(
        &[
            "doctor",
            "dentist",
            "hospital",
            "gym",
            "workout",
            "exercise",
            "medical",
            "appointment",
        ],
        Category::Health,
    ),
    Rule::keywords(
        &[
            "bank",
            "payment",
            "bill",
            "budget",
            "money",
            "finance",
            "investment",
            "tax",
        ],
        Category::Finance,
    ),
    Rule::keywords(
        &[
            "flight", "hotel", "vacation", "trip", "travel", "booking", "airport", "passport",
        ],
        Category::Travel,
    ),
];

/// Infer the topical bucket, defaulting to [`Category::General`].
pub fn categorize(text: &TaskText<'_>) -> Category {
    first_match(&CATEGORY_RULES, text).unwrap_or_default()
}
