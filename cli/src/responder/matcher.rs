//! # Solace Keyword Matchers
//!
//! File: cli/src/responder/matcher.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Case-insensitive regex tables used to classify a message:
//! - the crisis pattern, checked before anything else
//! - one pattern per ordinary category (every category except `Crisis` and `Default`)
//! - the explicit advice-request pattern that routes to self-care suggestions
//!
//! All patterns are compiled once, on first use, and shared process-wide.
//! Matching is stateless: the same text always yields the same hits.
//!
use super::category::Category;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Self-harm and suicide language. The apostrophe in `can't` / `don't` is optional
/// and may be typographic.
static CRISIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:suicid(?:e|al)|kill myself|end my life|can['’]?t go on|don['’]?t want to live|self[-\s]?harm|hurt myself|take my life)",
    )
    .expect("crisis pattern is valid")
});

/// Explicit requests for guidance ("any tips?", "what should I do").
static ADVICE_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(suggest|recommendation|advice|tip|help|idea|what\s+(?:can|should)\s+i\s+do)\b")
        .expect("advice pattern is valid")
});

/// Ordinary category patterns. Order here is irrelevant; ties are broken by `PRIORITY`.
static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    [
        (Category::Greeting, r"\b(hello|hi|hey|greetings)\b"),
        (
            Category::FeelingBad,
            r"\b(sad|depressed|overwhelmed|exhausted|tired|down|lonely|alone|lost|cry(?:ing)?|tears|difficult|hard)\b",
        ),
        (
            Category::FeelingBetter,
            r"\b(better|good|okay|ok|fine|alright|improving|hopeful|positive)\b",
        ),
        (
            Category::Memories,
            r"(?:\bmemory\b|\bmemories\b|\bremember(?:ed)?\b|\bmiss(?:ing)?\b|loved\s+one)",
        ),
        (
            Category::SleepIssues,
            r"\b(sleep|insomnia|nightmares?|dreams?|awake|bed)\b",
        ),
        (
            Category::Anniversary,
            r"\b(anniversary|birthday|holiday|christmas|thanksgiving|special\s+day|year\s+since|month\s+since)\b",
        ),
        // "should"/"could"/"would" are deliberately unanchored.
        (
            Category::Guilt,
            r"(?:\bguilt(?:y)?\b|\bblame(?:d)?\b|\bfault\b|\bregret\b|should(?:\s+have)?|could(?:\s+have)?|would(?:\s+have)?|\bif only\b|\bsorry\b)",
        ),
        (
            Category::Anger,
            r"\b(angry|anger|mad|unfair|cruel|hate|resent(?:ment)?)\b",
        ),
        (
            Category::SelfCare,
            r"(?:self[-\s]?care|take\s+care|help\s+myself|\b(shower|eat|eating|food|exercise|walk)\b)",
        ),
        (
            Category::Support,
            r"\b(support|friends?|family|help|talk(?:ing)?|listen(?:ing)?)\b",
        ),
        (
            Category::ProfessionalHelp,
            r"\b(therapy|therapist|counsel(?:l)?ing|counsel(?:l)?or|professional|doctor|psychologist|psychiatrist)\b",
        ),
    ]
    .into_iter()
    .map(|(category, pattern)| {
        let regex = Regex::new(&format!("(?i){}", pattern))
            .unwrap_or_else(|e| panic!("pattern for {} is invalid: {}", category, e));
        (category, regex)
    })
    .collect()
});

/// True if the text contains crisis language.
pub fn is_crisis(text: &str) -> bool {
    CRISIS.is_match(text)
}

/// True if the text explicitly asks for advice or suggestions.
pub fn is_advice_request(text: &str) -> bool {
    ADVICE_REQUEST.is_match(text)
}

/// Every ordinary category whose pattern matches the text. Never contains
/// `Crisis` or `Default`.
pub fn match_categories(text: &str) -> BTreeSet<Category> {
    CATEGORY_PATTERNS
        .iter()
        .filter(|(_, regex)| regex.is_match(text))
        .map(|(category, _)| *category)
        .collect()
}
