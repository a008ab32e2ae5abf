//! # Solace Self-Care Suggestions
//!
//! File: cli/src/responder/selfcare.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! When a message explicitly asks for advice, the responder answers with a
//! concrete self-care suggestion instead of a reply from the category banks.
//! The message is sorted into one topic by checking keyword groups in a fixed
//! order (physical, social, spiritual, practical); the first group that
//! matches wins, and `Emotional` catches everything else.
//!
//! Suggestions are not rotated: each advice request is independent.
//!
use super::usage::Selector;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Secondary topic used only for advice requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfCareTopic {
    Physical,
    Emotional,
    Social,
    Spiritual,
    Practical,
}

/// Keyword groups in the order they are tried. `Emotional` has no group.
static TOPIC_PATTERNS: LazyLock<Vec<(SelfCareTopic, Regex)>> = LazyLock::new(|| {
    [
        (
            SelfCareTopic::Physical,
            r"(?i)\b(tired|sleep|eat|food|body|physical|exercise|walk|shower)\b",
        ),
        (
            SelfCareTopic::Social,
            r"(?i)\b(people|talk|friend|family|social|alone|lonely|connection)\b",
        ),
        (
            SelfCareTopic::Spiritual,
            r"(?i)\b(meaning|purpose|spiritual|faith|belief|meditation|nature|soul)\b",
        ),
        (
            SelfCareTopic::Practical,
            r"(?i)\b(tasks|work|chores|overwhelmed|organize|decision|decide)\b",
        ),
    ]
    .into_iter()
    .map(|(topic, pattern)| {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("pattern for {} is invalid: {}", topic, e));
        (topic, regex)
    })
    .collect()
});

impl SelfCareTopic {
    /// Sorts a message into the first matching topic, `Emotional` if none match.
    pub fn classify(text: &str) -> Self {
        TOPIC_PATTERNS
            .iter()
            .find(|(_, regex)| regex.is_match(text))
            .map_or(SelfCareTopic::Emotional, |(topic, _)| *topic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelfCareTopic::Physical => "physical",
            SelfCareTopic::Emotional => "emotional",
            SelfCareTopic::Social => "social",
            SelfCareTopic::Spiritual => "spiritual",
            SelfCareTopic::Practical => "practical",
        }
    }

    /// Suggestions for this topic. Never empty.
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            SelfCareTopic::Physical => &[
                "Try a two-minute body scan and slow breathing; even brief regulation helps your nervous system.",
                "A short walk or gentle stretch can release some of the tension grief holds.",
                "Hydrate and eat something simple; basics matter when energy is low.",
                "If you can, set a small wind-down routine tonight (lights down, no phone, one calming page).",
            ],
            SelfCareTopic::Emotional => &[
                "Let feelings move without judging them—naming them softly can reduce their intensity.",
                "A few lines of journaling about ‘what hurts most’ can bring relief.",
                "It’s okay to feel moments of ease; they don’t erase your love.",
            ],
            SelfCareTopic::Social => &[
                "Text one trusted person: ‘Could you check in on me later? I’m having a rough day.’",
                "Ask for one concrete thing (a call, a walk, a meal) instead of ‘anything.’",
            ],
            SelfCareTopic::Spiritual => &[
                "If it helps, light a candle or sit in nature for five minutes and breathe with what’s here.",
                "A brief mindfulness practice—counting five things you can see/hear/feel—can ground you.",
            ],
            SelfCareTopic::Practical => &[
                "Break today into the next tiny step; set a 10-minute timer and stop when it dings.",
                "Defer big decisions; grief narrows focus—give yourself time.",
            ],
        }
    }
}

impl fmt::Display for SelfCareTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps a suggestion in the reply template.
pub fn wrap_suggestion(suggestion: &str) -> String {
    format!(
        "It sounds like you could use support. {} Would you like another suggestion?",
        suggestion
    )
}

/// Builds the full self-care reply for an advice request.
pub fn suggest(text: &str, selector: &mut Selector) -> (SelfCareTopic, String) {
    let topic = SelfCareTopic::classify(text);
    let bank = topic.suggestions();
    let candidates: Vec<usize> = (0..bank.len()).collect();
    let idx = selector.choose(&candidates).unwrap_or(0);
    (topic, wrap_suggestion(bank[idx]))
}
