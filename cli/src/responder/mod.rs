//! # Solace Responder
//!
//! File: cli/src/responder/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! The rule-based core of Solace. A `Responder` turns one free-text message
//! into a `Reply`: a supportive reply text, the category it was filed under,
//! and the list of categories whose keywords were found.
//!
//! ## Architecture
//!
//! The responder is split into small, independently tested pieces:
//! - `category`: the closed `Category` enum and its priority order
//! - `matcher`: the crisis, category and advice-request patterns
//! - `bank`: primary replies and follow-up questions per category
//! - `selfcare`: topic classification and suggestions for advice requests
//! - `usage`: non-repeating selection and the random or lowest-index `Selector`
//!
//! `respond` runs these in a fixed order:
//! 1. Empty input gets a fixed invitation to share.
//! 2. Crisis language returns the crisis reply immediately. Nothing else is
//!    checked or reported once it fires.
//! 3. Every other category pattern is tested; the highest-priority hit wins,
//!    `Default` if there were none.
//! 4. An explicit request for advice replaces the result with a self-care
//!    suggestion, whatever category won in step 3.
//! 5. Otherwise a non-repeating reply (plus a follow-up, where the category
//!    has them) is taken from the winning category's bank.
//!
//! Every input yields a `Reply`; there is no error path.
//!
//! ## Examples
//!
//! ```rust
//! use solace::responder::{Category, Responder, ResponderOptions};
//!
//! let mut bot = Responder::new(ResponderOptions::deterministic());
//! let reply = bot.respond("I feel sad about our anniversary");
//! assert_eq!(reply.category, Category::Anniversary);
//! assert_eq!(reply.matched_terms, "anniversary,feeling_bad");
//! ```
//!
//! The only mutable state is the reply rotation. Keep one `Responder` per
//! conversation so one person's history never narrows another's replies.
//!
pub mod bank;
pub mod category;
pub mod matcher;
pub mod selfcare;
pub mod usage;

pub use category::{Category, PRIORITY};
pub use selfcare::SelfCareTopic;

use serde::Serialize;
use tracing::{debug, trace, warn};
use usage::{Selector, UsageState};

/// `matched_terms` value reported for advice requests.
pub const ADVICE_MATCHED_TERMS: &str = "self_care(help)";

/// Default locale hint; carried for localized crisis copy, not used by matching.
pub const DEFAULT_LOCALE_HINT: &str = "US/CA";

/// Construction-time options for a `Responder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderOptions {
    /// Collapse every random choice to the lowest candidate index.
    pub deterministic: bool,
    /// Region hint for crisis resources.
    pub locale_hint: String,
    /// Seed for random selection. Ignored when `deterministic` is set.
    pub seed: Option<u64>,
}

impl Default for ResponderOptions {
    fn default() -> Self {
        Self {
            deterministic: false,
            locale_hint: DEFAULT_LOCALE_HINT.to_string(),
            seed: None,
        }
    }
}

impl ResponderOptions {
    /// Options for reproducible output (tests, demos).
    pub fn deterministic() -> Self {
        Self {
            deterministic: true,
            ..Self::default()
        }
    }
}

/// The outcome of one `respond` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Reply shown to the user.
    pub text: String,
    /// Category the reply was drawn from.
    pub category: Category,
    /// Comma-joined, sorted names of every category whose pattern matched.
    /// `"crisis"` for crisis replies, `"self_care(help)"` for advice requests,
    /// empty when nothing matched.
    pub matched_terms: String,
}

impl Reply {
    fn new(category: Category, text: impl Into<String>, matched_terms: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category,
            matched_terms: matched_terms.into(),
        }
    }
}

/// Rule-based grief support responder.
#[derive(Debug, Clone)]
pub struct Responder {
    selector: Selector,
    replies_used: UsageState<Category>,
    followups_used: UsageState<Category>,
}

impl Responder {
    pub fn new(options: ResponderOptions) -> Self {
        let selector = Selector::new(options.deterministic, options.seed);
        Self {
            selector,
            replies_used: UsageState::new(),
            followups_used: UsageState::new(),
        }
    }

    /// Classifies `message` and produces a reply. Never fails.
    pub fn respond(&mut self, message: &str) -> Reply {
        let text = message.trim();
        trace!("Responding to message: {:?}", text);

        if text.is_empty() {
            debug!("Empty message, sending invitation to share");
            return Reply::new(Category::Default, bank::EMPTY_MESSAGE_REPLY, "");
        }

        if matcher::is_crisis(text) {
            warn!("Crisis language detected, returning crisis reply");
            let reply = self.choose_reply(Category::Crisis);
            return Reply::new(Category::Crisis, reply, Category::Crisis.as_str());
        }

        let hits = matcher::match_categories(text);
        let category = Category::resolve(&hits);
        debug!(
            "Matched {} categor{}, resolved to {}",
            hits.len(),
            if hits.len() == 1 { "y" } else { "ies" },
            category
        );

        // Advice requests win over whatever category was resolved above.
        if matcher::is_advice_request(text) {
            let (topic, suggestion) = selfcare::suggest(text, &mut self.selector);
            debug!("Advice request, self-care topic {} (overrides {})", topic, category);
            return Reply::new(Category::SelfCare, suggestion, ADVICE_MATCHED_TERMS);
        }

        let base = self.choose_reply(category);
        let text = match self.choose_followup(category) {
            Some(followup) => format!("{} {}", base, followup),
            None => base.to_string(),
        };
        Reply::new(category, text, matched_terms(&hits))
    }

    fn choose_reply(&mut self, category: Category) -> &'static str {
        let bank = bank::replies(category);
        let idx = self
            .replies_used
            .pick(category, bank.len(), &mut self.selector)
            .unwrap_or(0);
        bank[idx]
    }

    fn choose_followup(&mut self, category: Category) -> Option<&'static str> {
        let bank = bank::followups(category);
        self.followups_used
            .pick(category, bank.len(), &mut self.selector)
            .map(|idx| bank[idx])
    }
}

/// Sorted, comma-joined category names.
fn matched_terms<'a, I>(hits: I) -> String
where
    I: IntoIterator<Item = &'a Category>,
{
    let mut names: Vec<&str> = hits.into_iter().map(|c| c.as_str()).collect();
    names.sort_unstable();
    names.join(",")
}
