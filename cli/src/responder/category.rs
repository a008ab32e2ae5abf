//! # Solace Reply Categories
//!
//! File: cli/src/responder/category.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Defines the closed set of categories a message can be classified into,
//! together with the single priority order used to break ties when a message
//! matches several categories at once.
//!
//! `Crisis` sits at the top of the order but is never resolved through it:
//! the crisis matcher runs before any other matching and returns on its own.
//! `Default` sits at the bottom and is the fallback when nothing matched.
//!
use serde::{Deserialize, Serialize};
use std::fmt;

/// A topical/emotional category for an incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Crisis,
    Anniversary,
    SleepIssues,
    FeelingBad,
    Guilt,
    Anger,
    Memories,
    SelfCare,
    Support,
    ProfessionalHelp,
    FeelingBetter,
    Greeting,
    Default,
}

/// Every category, highest priority first.
pub const PRIORITY: [Category; 13] = [
    Category::Crisis,
    Category::Anniversary,
    Category::SleepIssues,
    Category::FeelingBad,
    Category::Guilt,
    Category::Anger,
    Category::Memories,
    Category::SelfCare,
    Category::Support,
    Category::ProfessionalHelp,
    Category::FeelingBetter,
    Category::Greeting,
    Category::Default,
];

impl Category {
    /// The snake_case wire name, as reported in `Reply::category` and `matched_terms`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Crisis => "crisis",
            Category::Anniversary => "anniversary",
            Category::SleepIssues => "sleep_issues",
            Category::FeelingBad => "feeling_bad",
            Category::Guilt => "guilt",
            Category::Anger => "anger",
            Category::Memories => "memories",
            Category::SelfCare => "self_care",
            Category::Support => "support",
            Category::ProfessionalHelp => "professional_help",
            Category::FeelingBetter => "feeling_better",
            Category::Greeting => "greeting",
            Category::Default => "default",
        }
    }

    /// Position in `PRIORITY`; lower is more urgent.
    pub fn rank(self) -> usize {
        PRIORITY
            .iter()
            .position(|c| *c == self)
            .unwrap_or(PRIORITY.len())
    }

    /// Picks the highest-priority category among `hits`, or `Default` if there are none.
    pub fn resolve<'a, I>(hits: I) -> Category
    where
        I: IntoIterator<Item = &'a Category>,
    {
        hits.into_iter()
            .copied()
            .min_by_key(|c| c.rank())
            .unwrap_or(Category::Default)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
