//! # Solace Reply Banks
//!
//! File: cli/src/responder/bank.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! Fixed reply text. Every category has at least one primary reply; only a
//! handful carry follow-up questions.
//!

use super::category::Category;

/// Reply used when the caller sends nothing but whitespace.
pub const EMPTY_MESSAGE_REPLY: &str = "I’m here. Say anything that feels manageable to share.";

/// Opening line sent by chat front-ends before the user has said anything.
pub const WELCOME_MESSAGE: &str = "Hello, I'm here to support you. How are you feeling today?";

const GREETING: &[&str] = &[
    "Hello—I’m here with you. How are you feeling right now?",
    "Welcome. This is a safe space to share what’s on your heart. How are you doing today?",
    "Hi. I’m here to listen. What feels heaviest at the moment?",
];

const FEELING_BAD: &[&str] = &[
    "I’m hearing a lot of pain. Grief can feel like it takes over everything. What’s been most intense today?",
    "That sounds really hard. Your feelings make sense after a loss. Do you want to say more about what’s coming up?",
    "It’s okay to not be okay. If you can, tell me what’s underneath the sadness right now.",
];

const FEELING_BETTER: &[&str] = &[
    "I’m glad there’s a bit of ease. Grief comes in waves; it’s okay to let this calmer moment be real.",
    "Good to hear. Relief and sadness can coexist—both are valid. What helped a little today?",
    "Noticing a better moment matters. What seems to support you when it shows up?",
];

const MEMORIES: &[&str] = &[
    "Thank you for sharing that. What’s a memory that feels especially alive right now?",
    "Holding onto their stories can be grounding. What was one of their quirks you loved?",
    "I’m honored you shared that. What qualities of theirs do you carry with you?",
];

const SLEEP_ISSUES: &[&str] = &[
    "Sleep can get disrupted by grief. Would a simple wind-down—dim lights, light reading, slow breaths—be worth trying tonight?",
    "Not sleeping makes everything harder. Some people jot down looping thoughts before bed—could that help you?",
    "If this keeps up, talking with a clinician might help. For now, even a brief rest routine can be gentler on your system.",
];

const ANNIVERSARY: &[&str] = &[
    "Dates can reopen the ache. Would a small ritual—lighting a candle, visiting a place, sharing a story—feel supportive?",
    "Milestones are tender. Creating a new tradition to honor them can help hold the day.",
    "It’s natural for emotions to rise around anniversaries. Is there someone you’d want beside you that day?",
];

const GUILT: &[&str] = &[
    "Guilt shows up for many people after a loss. Relationships are imperfect; love isn’t measured by flawless choices.",
    "You sound very hard on yourself. If a friend said this to you, what compassion would you offer them?",
    "‘If only’ thoughts are common and painful. We can explore them gently if you’d like.",
];

const ANGER: &[&str] = &[
    "Anger is a valid part of grief. It can point to what mattered deeply. How does it show up in your body?",
    "Your anger makes sense. Is there a safe way to let it move—writing, movement, or hitting a pillow?",
    "Many feel uneasy with anger, but it’s normal after loss. We can sit with it here.",
];

const SELF_CARE: &[&str] = &[
    "Small, doable care counts. A glass of water, a short walk, or stepping outside can be enough for now.",
    "What’s one tiny act of care you could manage in the next hour?",
    "Self-care in grief can be permission to feel, rest, and do less. What might that look like today?",
];

const SUPPORT: &[&str] = &[
    "Having company helps. Who in your world can simply listen without fixing?",
    "It’s okay to ask for specific help. What would be most useful—meals, child care, a check-in call?",
    "Peer groups can help you feel less alone. Would you like ideas on how to find one?",
];

const PROFESSIONAL_HELP: &[&str] = &[
    "A grief-informed therapist can offer steadiness and tools. Want a few ways to search?",
    "Professional support can widen your coping options—telehealth is common if that’s easier.",
    "If you’re open to it, we can outline what a first session might look like.",
];

const DEFAULT: &[&str] = &[
    "Thank you for sharing. What feels most challenging right now?",
    "I’m here. Would you like to tell me a bit more about what you’re experiencing?",
    "Grief is complex. Where does it tend to hit the hardest for you?",
];

const CRISIS: &[&str] = &[
    "I’m really glad you told me. You deserve immediate support. If you’re in danger or thinking of harming yourself, please call local emergency services now. If you’re in the U.S. or Canada, you can dial 988 for the Suicide & Crisis Lifeline. If possible, reach out to someone you trust to stay with you. I’ll stay with you here, too. Can you tell me where you are and if you’re safe right now?",
];

/// Primary replies for a category. Never empty.
pub fn replies(category: Category) -> &'static [&'static str] {
    match category {
        Category::Crisis => CRISIS,
        Category::Anniversary => ANNIVERSARY,
        Category::SleepIssues => SLEEP_ISSUES,
        Category::FeelingBad => FEELING_BAD,
        Category::Guilt => GUILT,
        Category::Anger => ANGER,
        Category::Memories => MEMORIES,
        Category::SelfCare => SELF_CARE,
        Category::Support => SUPPORT,
        Category::ProfessionalHelp => PROFESSIONAL_HELP,
        Category::FeelingBetter => FEELING_BETTER,
        Category::Greeting => GREETING,
        Category::Default => DEFAULT,
    }
}

/// Follow-up questions for a category; empty when the category has none.
pub fn followups(category: Category) -> &'static [&'static str] {
    match category {
        Category::FeelingBad => &[
            "When did you first notice today’s dip?",
            "Where do you feel it in your body?",
        ],
        Category::Memories => &[
            "Would you like to share a photo or another story sometime?",
            "How do you like to honor them day-to-day?",
        ],
        Category::Guilt => &[
            "What part of this guilt feels the loudest?",
            "If you rewind that moment, what need were you trying to meet?",
        ],
        Category::Anger => &[
            "Is there a safe outlet that has helped before?",
            "What does the anger want you to protect?",
        ],
        Category::SelfCare => &[
            "What’s one tiny step you could take in the next ten minutes?",
            "Who could text you a check-in later today?",
        ],
        _ => &[],
    }
}
