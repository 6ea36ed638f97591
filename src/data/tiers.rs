use crate::models::ScoreTier;

const DISCOVERY_CALL: &str = "Book a Discovery Call \u{2192}";

/// Highest bracket first. Ranges are disjoint and cover 0..=10.
pub static SCORE_TIERS: [ScoreTier; 4] = [
    ScoreTier {
        min: 9,
        max: 10,
        description: "You're running a high-performing loyalty program. Customers likely feel seen, valued, and rewarded\u{2014}and it shows. You're ahead of the curve, and honestly, I want to know your secret.",
        button_text: "Tell Me Your Loyalty Secret \u{2192}",
    },
    ScoreTier {
        min: 6,
        max: 8,
        description: "You've got a solid foundation. The essentials are there, but there's probably room to tighten up how you communicate, segment, or differentiate rewards. If you're not sure what to adjust first, I can help you figure that out.",
        button_text: DISCOVERY_CALL,
    },
    ScoreTier {
        min: 3,
        max: 5,
        description: "Your program exists, but it may not be doing what you want it to. If customers aren't engaging, the issue might be clarity, usability, or relevance. Let's take a look together and identify what's holding it back.",
        button_text: DISCOVERY_CALL,
    },
    ScoreTier {
        min: 0,
        max: 2,
        description: "Your loyalty program might be hurting more than helping. If it feels invisible, confusing, or like a checkbox with no return, it's time to rebuild. I can help you design something that actually drives repeat visits.",
        button_text: DISCOVERY_CALL,
    },
];

/// Fallback when no bracket matches: the last (lowest-scoring) entry.
pub static LOWEST_TIER: &ScoreTier = &SCORE_TIERS[SCORE_TIERS.len() - 1];
