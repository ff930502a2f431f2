use crate::model::Tier;

/// Percentage at or above which an attempt counts as passed.
pub const PASS_PERCENT: u8 = 80;

/// Percentage at or above which a failed attempt counts as close.
pub const CLOSE_PERCENT: u8 = 50;

/// `round(score / total * 100)`, rounding halves up.
///
/// Returns 0 when `total` is 0. `score` is clamped to `total`.
#[must_use]
pub fn percent_of(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total);
    let rounded = (score * 200 + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

//
// ─── CLASSIFICATION ────────────────────────────────────────────────────────────
//

/// Outcome bucket for a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Legendary,
    Perfect,
    Passed,
    Close,
    NeedsPractice,
}

impl Classification {
    /// Default result message for this outcome.
    #[must_use]
    pub fn message(self, percent: u8) -> String {
        match self {
            Classification::Legendary => format!("You are a Git Legend! Score: {percent}%"),
            Classification::Perfect => format!("Perfect! You got {percent}%"),
            Classification::Passed => format!("Well done! You passed with {percent}%"),
            Classification::Close => format!("You're close! You scored {percent}%"),
            Classification::NeedsPractice => format!("Keep learning! Score: {percent}%"),
        }
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(
            self,
            Classification::Legendary | Classification::Perfect | Classification::Passed
        )
    }
}

/// Classify a final percentage. The first matching rule wins:
/// expert at 80%+ is legendary, then 100% perfect, 80%+ passed, 50%+ close.
#[must_use]
pub fn classify(tier: Tier, percent: u8) -> Classification {
    if tier == Tier::Expert && percent >= PASS_PERCENT {
        Classification::Legendary
    } else if percent == 100 {
        Classification::Perfect
    } else if percent >= PASS_PERCENT {
        Classification::Passed
    } else if percent >= CLOSE_PERCENT {
        Classification::Close
    } else {
        Classification::NeedsPractice
    }
}

//
// ─── OFFERED ACTIONS ───────────────────────────────────────────────────────────
//

/// Follow-up actions available on the result screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OfferedActions {
    pub retry: bool,
    pub next_tier: bool,
    pub complete_all: bool,
}

impl OfferedActions {
    const RETRY: Self = Self {
        retry: true,
        next_tier: false,
        complete_all: false,
    };
    const NEXT_TIER: Self = Self {
        retry: false,
        next_tier: true,
        complete_all: false,
    };
    const COMPLETE_ALL: Self = Self {
        retry: false,
        next_tier: false,
        complete_all: true,
    };
    const NONE: Self = Self {
        retry: false,
        next_tier: false,
        complete_all: false,
    };

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

#[must_use]
pub fn offered_actions(tier: Tier, classification: Classification) -> OfferedActions {
    let has_next = tier.next().is_some();
    match classification {
        Classification::Legendary => OfferedActions::COMPLETE_ALL,
        Classification::Perfect if has_next => OfferedActions::NEXT_TIER,
        Classification::Perfect => OfferedActions::COMPLETE_ALL,
        Classification::Passed if has_next => OfferedActions::NEXT_TIER,
        Classification::Passed => OfferedActions::NONE,
        Classification::Close | Classification::NeedsPractice => OfferedActions::RETRY,
    }
}
