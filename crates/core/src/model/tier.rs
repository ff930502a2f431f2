use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ─── TIER ──────────────────────────────────────────────────────────────────────
//

/// Difficulty level of a question set.
///
/// Tiers are totally ordered: `Easy < Intermediate < Hard < Expert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Intermediate,
    Hard,
    Expert,
}

impl Tier {
    /// All tiers in progression order.
    pub const ALL: [Tier; 4] = [Tier::Easy, Tier::Intermediate, Tier::Hard, Tier::Expert];

    /// The tier unlocked after this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Easy => Some(Tier::Intermediate),
            Tier::Intermediate => Some(Tier::Hard),
            Tier::Hard => Some(Tier::Expert),
            Tier::Expert => None,
        }
    }

    #[must_use]
    pub fn is_final(self) -> bool {
        self.next().is_none()
    }

    /// Stable lower-case key, as used in catalog files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Intermediate => "intermediate",
            Tier::Hard => "hard",
            Tier::Expert => "expert",
        }
    }

    /// Upper-case display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Easy => "EASY",
            Tier::Intermediate => "INTERMEDIATE",
            Tier::Hard => "HARD",
            Tier::Expert => "EXPERT",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Tier::Easy => 0,
            Tier::Intermediate => 1,
            Tier::Hard => 2,
            Tier::Expert => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a tier from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier: {raw}")]
pub struct ParseTierError {
    raw: String,
}

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseTierError { raw: s.to_string() })
    }
}

//
// ─── TIER TABLE ────────────────────────────────────────────────────────────────
//

/// Exactly one value per tier, indexed by `Tier`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TierTable<T> {
    slots: [T; 4],
}

impl<T> TierTable<T> {
    #[must_use]
    pub fn new(easy: T, intermediate: T, hard: T, expert: T) -> Self {
        Self {
            slots: [easy, intermediate, hard, expert],
        }
    }

    #[must_use]
    pub fn from_fn(mut f: impl FnMut(Tier) -> T) -> Self {
        Self {
            slots: Tier::ALL.map(&mut f),
        }
    }

    #[must_use]
    pub fn get(&self, tier: Tier) -> &T {
        &self.slots[tier.slot()]
    }

    pub fn get_mut(&mut self, tier: Tier) -> &mut T {
        &mut self.slots[tier.slot()]
    }

    /// Iterate `(tier, value)` pairs in progression order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::ALL.into_iter().zip(self.slots.iter())
    }
}
