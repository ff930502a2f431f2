use crate::model::{Tier, TierTable};

/// Best percentage reached per tier for the lifetime of the process.
///
/// Starts at 0 for every tier and never decreases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    best: TierTable<u8>,
}

impl HighScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, tier: Tier) -> u8 {
        *self.best.get(tier)
    }

    /// Store `percent` for `tier` if it strictly beats the current best.
    ///
    /// Returns `true` when the table changed.
    pub fn record(&mut self, tier: Tier, percent: u8) -> bool {
        let slot = self.best.get_mut(tier);
        if percent > *slot {
            *slot = percent;
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, u8)> + '_ {
        self.best.iter().map(|(tier, percent)| (tier, *percent))
    }
}
