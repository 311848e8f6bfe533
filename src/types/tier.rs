//! Competitive tier definitions

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::{
    TIER_BRONZE_MIN, TIER_DIAMOND_MIN, TIER_GOLD_MIN, TIER_IRON_MIN, TIER_MYTHIC_MIN,
    TIER_PLATINUM_MIN, TIER_SILVER_MIN,
};

/// The seven ordered tiers. Declaration order is rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Mythic,
}

/// A tier and its inclusive minimum score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThreshold {
    pub tier: Tier,
    pub min_score: u32,
}

/// Fixed tier table, ascending by `min_score`
pub const DEFAULT_TIERS: [TierThreshold; 7] = [
    TierThreshold { tier: Tier::Iron, min_score: TIER_IRON_MIN },
    TierThreshold { tier: Tier::Bronze, min_score: TIER_BRONZE_MIN },
    TierThreshold { tier: Tier::Silver, min_score: TIER_SILVER_MIN },
    TierThreshold { tier: Tier::Gold, min_score: TIER_GOLD_MIN },
    TierThreshold { tier: Tier::Platinum, min_score: TIER_PLATINUM_MIN },
    TierThreshold { tier: Tier::Diamond, min_score: TIER_DIAMOND_MIN },
    TierThreshold { tier: Tier::Mythic, min_score: TIER_MYTHIC_MIN },
];

impl Tier {
    /// All tiers, lowest first
    pub fn all() -> &'static [Tier] {
        &[
            Tier::Iron,
            Tier::Bronze,
            Tier::Silver,
            Tier::Gold,
            Tier::Platinum,
            Tier::Diamond,
            Tier::Mythic,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Iron => "Iron",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
            Tier::Mythic => "Mythic",
        }
    }

    /// 1-indexed position in the tier ladder (Iron = 1, Mythic = 7)
    pub fn rank_number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Inclusive minimum score from the fixed table
    pub fn min_score(&self) -> u32 {
        DEFAULT_TIERS[*self as usize].min_score
    }

    /// Next tier up, if any
    pub fn next(&self) -> Option<Tier> {
        Tier::all().get(*self as usize + 1).copied()
    }

    /// Terminal color for this tier
    pub fn color(&self) -> Color {
        match self {
            Tier::Iron => Color::BrightBlack,
            Tier::Bronze => Color::TrueColor { r: 205, g: 127, b: 50 },
            Tier::Silver => Color::White,
            Tier::Gold => Color::Yellow,
            Tier::Platinum => Color::Cyan,
            Tier::Diamond => Color::Blue,
            Tier::Mythic => Color::Magenta,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
