//! Tier classifier: highest qualifying threshold wins

use crate::types::{Tier, TierThreshold, DEFAULT_TIERS};

/// Scan thresholds in ascending order; the last one satisfied wins.
///
/// Falls back to the first tier of the table (Iron for the default table)
/// when nothing qualifies.
pub fn tier_from_score(score: u32, tiers: &[TierThreshold]) -> Tier {
    let mut out = tiers.first().map(|t| t.tier).unwrap_or(Tier::Iron);
    for threshold in tiers {
        if score >= threshold.min_score {
            out = threshold.tier;
        }
    }
    out
}

/// Classify against the fixed tier table
pub fn classify(score: u32) -> Tier {
    tier_from_score(score, &DEFAULT_TIERS)
}
