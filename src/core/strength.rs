//! Strength normalizer: e1RM → base strength points.
//!
//! Two independently tuned curves. The bodyweight-relative curve is the
//! trusted one; the raw-e1RM curve tops out lower and is paired with a
//! separate missing-bodyweight penalty term by the aggregator.

use crate::config::StrengthConfig;
use crate::core::math::{clamp, round_half_up, safe_num};
use crate::types::Sex;

/// Which curve a score is computed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// e1RM / bodyweight ratio curve
    BodyweightRelative { bodyweight_kg: f64 },
    /// Raw e1RM curve, penalized
    RawE1rm,
}

impl Normalization {
    /// A bodyweight that is absent, non-finite or non-positive selects the raw curve
    pub fn resolve(bodyweight_kg: Option<f64>) -> Self {
        match bodyweight_kg.map(safe_num) {
            Some(bw) if bw > 0.0 => Normalization::BodyweightRelative { bodyweight_kg: bw },
            _ => Normalization::RawE1rm,
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            Normalization::BodyweightRelative { .. } => "Based on e1RM/BW.",
            Normalization::RawE1rm => "Based on e1RM only.",
        }
    }
}

/// Calibration multiplier on the strength ratio
pub fn sex_adjustment(sex: Sex, config: &StrengthConfig) -> f64 {
    match sex {
        Sex::Female => config.sex_adjust_female,
        Sex::Male => config.sex_adjust_male,
        Sex::Unspecified => config.sex_adjust_unspecified,
    }
}

/// Ratio ~1.0 novice, ~1.5 intermediate, ~2.0 strong, ~2.5+ elite
pub fn strength_from_ratio(ratio: f64, config: &StrengthConfig) -> i32 {
    let x = clamp(ratio, config.ratio_min, config.ratio_max);
    let t = (x - config.ratio_min) / (config.ratio_max - config.ratio_min);
    round_half_up(t.powf(config.ratio_exponent) * config.ratio_max_points)
}

pub fn strength_from_e1rm_only(e1rm_kg: f64, config: &StrengthConfig) -> i32 {
    let x = clamp(e1rm_kg, config.e1rm_min_kg, config.e1rm_max_kg);
    let t = (x - config.e1rm_min_kg) / (config.e1rm_max_kg - config.e1rm_min_kg);
    round_half_up(t.powf(config.e1rm_exponent) * config.e1rm_max_points)
}

/// Base strength points for a resolved e1RM
pub fn base_strength(
    e1rm_kg: f64,
    normalization: Normalization,
    sex: Sex,
    config: &StrengthConfig,
) -> i32 {
    match normalization {
        Normalization::BodyweightRelative { bodyweight_kg } => {
            let ratio = e1rm_kg / bodyweight_kg * sex_adjustment(sex, config);
            strength_from_ratio(ratio, config)
        }
        Normalization::RawE1rm => strength_from_e1rm_only(e1rm_kg, config),
    }
}

/// Base strength mapped to [0, 1] for display
pub fn normalized_strength(base: i32, config: &StrengthConfig) -> f64 {
    clamp(base as f64 / config.ratio_max_points, 0.0, 1.0)
}
