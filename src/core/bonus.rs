//! Bonus calculators: independent additive terms.
//!
//! All are sub-linear by construction so none can dominate base strength.

use crate::config::BonusConfig;
use crate::core::math::{clamp, round_half_up, safe_num};

/// Rep quality: reps up to the sweet spot count fully, extra reps count
/// against it at `rep_decay`. Scaled by effort (0 at RPE 7, 1 at RPE 10).
pub fn rep_quality_bonus(reps: u32, rpe: f64, config: &BonusConfig) -> i32 {
    let r = reps as f64;
    let sweet_spot = config.rep_sweet_spot as f64;
    let effort = clamp(
        (rpe - config.effort_floor_rpe) / (config.effort_full_rpe - config.effort_floor_rpe),
        0.0,
        1.0,
    );
    let sweet = if r <= sweet_spot {
        r
    } else {
        sweet_spot - (r - sweet_spot) * config.rep_decay
    };
    round_half_up(clamp(sweet, 0.0, sweet_spot) * config.rep_points_per_rep * effort)
}

/// Volume: sqrt of set tonnage, capped
pub fn volume_bonus(weight_kg: f64, reps: u32, config: &BonusConfig) -> i32 {
    let tonnage = weight_kg.max(0.0) * reps as f64;
    round_half_up(clamp(
        tonnage.sqrt() * config.volume_scale,
        0.0,
        config.volume_max_points,
    ))
}

/// Consistency: `(sessions / 10)^0.9 × 70`, sessions clamped to [0, 14]
pub fn consistency_bonus(sessions_in_window: u32, config: &BonusConfig) -> i32 {
    let s = sessions_in_window.min(config.consistency_max_sessions) as f64;
    round_half_up(clamp(
        (s / config.consistency_reference_sessions).powf(config.consistency_exponent)
            * config.consistency_max_points,
        0.0,
        config.consistency_max_points,
    ))
}

/// Fractional gain of `current` over a usable previous best.
///
/// `None` when there is no baseline (absent, non-finite or non-positive).
pub fn fractional_gain(current_e1rm_kg: f64, previous_best_e1rm_kg: Option<f64>) -> Option<f64> {
    let previous = safe_num(previous_best_e1rm_kg?);
    if previous <= 0.0 {
        return None;
    }
    Some((current_e1rm_kg - previous) / previous)
}

/// PR bonus: `sqrt(gain) × 150`, clamped to [6, 55]; 0 without a genuine gain.
///
/// 1% PR => ~15 pts before the floor, 10% => ~47, larger gains hit the cap.
pub fn pr_bonus(current_e1rm_kg: f64, previous_best_e1rm_kg: Option<f64>, config: &BonusConfig) -> i32 {
    match fractional_gain(current_e1rm_kg, previous_best_e1rm_kg) {
        Some(gain) if gain > 0.0 => round_half_up(clamp(
            gain.sqrt() * config.pr_scale,
            config.pr_min_points,
            config.pr_max_points,
        )),
        _ => 0,
    }
}
