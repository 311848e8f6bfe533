//! Scoring configuration: every curve exponent, cap and guardrail threshold
//! used by the scorer, grouped by pipeline stage.
//!
//! `ScoringConfig::default()` is the canonical Forgerank calibration. Tier
//! thresholds are not part of this structure; they are a fixed table
//! (see [`crate::types::DEFAULT_TIERS`]).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// E1RM estimation and input coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Weight floor applied before the Epley extrapolation (kg)
    pub min_weight_kg: f64,
    /// Reps divisor in `weight * (1 + reps / divisor)`
    pub epley_divisor: f64,
    /// RPE factor at RPE 5, before clamping
    pub rpe_factor_base: f64,
    /// RPE factor gained per RPE point above 5
    pub rpe_factor_per_point: f64,
    pub rpe_factor_min: f64,
    pub rpe_factor_max: f64,
    /// Effort assumed when no RPE is logged
    pub default_rpe: f64,
    pub rpe_min: f64,
    pub rpe_max: f64,
    pub reps_min: u32,
    pub reps_max: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_weight_kg: 0.1,
            epley_divisor: 30.0,
            rpe_factor_base: 0.85,
            rpe_factor_per_point: 0.03,
            rpe_factor_min: 0.88,
            rpe_factor_max: 1.02,
            default_rpe: 8.5,
            rpe_min: 5.0,
            rpe_max: 10.0,
            reps_min: 1,
            reps_max: 30,
        }
    }
}

/// Base strength curves (bodyweight-relative and raw e1RM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthConfig {
    pub ratio_min: f64,
    pub ratio_max: f64,
    /// Concave exponent for the e1RM/BW curve
    pub ratio_exponent: f64,
    /// Points at ratio_max; also the divisor for `normalized_strength`
    pub ratio_max_points: f64,
    pub e1rm_min_kg: f64,
    pub e1rm_max_kg: f64,
    /// Exponent for the raw e1RM curve (no bodyweight)
    pub e1rm_exponent: f64,
    pub e1rm_max_points: f64,
    /// Calibration multipliers on the e1RM/BW ratio
    pub sex_adjust_female: f64,
    pub sex_adjust_male: f64,
    pub sex_adjust_unspecified: f64,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            ratio_min: 0.2,
            ratio_max: 3.2,
            ratio_exponent: 0.62,
            ratio_max_points: 700.0,
            e1rm_min_kg: 1.0,
            e1rm_max_kg: 350.0,
            e1rm_exponent: 0.58,
            e1rm_max_points: 640.0,
            sex_adjust_female: 1.08,
            sex_adjust_male: 1.0,
            sex_adjust_unspecified: 1.02,
        }
    }
}

/// Additive bonus terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusConfig {
    /// Reps counted at full value
    pub rep_sweet_spot: u32,
    /// Value lost per rep above the sweet spot
    pub rep_decay: f64,
    pub rep_points_per_rep: f64,
    /// RPE at which effort starts counting
    pub effort_floor_rpe: f64,
    /// RPE at which effort counts fully
    pub effort_full_rpe: f64,

    pub volume_scale: f64,
    pub volume_max_points: f64,
    /// Fraction of e1RM used as working weight when no set weight is known
    pub volume_e1rm_fraction: f64,

    pub consistency_reference_sessions: f64,
    pub consistency_exponent: f64,
    pub consistency_max_points: f64,
    pub consistency_max_sessions: u32,

    pub pr_scale: f64,
    pub pr_min_points: f64,
    pub pr_max_points: f64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            rep_sweet_spot: 12,
            rep_decay: 0.55,
            rep_points_per_rep: 6.0,
            effort_floor_rpe: 7.0,
            effort_full_rpe: 10.0,
            volume_scale: 1.2,
            volume_max_points: 60.0,
            volume_e1rm_fraction: 0.85,
            consistency_reference_sessions: 10.0,
            consistency_exponent: 0.9,
            consistency_max_points: 70.0,
            consistency_max_sessions: 14,
            pr_scale: 150.0,
            pr_min_points: 6.0,
            pr_max_points: 55.0,
        }
    }
}

/// Anti-cheat heuristics and penalties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailConfig {
    pub implausible_min_reps: u32,
    pub implausible_min_rpe: f64,
    /// Hard cap on the total when the set is implausible
    pub implausible_cap: u32,
    /// Fractional gain over the previous best tolerated without penalty
    pub jump_gain_threshold: f64,
    pub jump_scale: f64,
    pub jump_min_penalty: f64,
    pub jump_max_penalty: f64,
    /// e1RM below this is never ranked (kg)
    pub too_light_kg: f64,
    /// Points removed when no bodyweight is supplied
    pub missing_bodyweight_penalty: i32,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            implausible_min_reps: 20,
            implausible_min_rpe: 9.5,
            implausible_cap: 220,
            jump_gain_threshold: 0.12,
            jump_scale: 400.0,
            jump_min_penalty: 15.0,
            jump_max_penalty: 160.0,
            too_light_kg: 10.0,
            missing_bodyweight_penalty: 45,
        }
    }
}

/// Complete scoring configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub estimator: EstimatorConfig,
    pub strength: StrengthConfig,
    pub bonus: BonusConfig,
    pub guardrail: GuardrailConfig,
}

impl ScoringConfig {
    /// Check that every constant is usable by the scorer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.estimator;
        positive("estimator.min_weight_kg", e.min_weight_kg)?;
        positive("estimator.epley_divisor", e.epley_divisor)?;
        finite("estimator.rpe_factor_base", e.rpe_factor_base)?;
        finite("estimator.rpe_factor_per_point", e.rpe_factor_per_point)?;
        range("estimator.rpe_factor", e.rpe_factor_min, e.rpe_factor_max)?;
        range("estimator.rpe", e.rpe_min, e.rpe_max)?;
        finite("estimator.default_rpe", e.default_rpe)?;
        range("estimator.reps", e.reps_min as f64, e.reps_max as f64)?;
        positive("estimator.reps_min", e.reps_min as f64)?;

        let s = &self.strength;
        range("strength.ratio", s.ratio_min, s.ratio_max)?;
        if s.ratio_min == s.ratio_max {
            return Err(ConfigError::InvertedRange {
                field: "strength.ratio",
                min: s.ratio_min,
                max: s.ratio_max,
            });
        }
        positive("strength.ratio_exponent", s.ratio_exponent)?;
        positive("strength.ratio_max_points", s.ratio_max_points)?;
        range("strength.e1rm_kg", s.e1rm_min_kg, s.e1rm_max_kg)?;
        if s.e1rm_min_kg == s.e1rm_max_kg {
            return Err(ConfigError::InvertedRange {
                field: "strength.e1rm_kg",
                min: s.e1rm_min_kg,
                max: s.e1rm_max_kg,
            });
        }
        positive("strength.e1rm_exponent", s.e1rm_exponent)?;
        positive("strength.e1rm_max_points", s.e1rm_max_points)?;
        positive("strength.sex_adjust_female", s.sex_adjust_female)?;
        positive("strength.sex_adjust_male", s.sex_adjust_male)?;
        positive("strength.sex_adjust_unspecified", s.sex_adjust_unspecified)?;

        let b = &self.bonus;
        finite("bonus.rep_decay", b.rep_decay)?;
        finite("bonus.rep_points_per_rep", b.rep_points_per_rep)?;
        range("bonus.effort_rpe", b.effort_floor_rpe, b.effort_full_rpe)?;
        if b.effort_floor_rpe == b.effort_full_rpe {
            return Err(ConfigError::InvertedRange {
                field: "bonus.effort_rpe",
                min: b.effort_floor_rpe,
                max: b.effort_full_rpe,
            });
        }
        positive("bonus.volume_scale", b.volume_scale)?;
        positive("bonus.volume_max_points", b.volume_max_points)?;
        positive("bonus.volume_e1rm_fraction", b.volume_e1rm_fraction)?;
        positive("bonus.consistency_reference_sessions", b.consistency_reference_sessions)?;
        positive("bonus.consistency_exponent", b.consistency_exponent)?;
        positive("bonus.consistency_max_points", b.consistency_max_points)?;
        positive("bonus.pr_scale", b.pr_scale)?;
        range("bonus.pr_points", b.pr_min_points, b.pr_max_points)?;

        let g = &self.guardrail;
        finite("guardrail.implausible_min_rpe", g.implausible_min_rpe)?;
        positive("guardrail.jump_gain_threshold", g.jump_gain_threshold)?;
        positive("guardrail.jump_scale", g.jump_scale)?;
        range("guardrail.jump_penalty", g.jump_min_penalty, g.jump_max_penalty)?;
        finite("guardrail.too_light_kg", g.too_light_kg)?;

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn range(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    finite(field, min)?;
    finite(field, max)?;
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}
