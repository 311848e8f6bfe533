//! Score aggregator: runs the full pipeline for one set.
//!
//! set → e1RM → base strength + bonuses + guardrails → clamp → caps → tier
//!
//! Pure: no state is kept between calls, and identical inputs always give
//! identical breakdowns.

use tracing::{debug, trace};

use crate::config::ScoringConfig;
use crate::core::bonus::{consistency_bonus, pr_bonus, rep_quality_bonus, volume_bonus};
use crate::core::classifier::classify;
use crate::core::e1rm::{coerce_reps, coerce_rpe, estimate_e1rm_kg};
use crate::core::guardrail::{is_set_plausible, is_too_light, jump_penalty};
use crate::core::math::{round1, safe_num};
use crate::core::strength::{base_strength, normalized_strength, Normalization};
use crate::error::ConfigError;
use crate::types::{
    ScoreBreakdown, ScoreFlag, ScorePart, ScoreReason, ScoringInput, Sex, Tier, UnitSystem,
};
use crate::{SCORE_MAX, SCORE_MIN};

/// Forgerank scorer bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct ForgerankScorer {
    config: ScoringConfig,
}

impl ForgerankScorer {
    /// Scorer with the canonical calibration
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with a custom calibration, validated up front
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Full pipeline from raw set data
    pub fn score(&self, input: &ScoringInput) -> ScoreBreakdown {
        let cfg = &self.config;

        // Sanitize
        let weight_kg = if input.e1rm_kg.is_some() {
            0.0
        } else {
            input.unit.to_kg(safe_num(input.weight))
        };
        let reps = coerce_reps(input.reps, &cfg.estimator);
        let rpe = coerce_rpe(input.rpe, &cfg.estimator);

        let e1rm_kg = match input.e1rm_kg {
            Some(e1rm) => safe_num(e1rm),
            None => estimate_e1rm_kg(weight_kg, reps, rpe, &cfg.estimator),
        };

        if !e1rm_kg.is_finite() || e1rm_kg <= 0.0 {
            debug!(exercise = %input.exercise_id, e1rm_kg, "invalid e1RM, not scoring");
            return insufficient_data();
        }

        let mut flags = Vec::new();
        let mut parts = Vec::new();

        // Base strength (dominant term)
        let normalization = Normalization::resolve(input.bodyweight_kg);
        if normalization == Normalization::RawE1rm {
            flags.push(ScoreFlag::MissingBodyweight);
        }
        let base = base_strength(e1rm_kg, normalization, input.sex, &cfg.strength);
        parts.push(ScorePart::new(ScoreReason::BaseStrength, base, normalization.note()));

        parts.push(ScorePart::new(
            ScoreReason::RepQuality,
            rep_quality_bonus(reps, rpe, &cfg.bonus),
            format!("Reps={}, RPE≈{}.", reps, round1(rpe)),
        ));

        // Override path has no set weight; assume a working set near e1RM
        let working_kg = if weight_kg != 0.0 {
            weight_kg
        } else {
            e1rm_kg * cfg.bonus.volume_e1rm_fraction
        };
        parts.push(ScorePart::new(
            ScoreReason::VolumeBonus,
            volume_bonus(working_kg, reps, &cfg.bonus),
            "Small volume reward.",
        ));

        let sessions = input
            .sessions_in_last_14_days
            .unwrap_or(0)
            .min(cfg.bonus.consistency_max_sessions);
        let consistency = consistency_bonus(sessions, &cfg.bonus);
        if consistency != 0 {
            parts.push(ScorePart::new(
                ScoreReason::ConsistencyBonus,
                consistency,
                format!("{} sessions in last 14 days.", sessions),
            ));
        }

        let previous_best = input.previous_best_e1rm_kg;
        let pr = pr_bonus(e1rm_kg, previous_best, &cfg.bonus);
        if pr != 0 {
            let prev = previous_best.map(safe_num).unwrap_or(0.0);
            parts.push(ScorePart::new(
                ScoreReason::PrBonus,
                pr,
                format!("Prev best {}kg.", round1(prev)),
            ));
        }

        if normalization == Normalization::RawE1rm {
            parts.push(ScorePart::new(
                ScoreReason::MissingBodyweightPenalty,
                -cfg.guardrail.missing_bodyweight_penalty,
                "No bodyweight provided.",
            ));
        }

        // Guardrails
        let plausible = is_set_plausible(reps, rpe, &cfg.guardrail);
        if !plausible {
            debug!(exercise = %input.exercise_id, reps, rpe, "implausible set, capping total");
            flags.push(ScoreFlag::ImplausibleSet);
        }

        let jump = jump_penalty(e1rm_kg, previous_best, &cfg.guardrail);
        if jump != 0 {
            debug!(exercise = %input.exercise_id, e1rm_kg, penalty = jump, "implausible jump vs previous best");
            flags.push(ScoreFlag::ImplausibleJump);
            parts.push(ScorePart::new(
                ScoreReason::AntiCheatPenalty,
                jump,
                "Unusually large jump vs previous best.",
            ));
        }

        let too_light = is_too_light(e1rm_kg, &cfg.guardrail);
        if too_light {
            debug!(exercise = %input.exercise_id, e1rm_kg, "too light to be ranked");
            flags.push(ScoreFlag::TooLightForRanked);
        }

        // Total
        let raw: i64 = parts.iter().map(|p| p.delta as i64).sum();
        let mut total = raw.clamp(SCORE_MIN as i64, SCORE_MAX as i64) as u32;

        // Caps are reflected in flags, not as extra deltas
        if !plausible {
            total = total.min(cfg.guardrail.implausible_cap);
        }
        if too_light {
            total = 0;
        }

        let breakdown = ScoreBreakdown {
            total,
            tier: classify(total),
            normalized_strength: normalized_strength(base, &cfg.strength),
            e1rm_kg: round1(e1rm_kg),
            flags,
            parts,
        };
        trace!(exercise = %input.exercise_id, raw, total, tier = %breakdown.tier, "scored set");
        breakdown
    }

    /// Score a precomputed e1RM (leaderboards, imported PRs, progression).
    /// Always scored as a single at RPE 10.
    pub fn score_from_e1rm(
        &self,
        exercise_id: &str,
        e1rm_kg: f64,
        bodyweight_kg: Option<f64>,
        sex: Sex,
    ) -> ScoreBreakdown {
        let input = ScoringInput {
            exercise_id: exercise_id.to_string(),
            weight: 0.0,
            reps: 1,
            rpe: Some(10.0),
            unit: UnitSystem::Kilograms,
            bodyweight_kg,
            e1rm_kg: Some(e1rm_kg),
            previous_best_e1rm_kg: None,
            sessions_in_last_14_days: None,
            sex,
        };
        self.score(&input)
    }
}

/// The only early exit: e1RM could not be computed
fn insufficient_data() -> ScoreBreakdown {
    ScoreBreakdown {
        total: 0,
        tier: Tier::Iron,
        normalized_strength: 0.0,
        e1rm_kg: 0.0,
        flags: vec![ScoreFlag::InsufficientData],
        parts: vec![ScorePart::new(
            ScoreReason::AntiCheatPenalty,
            0,
            "Invalid e1RM input.",
        )],
    }
}

/// Score one set with the canonical calibration
pub fn score_forgerank(input: &ScoringInput) -> ScoreBreakdown {
    ForgerankScorer::new().score(input)
}

/// Score a precomputed e1RM with the canonical calibration
pub fn score_from_e1rm(
    exercise_id: &str,
    e1rm_kg: f64,
    bodyweight_kg: Option<f64>,
    sex: Sex,
) -> ScoreBreakdown {
    ForgerankScorer::new().score_from_e1rm(exercise_id, e1rm_kg, bodyweight_kg, sex)
}

// =============================================================================
// TESTS
// =============================================================================
