//! Guardrails: light, explainable anti-cheat heuristics.
//!
//! None of these block scoring. They cap, zero or penalize the total and
//! always leave a flag behind.

use crate::config::GuardrailConfig;
use crate::core::bonus::fractional_gain;
use crate::core::math::{clamp, round_half_up};

/// High reps at near-maximal effort is treated as implausible
pub fn is_set_plausible(reps: u32, rpe: f64, config: &GuardrailConfig) -> bool {
    !(reps >= config.implausible_min_reps && rpe >= config.implausible_min_rpe)
}

/// Penalty for a gain over the previous best above the tolerated threshold.
///
/// 0.20 gain => 0.08 over => -32. Always <= 0.
pub fn jump_penalty(
    current_e1rm_kg: f64,
    previous_best_e1rm_kg: Option<f64>,
    config: &GuardrailConfig,
) -> i32 {
    match fractional_gain(current_e1rm_kg, previous_best_e1rm_kg) {
        Some(gain) if gain > config.jump_gain_threshold => {
            let over = gain - config.jump_gain_threshold;
            -round_half_up(clamp(
                over * config.jump_scale,
                config.jump_min_penalty,
                config.jump_max_penalty,
            ))
        }
        _ => 0,
    }
}

/// e1RM below the ranked floor
pub fn is_too_light(e1rm_kg: f64, config: &GuardrailConfig) -> bool {
    e1rm_kg < config.too_light_kg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implausible_set() {
        let config = GuardrailConfig::default();
        assert!(!is_set_plausible(20, 9.5, &config));
        assert!(!is_set_plausible(30, 10.0, &config));
        assert!(is_set_plausible(19, 10.0, &config));
        assert!(is_set_plausible(25, 9.0, &config));
    }

    #[test]
    fn test_jump_boundary_is_exclusive() {
        let config = GuardrailConfig::default();
        // exactly 12%
        assert_eq!(jump_penalty(112.0, Some(100.0), &config), 0);
    }

    #[test]
    fn test_jump_penalty_twenty_percent() {
        let config = GuardrailConfig::default();
        let penalty = jump_penalty(120.0, Some(100.0), &config);
        assert_eq!(penalty, -32);
        assert!((-160..=-15).contains(&penalty));
    }

    #[test]
    fn test_jump_penalty_floor_and_cap() {
        let config = GuardrailConfig::default();
        // 13% => 0.01 over => 4 → floor 15
        assert_eq!(jump_penalty(113.0, Some(100.0), &config), -15);
        assert_eq!(jump_penalty(300.0, Some(100.0), &config), -160);
    }

    #[test]
    fn test_no_jump_without_baseline() {
        let config = GuardrailConfig::default();
        assert_eq!(jump_penalty(300.0, None, &config), 0);
        assert_eq!(jump_penalty(300.0, Some(0.0), &config), 0);
    }

    #[test]
    fn test_too_light() {
        let config = GuardrailConfig::default();
        assert!(is_too_light(9.99, &config));
        assert!(!is_too_light(10.0, &config));
    }
}
