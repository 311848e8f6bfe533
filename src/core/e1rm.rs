//! E1RM estimation: Epley extrapolation with a mild RPE correction.
//!
//! Not a physiological model; chosen because it is stable and predictable
//! enough to rank on.

use crate::config::EstimatorConfig;
use crate::core::math::{clamp, safe_num};

/// Coerce logged reps into the supported range
pub fn coerce_reps(reps: u32, config: &EstimatorConfig) -> u32 {
    reps.clamp(config.reps_min, config.reps_max.max(config.reps_min))
}

/// Resolve the effort rating: default when absent, 0 when non-finite,
/// then coerced into [rpe_min, rpe_max]
pub fn coerce_rpe(rpe: Option<f64>, config: &EstimatorConfig) -> f64 {
    let rpe = safe_num(rpe.unwrap_or(config.default_rpe));
    clamp(rpe, config.rpe_min, config.rpe_max)
}

/// RPE correction: 10 => 1.00, 9 => 0.97, 8 => 0.94, clamped to [0.88, 1.02]
pub fn rpe_factor(rpe: f64, config: &EstimatorConfig) -> f64 {
    clamp(
        config.rpe_factor_base + (rpe - 5.0) * config.rpe_factor_per_point,
        config.rpe_factor_min,
        config.rpe_factor_max,
    )
}

/// Estimated one-rep max in kg from a working set.
///
/// Weight is floored at `min_weight_kg`, so this is always positive for
/// finite input; callers still check the result.
pub fn estimate_e1rm_kg(weight_kg: f64, reps: u32, rpe: f64, config: &EstimatorConfig) -> f64 {
    let w = weight_kg.max(config.min_weight_kg);
    let r = coerce_reps(reps, config) as f64;

    let epley = w * (1.0 + r / config.epley_divisor);

    epley * rpe_factor(rpe, config)
}

/// Bare Epley estimate, no RPE correction and no rep clamping.
///
/// Used by progression detection, where historical sets carry no RPE.
/// Non-positive or non-finite weight, or zero reps, yields 0.
pub fn epley_e1rm_kg(weight_kg: f64, reps: u32) -> f64 {
    let w = safe_num(weight_kg);
    if w <= 0.0 || reps == 0 {
        return 0.0;
    }
    w * (1.0 + reps as f64 / 30.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_rpe_factor_anchors() {
        let config = EstimatorConfig::default();
        assert!(approx_eq(rpe_factor(10.0, &config), 1.00, 1e-9));
        assert!(approx_eq(rpe_factor(9.0, &config), 0.97, 1e-9));
        assert!(approx_eq(rpe_factor(8.0, &config), 0.94, 1e-9));
    }

    #[test]
    fn test_rpe_factor_clamped() {
        let config = EstimatorConfig::default();
        // 0.85 at RPE 5 is below the floor
        assert!(approx_eq(rpe_factor(5.0, &config), 0.88, 1e-9));
        assert!(approx_eq(rpe_factor(20.0, &config), 1.02, 1e-9));
    }

    #[test]
    fn test_estimate_five_reps_rpe_nine() {
        // 100 × (1 + 5/30) × 0.97 = 113.1667
        let config = EstimatorConfig::default();
        let e1rm = estimate_e1rm_kg(100.0, 5, 9.0, &config);
        assert!(approx_eq(e1rm, 113.1667, 1e-3));
    }

    #[test]
    fn test_estimate_single_still_extrapolates() {
        // Epley adds 1/30 even for a single
        let config = EstimatorConfig::default();
        let e1rm = estimate_e1rm_kg(100.0, 1, 10.0, &config);
        assert!(approx_eq(e1rm, 103.333, 1e-3));
    }

    #[test]
    fn test_estimate_zero_weight_is_floored() {
        let config = EstimatorConfig::default();
        let e1rm = estimate_e1rm_kg(0.0, 1, 10.0, &config);
        assert!(e1rm > 0.0 && e1rm < 1.0);
    }

    #[test]
    fn test_reps_coerced() {
        let config = EstimatorConfig::default();
        assert_eq!(coerce_reps(0, &config), 1);
        assert_eq!(coerce_reps(45, &config), 30);
        assert_eq!(
            estimate_e1rm_kg(100.0, 45, 10.0, &config),
            estimate_e1rm_kg(100.0, 30, 10.0, &config)
        );
    }

    #[test]
    fn test_rpe_coerced() {
        let config = EstimatorConfig::default();
        assert_eq!(coerce_rpe(None, &config), 8.5);
        assert_eq!(coerce_rpe(Some(2.0), &config), 5.0);
        assert_eq!(coerce_rpe(Some(11.0), &config), 10.0);
        assert_eq!(coerce_rpe(Some(f64::NAN), &config), 5.0);
    }

    #[test]
    fn test_bare_epley() {
        assert!(approx_eq(epley_e1rm_kg(120.0, 5), 140.0, 1e-9));
        assert_eq!(epley_e1rm_kg(0.0, 5), 0.0);
        assert_eq!(epley_e1rm_kg(-20.0, 5), 0.0);
        assert_eq!(epley_e1rm_kg(100.0, 0), 0.0);
        assert_eq!(epley_e1rm_kg(f64::NAN, 5), 0.0);
    }
}
