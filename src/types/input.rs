//! Scoring input: one logged working set plus optional context

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ForgerankError;
use crate::KG_PER_LB;

/// Unit of the logged set weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    #[serde(rename = "lb")]
    Pounds,
    #[serde(rename = "kg")]
    Kilograms,
}

impl UnitSystem {
    /// Convert a weight in this unit to kilograms
    pub fn to_kg(&self, weight: f64) -> f64 {
        match self {
            UnitSystem::Pounds => weight * KG_PER_LB,
            UnitSystem::Kilograms => weight,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitSystem::Pounds => "lb",
            UnitSystem::Kilograms => "kg",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ForgerankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Ok(UnitSystem::Pounds),
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(UnitSystem::Kilograms),
            _ => Err(ForgerankError::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Sex tag, used only for a mild ratio calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl FromStr for Sex {
    type Err = ForgerankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            "unspecified" | "u" | "" => Ok(Sex::Unspecified),
            _ => Err(ForgerankError::UnknownSex(s.to_string())),
        }
    }
}

/// One logged working set plus optional scoring context.
///
/// Numeric fields are sanitized by the scorer: non-finite values become 0,
/// reps are coerced into [1, 30] and RPE into [5, 10].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringInput {
    /// Any stable exercise identifier
    pub exercise_id: String,
    /// Working-set weight in `unit` (ignored when `e1rm_kg` is set)
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub reps: u32,
    /// Perceived effort; 8.5 when absent
    #[serde(default)]
    pub rpe: Option<f64>,
    #[serde(default)]
    pub unit: UnitSystem,
    #[serde(default)]
    pub bodyweight_kg: Option<f64>,
    /// Precomputed e1RM, bypasses the estimator
    #[serde(default)]
    pub e1rm_kg: Option<f64>,
    /// Prior best e1RM, enables PR and jump checks
    #[serde(default)]
    pub previous_best_e1rm_kg: Option<f64>,
    #[serde(default)]
    pub sessions_in_last_14_days: Option<u32>,
    #[serde(default)]
    pub sex: Sex,
}

impl ScoringInput {
    /// Create an input for a set logged in pounds with no context
    pub fn new(exercise_id: impl Into<String>, weight: f64, reps: u32) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            weight,
            reps,
            rpe: None,
            unit: UnitSystem::default(),
            bodyweight_kg: None,
            e1rm_kg: None,
            previous_best_e1rm_kg: None,
            sessions_in_last_14_days: None,
            sex: Sex::default(),
        }
    }

    pub fn with_unit(mut self, unit: UnitSystem) -> Self {
        self.unit = unit;
        self
    }

    /// Shorthand for `with_unit(UnitSystem::Kilograms)`
    pub fn kg(self) -> Self {
        self.with_unit(UnitSystem::Kilograms)
    }

    pub fn with_rpe(mut self, rpe: f64) -> Self {
        self.rpe = Some(rpe);
        self
    }

    pub fn with_bodyweight(mut self, bodyweight_kg: f64) -> Self {
        self.bodyweight_kg = Some(bodyweight_kg);
        self
    }

    pub fn with_e1rm(mut self, e1rm_kg: f64) -> Self {
        self.e1rm_kg = Some(e1rm_kg);
        self
    }

    pub fn with_previous_best(mut self, e1rm_kg: f64) -> Self {
        self.previous_best_e1rm_kg = Some(e1rm_kg);
        self
    }

    pub fn with_sessions(mut self, sessions_in_last_14_days: u32) -> Self {
        self.sessions_in_last_14_days = Some(sessions_in_last_14_days);
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_is_default_unit() {
        let input = ScoringInput::new("bench", 225.0, 5);
        assert_eq!(input.unit, UnitSystem::Pounds);
        assert_eq!(input.sex, Sex::Unspecified);
    }

    #[test]
    fn test_pound_conversion() {
        let kg = UnitSystem::Pounds.to_kg(100.0);
        assert!((kg - 45.359237).abs() < 1e-9);
        assert_eq!(UnitSystem::Kilograms.to_kg(100.0), 100.0);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("KG".parse::<UnitSystem>().unwrap(), UnitSystem::Kilograms);
        assert_eq!("lbs".parse::<UnitSystem>().unwrap(), UnitSystem::Pounds);
        assert!("stone".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let input: ScoringInput =
            serde_json::from_str(r#"{"exercise_id": "squat", "weight": 140, "reps": 3, "unit": "kg"}"#)
                .unwrap();
        assert_eq!(input.unit, UnitSystem::Kilograms);
        assert_eq!(input.rpe, None);
        assert_eq!(input.bodyweight_kg, None);
    }
}
