//! Reason tags for breakdown terms and anomaly flags

use serde::{Deserialize, Serialize};

/// Why a term contributes to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreReason {
    /// Dominant term from the strength curve
    BaseStrength,
    /// Reps performed at high effort
    RepQuality,
    /// Sub-linear tonnage reward
    VolumeBonus,
    /// New best e1RM
    PrBonus,
    /// Training frequency over the last 14 days
    ConsistencyBonus,
    /// Guardrail term (suspicious jump, or invalid input marker)
    AntiCheatPenalty,
    /// No bodyweight supplied
    MissingBodyweightPenalty,
}

impl ScoreReason {
    /// Code string (for logging and parseable output)
    pub fn code(&self) -> &'static str {
        match self {
            Self::BaseStrength => "base_strength",
            Self::RepQuality => "rep_quality",
            Self::VolumeBonus => "volume_bonus",
            Self::PrBonus => "pr_bonus",
            Self::ConsistencyBonus => "consistency_bonus",
            Self::AntiCheatPenalty => "anti_cheat_penalty",
            Self::MissingBodyweightPenalty => "missing_bodyweight_penalty",
        }
    }

    /// Human-readable label
    pub fn description(&self) -> &'static str {
        match self {
            Self::BaseStrength => "Base strength",
            Self::RepQuality => "Rep quality",
            Self::VolumeBonus => "Volume bonus",
            Self::PrBonus => "PR bonus",
            Self::ConsistencyBonus => "Consistency bonus",
            Self::AntiCheatPenalty => "Anti-cheat penalty",
            Self::MissingBodyweightPenalty => "Missing bodyweight",
        }
    }
}

impl std::fmt::Display for ScoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Anomalies detected while scoring. Several may co-occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFlag {
    /// Scored on raw e1RM, -45 penalty applied
    MissingBodyweight,
    /// Gain over previous best above 12%
    ImplausibleJump,
    /// High-rep set at near-maximal effort, total capped
    ImplausibleSet,
    /// e1RM under the ranked floor, total forced to 0
    TooLightForRanked,
    /// e1RM could not be computed, total forced to 0
    InsufficientData,
}

impl ScoreFlag {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingBodyweight => "missing_bodyweight",
            Self::ImplausibleJump => "implausible_jump",
            Self::ImplausibleSet => "implausible_set",
            Self::TooLightForRanked => "too_light_for_ranked",
            Self::InsufficientData => "insufficient_data",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MissingBodyweight => "No bodyweight - scored on raw e1RM",
            Self::ImplausibleJump => "Unusually large jump vs previous best",
            Self::ImplausibleSet => "Implausible set - score capped",
            Self::TooLightForRanked => "Too light to be ranked",
            Self::InsufficientData => "Not enough data to compute e1RM",
        }
    }

    /// A zero total carrying this flag means "not ranked", not "weakest rank"
    pub fn is_unranked(&self) -> bool {
        matches!(self, Self::TooLightForRanked | Self::InsufficientData)
    }
}

impl std::fmt::Display for ScoreFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
