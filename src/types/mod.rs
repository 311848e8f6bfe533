//! Core types for Forgerank

mod breakdown;
mod input;
mod progress;
mod reason;
mod session;
mod tier;

pub use breakdown::{ScoreBreakdown, ScorePart};
pub use input::{ScoringInput, Sex, UnitSystem};
pub use progress::{RankHistoryPoint, RankProgressInfo};
pub use reason::{ScoreFlag, ScoreReason};
pub use session::{PreviousBests, WorkoutSession, WorkoutSet};
pub use tier::{Tier, TierThreshold, DEFAULT_TIERS};
