//! Forgerank: deterministic, explainable strength scoring
//!
//! Pipeline: set → e1RM estimator → normalizer + bonuses + guardrails
//! → aggregator → tier classifier. The progression detector reruns the
//! pipeline for "before" and "after" e1RMs and reports tier changes.

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{
    detect_rank_progress_full, rank_history, score_forgerank, score_from_e1rm,
    sessions_in_last_14_days, sessions_in_window, ForgerankScorer,
};

// =============================================================================
// SCORE RANGE
// =============================================================================

/// Lowest possible total score
pub const SCORE_MIN: u32 = 0;

/// Highest possible total score
pub const SCORE_MAX: u32 = 1000;

// =============================================================================
// TIER THRESHOLDS - inclusive minimum score per tier
// =============================================================================

pub const TIER_IRON_MIN: u32 = 0;
pub const TIER_BRONZE_MIN: u32 = 180;
pub const TIER_SILVER_MIN: u32 = 320;
pub const TIER_GOLD_MIN: u32 = 470;
pub const TIER_PLATINUM_MIN: u32 = 620;
pub const TIER_DIAMOND_MIN: u32 = 770;
pub const TIER_MYTHIC_MIN: u32 = 900;

// =============================================================================
// UNITS
// =============================================================================

/// Kilograms per pound (exact, international avoirdupois pound)
pub const KG_PER_LB: f64 = 0.45359237;

/// Window used for the consistency bonus
pub const CONSISTENCY_WINDOW_DAYS: i64 = 14;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
