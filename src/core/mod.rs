//! Core scoring pipeline for Forgerank

pub mod bonus;
pub mod classifier;
pub mod e1rm;
pub mod guardrail;
pub mod history;
mod math;
pub mod progression;
pub mod scorer;
pub mod strength;

pub use classifier::{classify, tier_from_score};
pub use history::{rank_history, sessions_in_last_14_days, sessions_in_window};
pub use progression::{detect_rank_progress_full, display_name, session_best_e1rm};
pub use scorer::{score_forgerank, score_from_e1rm, ForgerankScorer};
