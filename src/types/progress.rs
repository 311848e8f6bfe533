//! Progression records produced from a completed session

use chrono::NaiveDate;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::Tier;

/// Tier change (or in-tier improvement) for one exercise.
///
/// Created per analyzed session and never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankProgressInfo {
    pub exercise_id: String,
    pub exercise_name: String,
    /// 1-indexed tier position before the session; `None` when the previous
    /// best was not ranked (too light or unusable)
    pub previous_rank: Option<u8>,
    /// 1-indexed tier position after the session
    pub new_rank: u8,
    pub previous_tier: Option<Tier>,
    pub new_tier: Tier,
    pub previous_score: u32,
    pub new_score: u32,
    pub previous_e1rm_kg: f64,
    pub new_e1rm_kg: f64,
    /// Tier strictly increased, or the lift entered the ladder
    pub rank_up: bool,
    pub score_delta: i32,
}

impl RankProgressInfo {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let marker = if self.rank_up {
            "RANK UP".green().bold().to_string()
        } else {
            "improved".normal().to_string()
        };
        let previous = match self.previous_tier {
            Some(tier) => tier.name().color(tier.color()).to_string(),
            None => "UNRANKED".bright_black().to_string(),
        };
        format!(
            "{} {}: {} ({}) -> {} ({}) | {:+} pts",
            marker,
            self.exercise_name.bold(),
            previous,
            self.previous_score,
            self.new_tier.name().color(self.new_tier.color()),
            self.new_score,
            self.score_delta,
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "exercise={} | rank={}->{} | score={}->{} | delta={:+} | rank_up={}",
            self.exercise_id,
            self.previous_rank.map_or_else(|| "unranked".to_string(), |r| r.to_string()),
            self.new_rank,
            self.previous_score,
            self.new_score,
            self.score_delta,
            self.rank_up,
        )
    }
}

/// Best e1RM and its score for one training day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankHistoryPoint {
    pub date: NaiveDate,
    pub e1rm_kg: f64,
    pub score: u32,
    pub tier: Tier,
}
