//! Score breakdown: the explainable scoring result

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{ScoreFlag, ScoreReason, Tier};
use crate::{SCORE_MAX, SCORE_MIN};

/// One contributing term of the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePart {
    pub reason: ScoreReason,
    pub delta: i32,
    pub note: String,
}

impl ScorePart {
    pub fn new(reason: ScoreReason, delta: i32, note: impl Into<String>) -> Self {
        Self {
            reason,
            delta,
            note: note.into(),
        }
    }
}

/// Result of scoring one set.
///
/// `total` equals the clamped sum of `parts` unless a guardrail capped it
/// (`implausible_set` caps at 220, `too_light_for_ranked` forces 0). The
/// parts are always kept as computed so a suppressed score stays explainable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 0..=1000
    pub total: u32,
    pub tier: Tier,
    /// Base strength / 700, clamped to 0..=1 (for display)
    pub normalized_strength: f64,
    /// Resolved e1RM, rounded to 0.1 kg
    pub e1rm_kg: f64,
    pub flags: Vec<ScoreFlag>,
    pub parts: Vec<ScorePart>,
}

impl ScoreBreakdown {
    /// Sum of all deltas, clamped to the score range, before guardrail caps
    pub fn raw_total(&self) -> u32 {
        let sum: i64 = self.parts.iter().map(|p| p.delta as i64).sum();
        sum.clamp(SCORE_MIN as i64, SCORE_MAX as i64) as u32
    }

    /// True when a guardrail pushed `total` below the clamped sum of parts
    pub fn is_capped(&self) -> bool {
        self.total < self.raw_total()
    }

    /// False for results that must be shown as "not ranked"
    pub fn is_ranked(&self) -> bool {
        !self.flags.iter().any(ScoreFlag::is_unranked)
    }

    pub fn has_flag(&self, flag: ScoreFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// First term with the given reason
    pub fn part(&self, reason: ScoreReason) -> Option<&ScorePart> {
        self.parts.iter().find(|p| p.reason == reason)
    }

    /// Next tier and the points still needing to be gained; `None` at Mythic
    /// or when the result is not ranked
    pub fn points_to_next_tier(&self) -> Option<(Tier, u32)> {
        if !self.is_ranked() {
            return None;
        }
        let next = self.tier.next()?;
        Some((next, next.min_score().saturating_sub(self.total)))
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let tier = if self.is_ranked() {
            self.tier.name().color(self.tier.color()).bold().to_string()
        } else {
            "UNRANKED".bright_black().to_string()
        };
        let mut out = format!(
            "{} {} | e1RM={:.1}kg | strength={:.2}",
            self.total.to_string().bold(),
            tier,
            self.e1rm_kg,
            self.normalized_strength,
        );
        for flag in &self.flags {
            out.push_str(&format!(" | {}", flag.code().yellow()));
        }
        out
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let flags: Vec<&str> = self.flags.iter().map(|f| f.code()).collect();
        format!(
            "total={} | tier={} | e1rm_kg={:.1} | strength={:.3} | flags={}",
            self.total,
            self.tier,
            self.e1rm_kg,
            self.normalized_strength,
            if flags.is_empty() {
                "none".to_string()
            } else {
                flags.join(",")
            }
        )
    }
}
