//! Rank progression detector: before/after tiers for a completed session.
//!
//! Session bests use the bare Epley estimate (historical sets carry no RPE),
//! unlike live scoring which applies the RPE correction. The two estimates
//! can disagree slightly; this is known and kept.

use tracing::debug;

use crate::core::e1rm::epley_e1rm_kg;
use crate::core::scorer::ForgerankScorer;
use crate::types::{PreviousBests, RankProgressInfo, Sex, WorkoutSession};

impl ForgerankScorer {
    /// Compare each exercise's session best against its stored previous best.
    ///
    /// Only exercises present in both the session and `previous_bests`, and
    /// whose session best strictly exceeds the stored one, produce a record.
    /// A new best that is still not ranked produces nothing; an unranked
    /// previous best is reported without a tier.
    /// Records follow the order exercises first appear in the session.
    pub fn detect_rank_progress(
        &self,
        session: &WorkoutSession,
        previous_bests: Option<&PreviousBests>,
        bodyweight_kg: Option<f64>,
    ) -> Vec<RankProgressInfo> {
        let Some(previous_bests) = previous_bests else {
            return Vec::new();
        };

        let mut records = Vec::new();

        for exercise_id in session.exercise_ids() {
            let Some(&previous_best) = previous_bests.get(exercise_id) else {
                continue;
            };

            let new_best = session_best_e1rm(session, exercise_id);
            if !previous_best.is_finite() || new_best <= previous_best {
                continue;
            }

            let before = self.score_from_e1rm(exercise_id, previous_best, bodyweight_kg, Sex::Unspecified);
            let after = self.score_from_e1rm(exercise_id, new_best, bodyweight_kg, Sex::Unspecified);

            if !after.is_ranked() {
                debug!(exercise = exercise_id, new_best, "session best still unranked");
                continue;
            }
            let previous_tier = before.is_ranked().then_some(before.tier);
            let rank_up = match previous_tier {
                Some(tier) => after.tier > tier,
                None => true,
            };
            debug!(
                exercise = exercise_id,
                previous_best,
                new_best,
                from = ?previous_tier,
                to = %after.tier,
                rank_up,
                "session improved previous best"
            );

            records.push(RankProgressInfo {
                exercise_id: exercise_id.to_string(),
                exercise_name: display_name(exercise_id),
                previous_rank: previous_tier.map(|tier| tier.rank_number()),
                new_rank: after.tier.rank_number(),
                previous_tier,
                new_tier: after.tier,
                previous_score: before.total,
                new_score: after.total,
                previous_e1rm_kg: before.e1rm_kg,
                new_e1rm_kg: after.e1rm_kg,
                rank_up,
                score_delta: after.total as i32 - before.total as i32,
            });
        }

        records
    }
}

/// Detect rank progress with the canonical calibration
pub fn detect_rank_progress_full(
    session: &WorkoutSession,
    previous_bests: Option<&PreviousBests>,
    bodyweight_kg: Option<f64>,
) -> Vec<RankProgressInfo> {
    ForgerankScorer::new().detect_rank_progress(session, previous_bests, bodyweight_kg)
}

/// Best bare-Epley e1RM among the session's sets for one exercise (0 if none)
pub fn session_best_e1rm(session: &WorkoutSession, exercise_id: &str) -> f64 {
    session
        .sets_for(exercise_id)
        .map(|s| epley_e1rm_kg(s.weight_kg, s.reps))
        .fold(0.0, f64::max)
}

/// "Barbell_Bench_Press_-_Medium_Grip" → "Barbell Bench Press - Medium Grip",
/// "bench_press" → "Bench Press"
pub fn display_name(exercise_id: &str) -> String {
    exercise_id
        .split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Tier, WorkoutSet};
    use std::collections::HashMap;

    fn bests(entries: &[(&str, f64)]) -> PreviousBests {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_silver_to_gold() {
        // 120 × (1 + 5/30) = 140 → Gold; previous 125 → Silver
        let session = WorkoutSession::new(vec![
            WorkoutSet::new("bench", 100.0, 8),
            WorkoutSet::new("bench", 120.0, 5),
        ]);
        let previous = bests(&[("bench", 125.0)]);

        let records = detect_rank_progress_full(&session, Some(&previous), Some(80.0));
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert!(record.rank_up);
        assert_eq!(record.previous_tier, Some(Tier::Silver));
        assert_eq!(record.new_tier, Tier::Gold);
        assert_eq!((record.previous_rank, record.new_rank), (Some(3), 4));
        assert_eq!((record.previous_score, record.new_score), (453, 490));
        assert_eq!(record.score_delta, 37);
        assert_eq!(record.exercise_name, "Bench");
    }

    #[test]
    fn test_improvement_within_tier_is_not_rank_up() {
        let session = WorkoutSession::new(vec![WorkoutSet::new("squat", 100.0, 3)]);
        let previous = bests(&[("squat", 100.0)]);
        let records = detect_rank_progress_full(&session, Some(&previous), Some(80.0));
        assert_eq!(records.len(), 1);
        assert!(!records[0].rank_up);
        assert_eq!(records[0].previous_tier, Some(Tier::Silver));
        assert_eq!(records[0].new_tier, Tier::Silver);
        assert_eq!(records[0].score_delta, 28);
    }

    #[test]
    fn test_no_record_without_improvement() {
        let session = WorkoutSession::new(vec![WorkoutSet::new("bench", 100.0, 5)]);
        let equal = bests(&[("bench", epley_e1rm_kg(100.0, 5))]);
        assert!(detect_rank_progress_full(&session, Some(&equal), Some(80.0)).is_empty());
        let higher = bests(&[("bench", 200.0)]);
        assert!(detect_rank_progress_full(&session, Some(&higher), Some(80.0)).is_empty());
    }

    #[test]
    fn test_exercises_missing_from_either_side_are_skipped() {
        let session = WorkoutSession::new(vec![WorkoutSet::new("bench", 120.0, 5)]);
        let previous = bests(&[("deadlift", 100.0)]);
        assert!(detect_rank_progress_full(&session, Some(&previous), Some(80.0)).is_empty());
        assert!(detect_rank_progress_full(&session, None, Some(80.0)).is_empty());
        assert!(detect_rank_progress_full(&session, Some(&HashMap::new()), None).is_empty());
    }

    #[test]
    fn test_unusable_previous_best_is_unranked() {
        // A stored 0 cannot be scored at all; 5 kg is under the ranked floor
        let session = WorkoutSession::new(vec![WorkoutSet::new("bench", 100.0, 5)]);
        for previous_best in [0.0, 5.0] {
            let previous = bests(&[("bench", previous_best)]);
            let records = detect_rank_progress_full(&session, Some(&previous), Some(80.0));
            assert_eq!(records.len(), 1);
            let record = &records[0];
            assert_eq!(record.previous_tier, None);
            assert_eq!(record.previous_rank, None);
            assert_eq!(record.previous_score, 0);
            assert_eq!(record.new_tier, Tier::Silver);
            assert_eq!(record.new_rank, 3);
            assert!(record.rank_up);
            assert_eq!(record.score_delta, record.new_score as i32);
        }
    }

    #[test]
    fn test_new_best_still_unranked_is_not_reported() {
        // 6 × (1 + 5/30) = 7 kg beats 5 kg but stays under the floor
        let session = WorkoutSession::new(vec![WorkoutSet::new("curl", 6.0, 5)]);
        let previous = bests(&[("curl", 5.0)]);
        assert!(detect_rank_progress_full(&session, Some(&previous), Some(80.0)).is_empty());
    }

    #[test]
    fn test_records_follow_session_order() {
        let session = WorkoutSession::new(vec![
            WorkoutSet::new("squat", 150.0, 5),
            WorkoutSet::new("bench", 120.0, 5),
        ]);
        let previous = bests(&[("bench", 100.0), ("squat", 100.0)]);
        let ids: Vec<String> = detect_rank_progress_full(&session, Some(&previous), Some(80.0))
            .into_iter()
            .map(|r| r.exercise_id)
            .collect();
        assert_eq!(ids, vec!["squat", "bench"]);
    }

    #[test]
    fn test_session_best_ignores_invalid_sets() {
        let session = WorkoutSession::new(vec![
            WorkoutSet::new("bench", -100.0, 5),
            WorkoutSet::new("bench", 100.0, 0),
            WorkoutSet::new("bench", 60.0, 10),
        ]);
        assert!((session_best_e1rm(&session, "bench") - 80.0).abs() < 1e-9);
        assert_eq!(session_best_e1rm(&session, "row"), 0.0);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("bench_press"), "Bench Press");
        assert_eq!(
            display_name("Barbell_Bench_Press_-_Medium_Grip"),
            "Barbell Bench Press - Medium Grip"
        );
        assert_eq!(display_name("ohp"), "Ohp");
    }
}
