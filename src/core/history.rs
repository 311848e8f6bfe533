//! Session history helpers: per-day rank history and the consistency window

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::core::e1rm::epley_e1rm_kg;
use crate::core::scorer::ForgerankScorer;
use crate::types::{RankHistoryPoint, Sex, WorkoutSession};
use crate::CONSISTENCY_WINDOW_DAYS;

impl ForgerankScorer {
    /// Best e1RM per UTC training day for one exercise, scored and sorted by date.
    ///
    /// Sessions without a start time cannot be placed on a day and are skipped.
    pub fn rank_history(
        &self,
        sessions: &[WorkoutSession],
        exercise_id: &str,
        bodyweight_kg: Option<f64>,
    ) -> Vec<RankHistoryPoint> {
        let mut best_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for session in sessions {
            let Some(started_at) = session.started_at else {
                continue;
            };
            for set in session.sets_for(exercise_id) {
                let e1rm = epley_e1rm_kg(set.weight_kg, set.reps);
                if e1rm <= 0.0 {
                    continue;
                }
                let best = best_by_day.entry(started_at.date_naive()).or_insert(0.0);
                if e1rm > *best {
                    *best = e1rm;
                }
            }
        }

        best_by_day
            .into_iter()
            .map(|(date, e1rm)| {
                let scored = self.score_from_e1rm(exercise_id, e1rm, bodyweight_kg, Sex::Unspecified);
                RankHistoryPoint {
                    date,
                    e1rm_kg: scored.e1rm_kg,
                    score: scored.total,
                    tier: scored.tier,
                }
            })
            .collect()
    }
}

/// Rank history with the canonical calibration
pub fn rank_history(
    sessions: &[WorkoutSession],
    exercise_id: &str,
    bodyweight_kg: Option<f64>,
) -> Vec<RankHistoryPoint> {
    ForgerankScorer::new().rank_history(sessions, exercise_id, bodyweight_kg)
}

/// Sessions started in `(now - days, now]` that include the exercise
pub fn sessions_in_window(
    sessions: &[WorkoutSession],
    exercise_id: &str,
    now: DateTime<Utc>,
    days: i64,
) -> u32 {
    let since = now - Duration::days(days);
    sessions
        .iter()
        .filter(|s| matches!(s.started_at, Some(at) if at > since && at <= now))
        .filter(|s| s.contains_exercise(exercise_id))
        .count() as u32
}

/// Value for `ScoringInput::sessions_in_last_14_days`
pub fn sessions_in_last_14_days(
    sessions: &[WorkoutSession],
    exercise_id: &str,
    now: DateTime<Utc>,
) -> u32 {
    sessions_in_window(sessions, exercise_id, now, CONSISTENCY_WINDOW_DAYS)
}
