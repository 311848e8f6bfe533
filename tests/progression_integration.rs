//! Integration tests for rank progression
//!
//! Tests the full path: session JSON → detect_rank_progress_full → records

use forgerank::types::{PreviousBests, Tier, WorkoutSession, WorkoutSet};
use forgerank::{detect_rank_progress_full, score_from_e1rm, ForgerankScorer};
use forgerank::types::Sex;
use pretty_assertions::assert_eq;

fn bests(entries: &[(&str, f64)]) -> PreviousBests {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Previous best 125 kg (Silver), session best 120 × 5 = 140 kg (Gold)
#[test]
fn test_silver_to_gold_rank_up() {
    let session = WorkoutSession::new(vec![
        WorkoutSet::new("bench_press", 100.0, 10),
        WorkoutSet::new("bench_press", 120.0, 5),
    ]);
    let previous = bests(&[("bench_press", 125.0)]);

    let records = detect_rank_progress_full(&session, Some(&previous), Some(80.0));
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.exercise_id, "bench_press");
    assert_eq!(record.exercise_name, "Bench Press");
    assert_eq!(record.previous_tier, Some(Tier::Silver));
    assert_eq!(record.new_tier, Tier::Gold);
    assert_eq!(record.previous_rank, Some(3));
    assert_eq!(record.new_rank, 4);
    assert_eq!(record.previous_score, 453);
    assert_eq!(record.new_score, 490);
    assert_eq!(record.score_delta, 37);
    assert_eq!(record.previous_e1rm_kg, 125.0);
    assert_eq!(record.new_e1rm_kg, 140.0);
    assert!(record.rank_up);
    assert_eq!(
        record.to_parseable_string(),
        "exercise=bench_press | rank=3->4 | score=453->490 | delta=+37 | rank_up=true"
    );
}

/// Record scores agree with scoring the same e1RMs directly
#[test]
fn test_records_match_direct_scoring() {
    let session = WorkoutSession::new(vec![WorkoutSet::new("squat", 150.0, 5)]);
    let previous = bests(&[("squat", 160.0)]);

    let records = detect_rank_progress_full(&session, Some(&previous), None);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].new_score, score_from_e1rm("squat", 175.0, None, Sex::Unspecified).total);
    assert_eq!(records[0].previous_score, score_from_e1rm("squat", 160.0, None, Sex::Unspecified).total);
    assert!(records[0].score_delta > 0);
}

#[test]
fn test_session_from_json() {
    let session: WorkoutSession = serde_json::from_str(
        r#"{
            "started_at": "2026-03-14T18:30:00Z",
            "sets": [
                {"exercise_id": "deadlift", "weight_kg": 180, "reps": 3},
                {"exercise_id": "bench", "weight_kg": 90, "reps": 5},
                {"exercise_id": "deadlift", "weight_kg": 200, "reps": 1, "timestamp": "2026-03-14T19:00:00Z"}
            ]
        }"#,
    )
    .unwrap();
    let previous: PreviousBests = serde_json::from_str(r#"{"deadlift": 190.0, "bench": 120.0}"#).unwrap();

    let records = ForgerankScorer::new().detect_rank_progress(&session, Some(&previous), Some(90.0));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exercise_id, "deadlift");
    // 200 × (1 + 1/30) beats 180 × (1 + 3/30) = 198
    assert!((records[0].new_e1rm_kg - 206.7).abs() < 1e-9);

    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["exercise_name"], "Deadlift");
    assert_eq!(json[0]["previous_tier"], "Gold");
    assert_eq!(records[0].previous_tier, Some(Tier::Gold));
}

/// A first scoreable lift enters the ladder instead of climbing from Iron
#[test]
fn test_unranked_previous_best_enters_ladder() {
    let session = WorkoutSession::new(vec![WorkoutSet::new("bench", 100.0, 5)]);
    let previous = bests(&[("bench", 5.0)]);

    let records = detect_rank_progress_full(&session, Some(&previous), Some(80.0));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].previous_tier, None);
    assert_eq!(records[0].previous_rank, None);
    assert!(records[0].rank_up);
    assert!(records[0].to_parseable_string().contains("rank=unranked->3"));

    let json = serde_json::to_value(&records).unwrap();
    assert!(json[0]["previous_tier"].is_null());
}

#[test]
fn test_nothing_to_report() {
    let session = WorkoutSession::new(vec![WorkoutSet::new("bench", 100.0, 5)]);
    assert!(detect_rank_progress_full(&session, None, Some(80.0)).is_empty());
    assert!(detect_rank_progress_full(&session, Some(&bests(&[("bench", 500.0)])), Some(80.0)).is_empty());
    assert!(detect_rank_progress_full(&WorkoutSession::default(), Some(&bests(&[("bench", 50.0)])), Some(80.0)).is_empty());
    // Both lifts under the ranked floor
    let light = WorkoutSession::new(vec![WorkoutSet::new("curl", 6.0, 5)]);
    assert!(detect_rank_progress_full(&light, Some(&bests(&[("curl", 5.0)])), Some(80.0)).is_empty());
}
