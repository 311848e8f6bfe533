//! Workout session shapes owned by the workout-storage collaborator.
//!
//! Only the fields read by the engine are modelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Best e1RM (kg) per exercise id, owned by the personal-records collaborator
pub type PreviousBests = HashMap<String, f64>;

/// One logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub exercise_id: String,
    pub weight_kg: f64,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl WorkoutSet {
    pub fn new(exercise_id: impl Into<String>, weight_kg: f64, reps: u32) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            weight_kg,
            reps,
            timestamp: None,
        }
    }
}

/// A completed workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutSession {
    pub fn new(sets: Vec<WorkoutSet>) -> Self {
        Self {
            started_at: None,
            sets,
        }
    }

    pub fn started_at(mut self, at: DateTime<Utc>) -> Self {
        self.started_at = Some(at);
        self
    }

    /// Distinct exercise ids, in order of first appearance
    pub fn exercise_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for set in &self.sets {
            if !ids.contains(&set.exercise_id.as_str()) {
                ids.push(&set.exercise_id);
            }
        }
        ids
    }

    /// Sets logged for one exercise
    pub fn sets_for<'a>(&'a self, exercise_id: &'a str) -> impl Iterator<Item = &'a WorkoutSet> + 'a {
        self.sets.iter().filter(move |s| s.exercise_id == exercise_id)
    }

    pub fn contains_exercise(&self, exercise_id: &str) -> bool {
        self.sets.iter().any(|s| s.exercise_id == exercise_id)
    }
}
