//! Workout completion aggregation
//!
//! An exercise counts as confirmed once the athlete has logged at least one
//! set for it. This module only computes ratios and the completion trigger;
//! flipping the workout status to `completed` stays with the caller.

use serde::{Deserialize, Serialize};

use crate::models::{Exercise, ExerciseResult};

/// An exercise paired with the sets logged against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseWithResults {
  pub exercise: Exercise,
  pub results: Vec<ExerciseResult>,
}

impl ExerciseWithResults {
  /// Confirmed by the athlete: at least one logged set
  pub fn confirmed(&self) -> bool {
    !self.results.is_empty()
  }

  /// Best 1RM estimate among this exercise's logged sets, 0.0 when no
  /// set carries an estimate.
  pub fn best_one_rm(&self) -> f64 {
    self
      .results
      .iter()
      .map(|r| r.estimated_one_rm)
      .fold(0.0, f64::max)
  }
}

/// Per-workout completion state derived from its exercise list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkoutCompletion {
  pub total_exercises: usize,
  pub confirmed_exercises: usize,
  /// Rounded 0-100; 0 when the workout has no exercises
  pub percentage: i64,
  /// The trigger for the external status transition to `completed`.
  /// False for an empty exercise list.
  pub all_completed: bool,
}

impl WorkoutCompletion {
  pub fn compute(exercises: &[ExerciseWithResults]) -> Self {
    let total_exercises = exercises.len();
    let confirmed_exercises = exercises.iter().filter(|e| e.confirmed()).count();

    let percentage = if total_exercises > 0 {
      (confirmed_exercises as f64 / total_exercises as f64 * 100.0).round() as i64
    } else {
      0
    };

    Self {
      total_exercises,
      confirmed_exercises,
      percentage,
      all_completed: total_exercises > 0 && confirmed_exercises == total_exercises,
    }
  }
}
