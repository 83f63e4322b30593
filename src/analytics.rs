//! Long-horizon check-in analytics per student
//!
//! Reduces a student's full check-in history to the numbers the coach
//! dashboard renders: averaged wellness scores, completion rate, and pain
//! incident counts. Empty histories reduce to zeros, never NaN.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::WeeklyCheckin;

/// Arithmetic means of the four dashboard wellness categories.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AverageScores {
  pub muscular_recovery: f64,
  pub mental_state: f64,
  pub sleep_quality: f64,
  pub perceived_progress: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CheckinAnalytics {
  pub total_checkins: usize,
  /// Fraction of check-ins flagged completed, in [0, 1]
  pub completion_rate: f64,
  /// Check-ins with any pain level other than none
  pub pain_reports: usize,
  pub average_scores: AverageScores,
}

impl CheckinAnalytics {
  pub fn compute(checkins: &[WeeklyCheckin]) -> Self {
    let total_checkins = checkins.len();
    if total_checkins == 0 {
      return Self::default();
    }

    let count = total_checkins as f64;
    let completed = checkins.iter().filter(|c| c.completed).count();
    let pain_reports = checkins.iter().filter(|c| c.reports_pain()).count();

    let mean = |score: fn(&WeeklyCheckin) -> i64| -> f64 {
      checkins.iter().map(score).sum::<i64>() as f64 / count
    };

    Self {
      total_checkins,
      completion_rate: completed as f64 / count,
      pain_reports,
      average_scores: AverageScores {
        muscular_recovery: mean(|c| c.muscular_recovery),
        mental_state: mean(|c| c.mental_state),
        sleep_quality: mean(|c| c.sleep_quality),
        perceived_progress: mean(|c| c.perceived_progress),
      },
    }
  }

  /// Display-level overall wellness: mean of the four category averages.
  pub fn overall_average(&self) -> f64 {
    let s = &self.average_scores;
    (s.muscular_recovery + s.mental_state + s.sleep_quality + s.perceived_progress) / 4.0
  }
}

/// First check-in recorded for the given week, if any.
///
/// Duplicate (student, week) rows are a data-quality concern upstream;
/// lookups resolve them first-match-wins.
pub fn find_week_checkin(
  checkins: &[WeeklyCheckin],
  week_start_date: NaiveDate,
) -> Option<&WeeklyCheckin> {
  checkins.iter().find(|c| c.week_start_date == week_start_date)
}
