use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Workout Status
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStatus {
  #[default]
  Scheduled,
  InProgress,
  /// Reached only when every exercise is confirmed, or forced by the coach
  Completed,
}

impl std::fmt::Display for WorkoutStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Scheduled => write!(f, "scheduled"),
      Self::InProgress => write!(f, "in_progress"),
      Self::Completed => write!(f, "completed"),
    }
  }
}

impl std::str::FromStr for WorkoutStatus {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "scheduled" => Ok(Self::Scheduled),
      "in_progress" => Ok(Self::InProgress),
      "completed" => Ok(Self::Completed),
      _ => Err(format!("Unknown workout status: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Exercise Category
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
  Squat,
  Bench,
  Deadlift,
  #[default]
  Accessory,
}

impl std::fmt::Display for ExerciseCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Squat => write!(f, "squat"),
      Self::Bench => write!(f, "bench"),
      Self::Deadlift => write!(f, "deadlift"),
      Self::Accessory => write!(f, "accessory"),
    }
  }
}

impl std::str::FromStr for ExerciseCategory {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "squat" => Ok(Self::Squat),
      "bench" => Ok(Self::Bench),
      "deadlift" => Ok(Self::Deadlift),
      "accessory" => Ok(Self::Accessory),
      _ => Err(format!("Unknown exercise category: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Entities
/// ---------------------------------------------------------------------------

/// A prescribed workout on the student's calendar. The date carries
/// local-day semantics; no time component is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
  pub id: i64,
  pub student_id: i64,
  pub name: String,
  pub date: NaiveDate,
  pub status: WorkoutStatus,
  pub notes: Option<String>,
}

/// A prescribed exercise within a workout. `reps` is a coach-facing
/// range string such as "8-10".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
  pub id: i64,
  pub workout_id: i64,
  pub name: String,
  pub category: ExerciseCategory,
  pub sets: i64,
  pub reps: String,
  pub planned_rpe: Option<f64>,
  pub rest_time_seconds: Option<i64>,
}

/// One logged set. A non-empty collection of these marks the parent
/// exercise "confirmed" by the athlete.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExerciseResult {
  pub id: i64,
  pub exercise_id: i64,
  pub set_number: i64,
  pub weight_kg: f64,
  pub reps: i64,
  pub actual_rpe: Option<f64>,
  pub estimated_one_rm: f64,
  pub notes: Option<String>,
}
