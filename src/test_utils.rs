//! Test utilities: in-memory database setup, row seeders, and model
//! factories shared across the engine test modules.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::models::{HydrationLevel, PainLevel, Student, WeeklyCheckin};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing.
///
/// Uses max_connections(1) to prevent multiple pool connections from
/// creating isolated in-memory databases, which would cause intermittent
/// test failures.
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

pub async fn seed_student(pool: &SqlitePool, first_name: &str, last_name: &str) -> i64 {
  let result = sqlx::query(
    "INSERT INTO students (first_name, last_name, email) VALUES (?1, ?2, ?3)",
  )
  .bind(first_name)
  .bind(last_name)
  .bind(format!(
    "{}.{}@example.com",
    first_name.to_lowercase(),
    last_name.to_lowercase()
  ))
  .execute(pool)
  .await
  .expect("Failed to insert test student");

  result.last_insert_rowid()
}

pub async fn seed_workout(
  pool: &SqlitePool,
  student_id: i64,
  name: &str,
  date: &str,
  status: &str,
) -> i64 {
  let result = sqlx::query(
    "INSERT INTO workouts (student_id, name, date, status) VALUES (?1, ?2, ?3, ?4)",
  )
  .bind(student_id)
  .bind(name)
  .bind(date)
  .bind(status)
  .execute(pool)
  .await
  .expect("Failed to insert test workout");

  result.last_insert_rowid()
}

pub async fn seed_exercise(
  pool: &SqlitePool,
  workout_id: i64,
  name: &str,
  category: &str,
  sets: i64,
) -> i64 {
  let result = sqlx::query(
    r#"
    INSERT INTO exercises (workout_id, name, category, sets, reps, planned_rpe, rest_time_seconds)
    VALUES (?1, ?2, ?3, ?4, '8-10', 8.0, 180)
    "#,
  )
  .bind(workout_id)
  .bind(name)
  .bind(category)
  .bind(sets)
  .execute(pool)
  .await
  .expect("Failed to insert test exercise");

  result.last_insert_rowid()
}

pub async fn seed_result(
  pool: &SqlitePool,
  exercise_id: i64,
  set_number: i64,
  weight_kg: f64,
  reps: i64,
  actual_rpe: Option<f64>,
) -> i64 {
  let estimated = match actual_rpe {
    Some(rpe) => crate::estimator::estimate_one_rm(weight_kg, reps, rpe),
    None => 0.0,
  };

  let result = sqlx::query(
    r#"
    INSERT INTO exercise_results (exercise_id, set_number, weight_kg, reps, actual_rpe, estimated_one_rm)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    "#,
  )
  .bind(exercise_id)
  .bind(set_number)
  .bind(weight_kg)
  .bind(reps)
  .bind(actual_rpe)
  .bind(estimated)
  .execute(pool)
  .await
  .expect("Failed to insert test result");

  result.last_insert_rowid()
}

pub async fn seed_checkin(
  pool: &SqlitePool,
  student_id: i64,
  week_start_date: &str,
  pain_level: &str,
  completed: bool,
) -> i64 {
  let result = sqlx::query(
    r#"
    INSERT INTO weekly_checkins (
      student_id, week_start_date, muscular_recovery, recovery_quality,
      mental_state, motivation, sleep_quality, sleep_hours,
      nutrition_consistency, hydration_level, pain_level,
      perceived_progress, completed, created_at
    )
    VALUES (?1, ?2, 7, 7, 7, 7, 7, 7.5, 7, 'adequate', ?3, 7, ?4, ?5)
    "#,
  )
  .bind(student_id)
  .bind(week_start_date)
  .bind(pain_level)
  .bind(completed)
  .bind(Utc::now().to_rfc3339())
  .execute(pool)
  .await
  .expect("Failed to insert test checkin");

  result.last_insert_rowid()
}

/// ---------------------------------------------------------------------------
/// Model Factories (pure-engine tests)
/// ---------------------------------------------------------------------------

pub fn make_student(id: i64, first_name: &str, last_name: &str) -> Student {
  Student {
    id,
    first_name: first_name.to_string(),
    last_name: last_name.to_string(),
    email: format!("{}@example.com", first_name.to_lowercase()),
  }
}

/// A neutral check-in: mid-high scores, no pain, completed. Tests mutate
/// the fields a rule keys on.
pub fn make_checkin(
  id: i64,
  student_id: i64,
  week_start_date: NaiveDate,
  created_at: DateTime<Utc>,
) -> WeeklyCheckin {
  WeeklyCheckin {
    id,
    student_id,
    week_start_date,
    muscular_recovery: 7,
    recovery_quality: 7,
    mental_state: 7,
    motivation: 7,
    sleep_quality: 7,
    sleep_hours: 7.5,
    nutrition_consistency: 7,
    hydration_level: HydrationLevel::Adequate,
    pain_level: PainLevel::None,
    pain_description: None,
    perceived_progress: 7,
    week_highlights: None,
    concerns: None,
    completed: true,
    created_at,
  }
}
