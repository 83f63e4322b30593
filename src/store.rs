//! Read-only snapshot loading
//!
//! The engines consume immutable snapshots; this module is the data-access
//! collaborator that produces them. Nothing here writes back: completion
//! state, notifications, and analytics are all derived downstream.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;

use crate::completion::ExerciseWithResults;
use crate::db::{DbPool, StoreError};
use crate::models::{
  Exercise, ExerciseResult, Student, WeeklyCheckin, Workout,
};

/// Everything the notification and analytics passes need in one pull.
#[derive(Debug, Clone)]
pub struct Snapshot {
  pub students: Vec<Student>,
  pub checkins: Vec<WeeklyCheckin>,
}

pub async fn load_students(pool: &DbPool) -> Result<Vec<Student>, StoreError> {
  let students = sqlx::query_as::<_, Student>(
    "SELECT id, first_name, last_name, email FROM students ORDER BY id",
  )
  .fetch_all(pool)
  .await?;

  Ok(students)
}

pub async fn load_workouts_for_student(
  pool: &DbPool,
  student_id: i64,
) -> Result<Vec<Workout>, StoreError> {
  let rows = sqlx::query(
    r#"
    SELECT id, student_id, name, date, status, notes
    FROM workouts
    WHERE student_id = ?
    ORDER BY date, id
    "#,
  )
  .bind(student_id)
  .fetch_all(pool)
  .await?;

  let workouts = rows
    .into_iter()
    .map(|row| {
      let status: String = row.get("status");
      Workout {
        id: row.get("id"),
        student_id: row.get("student_id"),
        name: row.get("name"),
        date: row.get::<NaiveDate, _>("date"),
        status: status.parse().unwrap_or_default(),
        notes: row.get("notes"),
      }
    })
    .collect();

  Ok(workouts)
}

/// Load a workout's exercises with their logged sets, in prescription
/// order, ready for [`crate::completion::WorkoutCompletion::compute`].
pub async fn load_workout_exercises(
  pool: &DbPool,
  workout_id: i64,
) -> Result<Vec<ExerciseWithResults>, StoreError> {
  let rows = sqlx::query(
    r#"
    SELECT id, workout_id, name, category, sets, reps, planned_rpe, rest_time_seconds
    FROM exercises
    WHERE workout_id = ?
    ORDER BY id
    "#,
  )
  .bind(workout_id)
  .fetch_all(pool)
  .await?;

  let mut exercises = Vec::with_capacity(rows.len());
  for row in rows {
    let category: String = row.get("category");
    let exercise = Exercise {
      id: row.get("id"),
      workout_id: row.get("workout_id"),
      name: row.get("name"),
      category: category.parse().unwrap_or_default(),
      sets: row.get("sets"),
      reps: row.get("reps"),
      planned_rpe: row.get("planned_rpe"),
      rest_time_seconds: row.get("rest_time_seconds"),
    };

    let results = load_exercise_results(pool, exercise.id).await?;
    exercises.push(ExerciseWithResults { exercise, results });
  }

  Ok(exercises)
}

pub async fn load_exercise_results(
  pool: &DbPool,
  exercise_id: i64,
) -> Result<Vec<ExerciseResult>, StoreError> {
  let results = sqlx::query_as::<_, ExerciseResult>(
    r#"
    SELECT id, exercise_id, set_number, weight_kg, reps, actual_rpe,
           estimated_one_rm, notes
    FROM exercise_results
    WHERE exercise_id = ?
    ORDER BY set_number
    "#,
  )
  .bind(exercise_id)
  .fetch_all(pool)
  .await?;

  Ok(results)
}

pub async fn load_checkins(pool: &DbPool) -> Result<Vec<WeeklyCheckin>, StoreError> {
  load_checkins_query(pool, None).await
}

pub async fn load_checkins_for_student(
  pool: &DbPool,
  student_id: i64,
) -> Result<Vec<WeeklyCheckin>, StoreError> {
  load_checkins_query(pool, Some(student_id)).await
}

async fn load_checkins_query(
  pool: &DbPool,
  student_id: Option<i64>,
) -> Result<Vec<WeeklyCheckin>, StoreError> {
  let base = r#"
    SELECT id, student_id, week_start_date, muscular_recovery, recovery_quality,
           mental_state, motivation, sleep_quality, sleep_hours,
           nutrition_consistency, hydration_level, pain_level, pain_description,
           perceived_progress, week_highlights, concerns, completed, created_at
    FROM weekly_checkins
  "#;

  let rows = match student_id {
    Some(id) => {
      let sql = format!("{} WHERE student_id = ? ORDER BY week_start_date DESC, id", base);
      sqlx::query(&sql).bind(id).fetch_all(pool).await?
    }
    None => {
      let sql = format!("{} ORDER BY week_start_date DESC, id", base);
      sqlx::query(&sql).fetch_all(pool).await?
    }
  };

  let checkins = rows
    .into_iter()
    .map(|row| {
      let hydration: String = row.get("hydration_level");
      let pain: String = row.get("pain_level");
      let created_at: String = row.get("created_at");

      WeeklyCheckin {
        id: row.get("id"),
        student_id: row.get("student_id"),
        week_start_date: row.get::<NaiveDate, _>("week_start_date"),
        muscular_recovery: row.get("muscular_recovery"),
        recovery_quality: row.get("recovery_quality"),
        mental_state: row.get("mental_state"),
        motivation: row.get("motivation"),
        sleep_quality: row.get("sleep_quality"),
        sleep_hours: row.get("sleep_hours"),
        nutrition_consistency: row.get("nutrition_consistency"),
        hydration_level: hydration.parse().unwrap_or_default(),
        pain_level: pain.parse().unwrap_or_default(),
        pain_description: row.get("pain_description"),
        perceived_progress: row.get("perceived_progress"),
        week_highlights: row.get("week_highlights"),
        concerns: row.get("concerns"),
        completed: row.get("completed"),
        created_at: DateTime::parse_from_rfc3339(&created_at)
          .map(|dt| dt.with_timezone(&Utc))
          .unwrap_or_else(|_| Utc::now()),
      }
    })
    .collect();

  Ok(checkins)
}

/// One pull of everything the cross-student notification pass consumes.
pub async fn load_snapshot(pool: &DbPool) -> Result<Snapshot, StoreError> {
  let students = load_students(pool).await?;
  let checkins = load_checkins(pool).await?;
  tracing::debug!(
    students = students.len(),
    checkins = checkins.len(),
    "snapshot loaded"
  );

  Ok(Snapshot { students, checkins })
}
