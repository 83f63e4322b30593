//! Performance-estimation and check-in-alerting engine for a
//! coach/athlete training-management tool.
//!
//! Coaches prescribe workouts; athletes log sets (weight, reps, RPE) and
//! weekly subjective check-ins. This crate is the computational core that
//! turns those raw numbers into 1RM estimates and target weights, workout
//! completion state, aggregated wellness analytics, and time-windowed
//! coach alerts. Every engine is a pure synchronous function of a data
//! snapshot plus an explicit clock; rendering, transport, and auth live
//! elsewhere and hand snapshots in via the read-only store.

pub mod analytics;
pub mod completion;
pub mod dates;
pub mod db;
pub mod estimator;
pub mod models;
pub mod notifications;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use analytics::{AverageScores, CheckinAnalytics};
pub use completion::{ExerciseWithResults, WorkoutCompletion};
pub use db::{DbPool, StoreError};
pub use models::{
  Exercise, ExerciseCategory, ExerciseResult, HydrationLevel, PainLevel, Student,
  WeeklyCheckin, Workout, WorkoutStatus,
};
pub use notifications::{
  generate_notifications, is_checkin_available, CheckinNotification, NotificationKind,
  NotificationPriority,
};
pub use store::Snapshot;
