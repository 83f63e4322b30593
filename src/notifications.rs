//! Check-in availability and coach notification generation
//!
//! Notifications are regenerated from the current snapshot on every pass
//! and never persisted. Ids are derived from type + student + week so a
//! regenerated notification matches the one the coach already dismissed;
//! dismissal is a caller-held set filtered here, not a server mutation.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, Local, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::dates::{format_local_date, week_start};
use crate::models::{Student, WeeklyCheckin};

/// Averages below this value count a wellness metric as "low"
const LOW_SCORE_THRESHOLD: f64 = 5.0;

/// ---------------------------------------------------------------------------
/// Availability
/// ---------------------------------------------------------------------------

/// Whether the weekly self-report is currently collectible.
///
/// The check-in window opens Saturday and closes Sunday 23:59 local time;
/// the rest of the week the prompt is not offered at all. Independent of
/// notification generation below.
pub fn is_checkin_available(now: &DateTime<Local>) -> bool {
  match now.weekday() {
    Weekday::Sat => true,
    Weekday::Sun => now.hour() <= 23,
    _ => false,
  }
}

/// ---------------------------------------------------------------------------
/// Notifications
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
  MissingCheckin,
  PainReport,
  LowScores,
}

impl std::fmt::Display for NotificationKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::MissingCheckin => write!(f, "missing_checkin"),
      Self::PainReport => write!(f, "pain_report"),
      Self::LowScores => write!(f, "low_scores"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
  Low,
  Medium,
  High,
}

/// A coach-facing alert, regenerated on every evaluation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinNotification {
  /// Deterministic: `{kind}-{student_id}-{week_start}`
  pub id: String,
  pub kind: NotificationKind,
  pub priority: NotificationPriority,
  pub student_id: i64,
  pub student_name: String,
  pub message: String,
  pub week_start_date: chrono::NaiveDate,
  pub created_at: DateTime<Utc>,
}

/// Scan the full (students x check-ins) snapshot and produce the current
/// alert set. Each of the three rules runs independently per student, so
/// one student can carry up to three notifications in one pass. Ids in
/// `dismissed` are filtered out. Deterministic for identical inputs and
/// `now`; empty snapshots degrade to an empty output.
pub fn generate_notifications(
  students: &[Student],
  checkins: &[WeeklyCheckin],
  now: &DateTime<Local>,
  dismissed: &HashSet<String>,
) -> Vec<CheckinNotification> {
  let current_week = week_start(now.date_naive());
  let now_utc = now.with_timezone(&Utc);
  let two_weeks_ago = now_utc - Duration::days(14);
  let three_weeks_ago = now_utc - Duration::days(21);

  // Missing-check-in reminders only make sense once the week is closing out
  let week_closing = matches!(now.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun);

  let mut notifications = Vec::new();

  for student in students {
    let student_checkins: Vec<&WeeklyCheckin> = checkins
      .iter()
      .filter(|c| c.student_id == student.id)
      .collect();

    // Rule 1: no check-in recorded for the current week
    if week_closing {
      let has_current = student_checkins
        .iter()
        .any(|c| c.week_start_date == current_week);

      if !has_current {
        let priority = if now.weekday() == Weekday::Sun {
          NotificationPriority::High
        } else {
          NotificationPriority::Medium
        };

        notifications.push(CheckinNotification {
          id: format!("missing-{}-{}", student.id, format_local_date(current_week)),
          kind: NotificationKind::MissingCheckin,
          priority,
          student_id: student.id,
          student_name: student.full_name(),
          message: format!("{} has not checked in this week yet", student.first_name),
          week_start_date: current_week,
          created_at: now_utc,
        });
      }
    }

    // Rule 2: pain reported within the last two weeks
    let pain_reports: Vec<&&WeeklyCheckin> = student_checkins
      .iter()
      .filter(|c| c.reports_pain() && c.created_at > two_weeks_ago)
      .collect();

    if let Some(latest) = pain_reports.iter().max_by_key(|c| c.created_at) {
      notifications.push(CheckinNotification {
        id: format!(
          "pain-{}-{}",
          student.id,
          format_local_date(latest.week_start_date)
        ),
        kind: NotificationKind::PainReport,
        priority: NotificationPriority::High,
        student_id: student.id,
        student_name: student.full_name(),
        message: format!(
          "{} reported pain in {} recent check-in(s)",
          student.first_name,
          pain_reports.len()
        ),
        week_start_date: latest.week_start_date,
        created_at: latest.created_at,
      });
    }

    // Rule 3: consistently low wellness averages over three weeks
    let recent: Vec<&&WeeklyCheckin> = student_checkins
      .iter()
      .filter(|c| c.created_at > three_weeks_ago)
      .collect();

    if recent.len() >= 2 {
      let count = recent.len() as f64;
      let averages = [
        recent.iter().map(|c| c.muscular_recovery).sum::<i64>() as f64 / count,
        recent.iter().map(|c| c.mental_state).sum::<i64>() as f64 / count,
        recent.iter().map(|c| c.sleep_quality).sum::<i64>() as f64 / count,
      ];
      let low_categories = averages
        .iter()
        .filter(|avg| **avg < LOW_SCORE_THRESHOLD)
        .count();

      // Latest check-in anchors the id so re-generation stays stable
      // within a week
      let latest = recent.iter().max_by_key(|c| c.created_at);

      if let Some(latest) = latest.filter(|_| low_categories >= 2) {
        notifications.push(CheckinNotification {
          id: format!(
            "low-scores-{}-{}",
            student.id,
            format_local_date(latest.week_start_date)
          ),
          kind: NotificationKind::LowScores,
          priority: NotificationPriority::Medium,
          student_id: student.id,
          student_name: student.full_name(),
          message: format!(
            "{} has low scores in {} categories",
            student.first_name, low_categories
          ),
          week_start_date: latest.week_start_date,
          created_at: latest.created_at,
        });
      }
    }
  }

  notifications.retain(|n| !dismissed.contains(&n.id));
  notifications
}
