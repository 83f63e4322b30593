use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Hydration Level
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HydrationLevel {
  VeryLow,
  Low,
  #[default]
  Adequate,
  Good,
  Excellent,
}

impl std::fmt::Display for HydrationLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::VeryLow => write!(f, "very_low"),
      Self::Low => write!(f, "low"),
      Self::Adequate => write!(f, "adequate"),
      Self::Good => write!(f, "good"),
      Self::Excellent => write!(f, "excellent"),
    }
  }
}

impl std::str::FromStr for HydrationLevel {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "very_low" => Ok(Self::VeryLow),
      "low" => Ok(Self::Low),
      "adequate" => Ok(Self::Adequate),
      "good" => Ok(Self::Good),
      "excellent" => Ok(Self::Excellent),
      _ => Err(format!("Unknown hydration level: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Pain Level
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PainLevel {
  #[default]
  None,
  Mild,
  Moderate,
  Intense,
}

impl std::fmt::Display for PainLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::None => write!(f, "none"),
      Self::Mild => write!(f, "mild"),
      Self::Moderate => write!(f, "moderate"),
      Self::Intense => write!(f, "intense"),
    }
  }
}

impl std::str::FromStr for PainLevel {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "none" => Ok(Self::None),
      "mild" => Ok(Self::Mild),
      "moderate" => Ok(Self::Moderate),
      "intense" => Ok(Self::Intense),
      _ => Err(format!("Unknown pain level: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Weekly Check-in
/// ---------------------------------------------------------------------------

/// One weekly self-report. Wellness scores are 1-10 integers.
/// `week_start_date` is always the Monday of the reported week, local
/// calendar. One check-in per (student, week) is meaningful; duplicates
/// resolve first-match-wins at lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyCheckin {
  pub id: i64,
  pub student_id: i64,
  pub week_start_date: NaiveDate,
  pub muscular_recovery: i64,
  pub recovery_quality: i64,
  pub mental_state: i64,
  pub motivation: i64,
  pub sleep_quality: i64,
  pub sleep_hours: f64,
  pub nutrition_consistency: i64,
  pub hydration_level: HydrationLevel,
  pub pain_level: PainLevel,
  pub pain_description: Option<String>,
  pub perceived_progress: i64,
  pub week_highlights: Option<String>,
  pub concerns: Option<String>,
  pub completed: bool,
  pub created_at: DateTime<Utc>,
}

impl WeeklyCheckin {
  /// Whether this check-in counts as a pain report
  pub fn reports_pain(&self) -> bool {
    self.pain_level != PainLevel::None
  }
}
