//! Timezone-safe calendar day handling
//!
//! Every component that compares dates goes through this module. Date-only
//! strings are interpreted at local midnight, never as UTC midnight, which
//! keeps prescribed workout dates from drifting one day behind for users
//! west of Greenwich.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// Parse a date value into its local calendar day.
///
/// Accepts a bare `YYYY-MM-DD` string or a full timestamp; for timestamps
/// the wall-clock date portion wins. Returns `None` for unparseable input.
pub fn parse_local_date(value: &str) -> Option<NaiveDate> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  // A timestamp's date portion is already the local wall-clock day
  let date_part = value.split(['T', ' ']).next()?;
  NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Canonical `YYYY-MM-DD` form of a calendar day.
pub fn format_local_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

/// The local calendar day of an instant, regardless of its source timezone.
pub fn local_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
  instant.with_timezone(&Local).date_naive()
}

/// Whether a stored date string and an instant fall on the same local
/// calendar day. Day equality is canonical-string equality; the instant's
/// time of day and the UTC date it happens to map to are irrelevant.
pub fn is_same_local_day<Tz: TimeZone>(date: &str, instant: &DateTime<Tz>) -> bool {
  parse_local_date(date).is_some_and(|d| d == local_day(instant))
}

/// Whether a stored date string is today relative to the supplied clock.
pub fn is_today(date: &str, now: &DateTime<Local>) -> bool {
  is_same_local_day(date, now)
}

/// The Monday on or before the given day. Sunday steps back six days to
/// the previous Monday; every other weekday steps back to its own Monday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
  let days_back = date.weekday().num_days_from_monday() as i64;
  date - chrono::Duration::days(days_back)
}
