//! 1RM estimation and target-weight prescription
//!
//! The primary method is RPE-based (Tuchscherer scale), which tracks
//! powerlifting practice better than rep-only formulas. Epley and Brzycki
//! are kept as cross-checks. Invalid input is a value, not an error: every
//! function returns 0.0 to signal "no estimate available" and lets the
//! caller decide how to render that.

/// RPE to %1RM, keyed in half-points (RPE 10 == 20 half-points).
/// Rows absent from the table fall back to the RPE 7 percentage.
fn rpe_percentage(rpe: f64) -> f64 {
  let half_points = (rpe * 2.0).round() as i64;
  match half_points {
    20 => 100.0, // Maximum effort, no reps left
    19 => 97.5,
    18 => 95.0,
    17 => 92.5,
    16 => 90.0,
    15 => 87.5,
    14 => 85.0,
    13 => 82.5,
    12 => 80.0,
    10 => 75.0, // 5+ reps left
    _ => 85.0,
  }
}

/// Percentage of 1RM after the linear rep penalty: 2.5 points per rep
/// beyond the first, floored at 50.
fn adjusted_percentage(percentage: f64, reps: i64) -> f64 {
  let rep_adjustment = (((reps - 1) as f64) * 2.5).max(0.0);
  (percentage - rep_adjustment).max(50.0)
}

fn round_to_tenth(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

fn round_to_half(value: f64) -> f64 {
  (value * 2.0).round() / 2.0
}

/// Estimate 1RM from a logged set using the RPE method.
///
/// `weight` in kg, `reps` performed, `rpe` on the 6-10 scale (0.5
/// increments; rounded to the nearest 0.5). Out-of-range input yields 0.0.
pub fn estimate_one_rm(weight: f64, reps: i64, rpe: f64) -> f64 {
  if weight <= 0.0 || reps <= 0 || !(6.0..=10.0).contains(&rpe) {
    return 0.0;
  }

  let adjusted = adjusted_percentage(rpe_percentage(rpe), reps);
  round_to_tenth(weight * 100.0 / adjusted)
}

/// Epley formula: `1RM = weight * (1 + reps / 30)`. Identity at one rep.
pub fn estimate_one_rm_epley(weight: f64, reps: i64) -> f64 {
  if weight <= 0.0 || reps <= 0 {
    return 0.0;
  }
  if reps == 1 {
    return weight;
  }

  round_to_tenth(weight * (1.0 + reps as f64 / 30.0))
}

/// Brzycki formula: `1RM = weight / (1.0278 - 0.0278 * reps)`. Identity
/// at one rep.
pub fn estimate_one_rm_brzycki(weight: f64, reps: i64) -> f64 {
  if weight <= 0.0 || reps <= 0 {
    return 0.0;
  }
  if reps == 1 {
    return weight;
  }

  round_to_tenth(weight / (1.0278 - 0.0278 * reps as f64))
}

/// Prescribe a working weight for a rep/RPE target given a known or
/// estimated 1RM. Mirrors the estimation table and rep penalty, solving
/// for weight; rounded to the nearest 0.5 kg plate-loadable value.
pub fn target_weight(one_rm: f64, target_reps: i64, target_rpe: f64) -> f64 {
  if one_rm <= 0.0 || target_reps <= 0 || !(6.0..=10.0).contains(&target_rpe) {
    return 0.0;
  }

  let adjusted = adjusted_percentage(rpe_percentage(target_rpe), target_reps);
  round_to_half(one_rm * adjusted / 100.0)
}

/// Coach-facing description of an RPE value.
pub fn rpe_description(rpe: f64) -> &'static str {
  let half_points = (rpe * 2.0).round() as i64;
  match half_points {
    20 => "Maximum effort - could not do another rep",
    19 => "Could maybe do 1 more rep",
    18 => "Could do 1 more rep",
    17 => "Could maybe do 2 more reps",
    16 => "Could do 2 more reps",
    15 => "Could maybe do 3 more reps",
    14 => "Could do 3 more reps",
    13 => "Could maybe do 4 more reps",
    12 => "Could do 4 more reps",
    10 => "Could do 5 or more reps",
    _ => "Unrecognized RPE",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_single_at_rpe_10_is_the_max() {
    assert_eq!(estimate_one_rm(100.0, 1, 10.0), 100.0);
  }

  #[test]
  fn test_single_at_rpe_8() {
    // 100 * 100 / 90 = 111.11, one decimal
    assert_eq!(estimate_one_rm(100.0, 1, 8.0), 111.1);
  }

  #[test]
  fn test_rep_penalty() {
    // RPE 10, 5 reps: 100 - 4 * 2.5 = 90% -> 111.1
    assert_eq!(estimate_one_rm(100.0, 5, 10.0), 111.1);
  }

  #[test]
  fn test_rpe_rounds_to_nearest_half() {
    // 8.3 rounds to 8.5 (92.5%), 8.2 rounds to 8.0 (90%)
    assert_eq!(estimate_one_rm(100.0, 1, 8.3), estimate_one_rm(100.0, 1, 8.5));
    assert_eq!(estimate_one_rm(100.0, 1, 8.2), estimate_one_rm(100.0, 1, 8.0));
  }

  #[test]
  fn test_invalid_input_is_zero_sentinel() {
    assert_eq!(estimate_one_rm(0.0, 5, 8.0), 0.0);
    assert_eq!(estimate_one_rm(-20.0, 5, 8.0), 0.0);
    assert_eq!(estimate_one_rm(100.0, 0, 8.0), 0.0);
    assert_eq!(estimate_one_rm(100.0, 5, 5.9), 0.0);
    assert_eq!(estimate_one_rm(100.0, 5, 10.1), 0.0);
  }

  #[test]
  fn test_monotone_in_reps_until_the_floor() {
    // More reps at the same RPE means more work done, so the estimate
    // never drops as reps climb, and caps at 2x weight once the
    // percentage floor kicks in.
    let mut previous = 0.0;
    for reps in 1..=30 {
      let estimate = estimate_one_rm(100.0, reps, 8.0);
      assert!(
        estimate >= previous,
        "estimate fell from {} to {} at {} reps",
        previous,
        estimate,
        reps
      );
      assert!(estimate <= 200.0);
      previous = estimate;
    }
  }

  #[test]
  fn test_penalty_floors_at_fifty_percent() {
    // Deep into the penalty the percentage pins at 50: weight * 2
    assert_eq!(estimate_one_rm(100.0, 25, 8.0), 200.0);
    assert_eq!(estimate_one_rm(100.0, 30, 8.0), 200.0);
  }

  #[test]
  fn test_epley_brzycki_identity_at_one_rep() {
    for weight in [60.0, 102.5, 140.0] {
      assert_eq!(estimate_one_rm_epley(weight, 1), weight);
      assert_eq!(estimate_one_rm_brzycki(weight, 1), weight);
    }
  }

  #[test]
  fn test_epley_formula() {
    // 100 * (1 + 10/30) = 133.33 -> 133.3
    assert_eq!(estimate_one_rm_epley(100.0, 10), 133.3);
    assert_eq!(estimate_one_rm_epley(0.0, 10), 0.0);
    assert_eq!(estimate_one_rm_epley(100.0, 0), 0.0);
  }

  #[test]
  fn test_brzycki_formula() {
    // 100 / (1.0278 - 0.278) = 133.37 -> 133.4
    assert_eq!(estimate_one_rm_brzycki(100.0, 10), 133.4);
    assert_eq!(estimate_one_rm_brzycki(-1.0, 5), 0.0);
  }

  #[test]
  fn test_target_weight_inverts_the_estimate() {
    // 1RM 150, triple at RPE 8: 90 - 2 * 2.5 = 85% -> 127.5
    assert_eq!(target_weight(150.0, 3, 8.0), 127.5);
    // Single at RPE 10 prescribes the max itself
    assert_eq!(target_weight(150.0, 1, 10.0), 150.0);
  }

  #[test]
  fn test_target_weight_rounds_to_half_kilo() {
    let w = target_weight(147.3, 5, 8.5);
    assert_eq!((w * 2.0).round() / 2.0, w);
  }

  #[test]
  fn test_target_weight_invalid_input() {
    assert_eq!(target_weight(0.0, 5, 8.0), 0.0);
    assert_eq!(target_weight(150.0, 0, 8.0), 0.0);
    assert_eq!(target_weight(150.0, 5, 11.0), 0.0);
  }

  #[test]
  fn test_rpe_description() {
    assert_eq!(rpe_description(10.0), "Maximum effort - could not do another rep");
    assert_eq!(rpe_description(6.0), "Could do 4 more reps");
    assert_eq!(rpe_description(4.0), "Unrecognized RPE");
  }
}
