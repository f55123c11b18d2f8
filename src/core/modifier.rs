//! Potential modifier: a 1.5-power curve around the average score of 50.
//!
//! The curve is asymmetric. Above average it takes 50 points to reach the
//! full +80% bonus; below average only 40 points reach the full -80% penalty.

use super::potential::{MAX_POTENTIAL_SCORE, MIN_POTENTIAL_SCORE};

pub const AVERAGE_POTENTIAL_SCORE: f64 = 50.0;
pub const MAX_MODIFIER: f64 = 0.80;
pub const EXPONENT: f64 = 1.5;

/// Points above average needed for the full bonus.
pub const UPSIDE_RUNWAY: f64 = MAX_POTENTIAL_SCORE - AVERAGE_POTENTIAL_SCORE;
/// Points below average needed for the full penalty.
pub const DOWNSIDE_RUNWAY: f64 = AVERAGE_POTENTIAL_SCORE - MIN_POTENTIAL_SCORE;

/// Deltas smaller than this are treated as exactly average.
pub const NEUTRAL_BAND: f64 = 1e-2;

/// Map a potential score to a modifier in [-0.80, +0.80].
///
/// A NaN score has no distance from average and maps to 0.
pub fn compute_final_modifier(potential_score: f64) -> f64 {
    if potential_score.is_nan() {
        return 0.0;
    }

    let delta = potential_score - AVERAGE_POTENTIAL_SCORE;
    if delta.abs() < NEUTRAL_BAND {
        return 0.0;
    }

    let modifier = if delta > 0.0 {
        let k = MAX_MODIFIER / UPSIDE_RUNWAY.powf(EXPONENT);
        k * delta.powf(EXPONENT)
    } else {
        let k = MAX_MODIFIER / DOWNSIDE_RUNWAY.powf(EXPONENT);
        -k * delta.abs().powf(EXPONENT)
    };

    modifier.clamp(-MAX_MODIFIER, MAX_MODIFIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_runways() {
        assert_eq!(UPSIDE_RUNWAY, 50.0);
        assert_eq!(DOWNSIDE_RUNWAY, 40.0);
    }

    #[test]
    fn test_average_is_neutral() {
        assert_eq!(compute_final_modifier(50.0), 0.0);
        assert_eq!(compute_final_modifier(50.009), 0.0);
        assert_eq!(compute_final_modifier(49.991), 0.0);
        assert_ne!(compute_final_modifier(50.02), 0.0);
    }

    #[test]
    fn test_full_bonus_and_penalty() {
        assert!((compute_final_modifier(100.0) - 0.80).abs() < EPS);
        assert!((compute_final_modifier(10.0) + 0.80).abs() < EPS);
    }

    #[test]
    fn test_penalty_is_steeper_than_bonus() {
        let bonus = compute_final_modifier(70.0);
        let penalty = compute_final_modifier(30.0);
        assert!(bonus > 0.0 && penalty < 0.0);
        assert!(penalty.abs() > bonus);
    }

    #[test]
    fn test_superlinear_growth() {
        let small = compute_final_modifier(60.0);
        let large = compute_final_modifier(80.0);
        // Three times the delta gives more than three times the modifier.
        assert!(large > 3.0 * small);
    }

    #[test]
    fn test_out_of_domain_scores_are_clamped() {
        assert_eq!(compute_final_modifier(250.0), MAX_MODIFIER);
        assert_eq!(compute_final_modifier(-50.0), -MAX_MODIFIER);
    }

    #[test]
    fn test_non_finite_scores_stay_in_bounds() {
        assert_eq!(compute_final_modifier(f64::NAN), 0.0);
        assert_eq!(compute_final_modifier(f64::INFINITY), MAX_MODIFIER);
        assert_eq!(compute_final_modifier(f64::NEG_INFINITY), -MAX_MODIFIER);
    }
}
