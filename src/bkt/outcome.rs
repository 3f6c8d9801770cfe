//! Outcome Classifier and the rounding policy for reported values.
//!
//! A pass needs both a high raw score and a high inferred mastery, so a
//! lucky-guess run with low mastery still fails.

pub const PASS_SCORE: f64 = 90.0;
pub const PASS_MASTERY: f64 = 0.7;

pub fn is_passed(score: f64, final_mastery: f64) -> bool {
    score >= PASS_SCORE && final_mastery >= PASS_MASTERY
}

/// Percentage of correct answers, unrounded.
pub fn raw_score(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

/// Nearest 0.01.
pub fn round_probability(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round_score(score: f64) -> u32 {
    score.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_requires_both_conditions() {
        assert!(!is_passed(95.0, 0.65));
        assert!(!is_passed(85.0, 0.9));
        assert!(is_passed(92.0, 0.75));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert!(is_passed(90.0, 0.7));
        assert!(!is_passed(89.999, 0.99));
    }

    #[test]
    fn test_raw_score() {
        assert_eq!(raw_score(4, 5), 80.0);
        assert_eq!(raw_score(0, 0), 0.0);
        assert!((raw_score(2, 3) - 66.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_probability(0.9658935347793122), 0.97);
        assert_eq!(round_probability(0.123), 0.12);
        assert_eq!(round_score(66.666), 67);
        assert_eq!(round_score(80.0), 80);
    }
}
