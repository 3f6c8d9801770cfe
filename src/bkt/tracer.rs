//! BKT Updater - two-state knowledge tracing as a left fold
//!
//! Per observation:
//! - correct:   P(L|obs) = (1-S)·L / ((1-S)·L + G·(1-L))
//! - incorrect: P(L|obs) = S·L / (S·L + (1-G)·(1-L))
//! - transition: L' = P(L|obs) + T·(1 - P(L|obs))
//!
//! Filtering only: each step sees the previous mastery and the current
//! observation, never later ones.

use serde::Serialize;

use super::error::AssessmentError;
use super::outcome::round_probability;
use super::params::BktParameters;

/// Mastery trajectory. `points[0]` is the prior, `points[i]` the mastery
/// after observation `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MasteryTrace {
    points: Vec<f64>,
}

impl MasteryTrace {
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn prior(&self) -> f64 {
        self.points[0]
    }

    pub fn final_mastery(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Number of points, always observations + 1.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rounded(&self) -> Vec<f64> {
        self.points.iter().copied().map(round_probability).collect()
    }
}

/// Single Bayes + learning step. Returns `None` when the evidence
/// denominator vanishes.
pub fn update(params: &BktParameters, p_l: f64, correct: bool) -> Option<f64> {
    let (numerator, denominator) = if correct {
        let p_correct_given_l = 1.0 - params.slip_rate;
        let p_correct = p_correct_given_l * p_l + params.guess_rate * (1.0 - p_l);
        (p_correct_given_l * p_l, p_correct)
    } else {
        let p_incorrect_given_not_l = 1.0 - params.guess_rate;
        let p_incorrect = params.slip_rate * p_l + p_incorrect_given_not_l * (1.0 - p_l);
        (params.slip_rate * p_l, p_incorrect)
    };

    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }

    let posterior = numerator / denominator;
    let next = posterior + params.learn_rate * (1.0 - posterior);
    next.is_finite().then_some(next)
}

pub fn trace_mastery(
    params: &BktParameters,
    observations: &[bool],
) -> Result<MasteryTrace, AssessmentError> {
    if observations.is_empty() {
        return Err(AssessmentError::shape("responses must not be empty"));
    }

    let mut points = Vec::with_capacity(observations.len() + 1);
    points.push(params.prior_mastery);

    let mut p_l = params.prior_mastery;
    for (idx, &correct) in observations.iter().enumerate() {
        p_l = match update(params, p_l, correct) {
            Some(next) => next,
            None => {
                tracing::warn!(step = idx + 1, correct, "degenerate BKT denominator");
                return Err(AssessmentError::DegenerateProbability {
                    step: idx + 1,
                    correct,
                });
            }
        };
        points.push(p_l);
    }

    Ok(MasteryTrace { points })
}
