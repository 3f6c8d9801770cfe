//! Parameter Selector - fixed BKT presets per difficulty tier
//!
//! | difficulty   | P(L0) | P(T) | P(G) | P(S) |
//! |--------------|-------|------|------|------|
//! | foundational | 0.30  | 0.15 | 0.25 | 0.10 |
//! | intermediate | 0.20  | 0.10 | 0.20 | 0.15 |
//! | advanced     | 0.10  | 0.08 | 0.15 | 0.20 |
//!
//! Unknown difficulty tags resolve to `intermediate`.

use serde::{Deserialize, Serialize};

use super::error::AssessmentError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    Foundational,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Foundational, Self::Intermediate, Self::Advanced];

    /// Exact, case-sensitive match on the three literal tags.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "foundational" => Self::Foundational,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            other => {
                tracing::debug!(difficulty = other, "unknown difficulty, using intermediate preset");
                Self::Intermediate
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foundational => "foundational",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BktParameters {
    /// P(L0): probability the skill is known before any observation
    pub prior_mastery: f64,
    /// P(T): unknown -> known transition after each opportunity
    pub learn_rate: f64,
    /// P(G): correct answer while not knowing the skill
    pub guess_rate: f64,
    /// P(S): incorrect answer while knowing the skill
    pub slip_rate: f64,
}

const FOUNDATIONAL: BktParameters = BktParameters {
    prior_mastery: 0.30,
    learn_rate: 0.15,
    guess_rate: 0.25,
    slip_rate: 0.10,
};

const INTERMEDIATE: BktParameters = BktParameters {
    prior_mastery: 0.20,
    learn_rate: 0.10,
    guess_rate: 0.20,
    slip_rate: 0.15,
};

const ADVANCED: BktParameters = BktParameters {
    prior_mastery: 0.10,
    learn_rate: 0.08,
    guess_rate: 0.15,
    slip_rate: 0.20,
};

impl BktParameters {
    pub fn new(
        prior_mastery: f64,
        learn_rate: f64,
        guess_rate: f64,
        slip_rate: f64,
    ) -> Result<Self, AssessmentError> {
        let params = Self {
            prior_mastery,
            learn_rate,
            guess_rate,
            slip_rate,
        };
        params.validate()?;
        Ok(params)
    }

    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Foundational => FOUNDATIONAL,
            Difficulty::Intermediate => INTERMEDIATE,
            Difficulty::Advanced => ADVANCED,
        }
    }

    pub fn validate(&self) -> Result<(), AssessmentError> {
        let fields = [
            ("priorMastery", self.prior_mastery),
            ("learnRate", self.learn_rate),
            ("guessRate", self.guess_rate),
            ("slipRate", self.slip_rate),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AssessmentError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for BktParameters {
    fn default() -> Self {
        INTERMEDIATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(Difficulty::parse("foundational"), Difficulty::Foundational);
        assert_eq!(Difficulty::parse("intermediate"), Difficulty::Intermediate);
        assert_eq!(Difficulty::parse("advanced"), Difficulty::Advanced);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_intermediate() {
        assert_eq!(Difficulty::parse("expert"), Difficulty::Intermediate);
        assert_eq!(Difficulty::parse("Advanced"), Difficulty::Intermediate);
        assert_eq!(Difficulty::parse(""), Difficulty::Intermediate);
    }

    #[test]
    fn test_preset_table() {
        let f = BktParameters::for_difficulty(Difficulty::Foundational);
        assert_eq!((f.prior_mastery, f.learn_rate, f.guess_rate, f.slip_rate), (0.30, 0.15, 0.25, 0.10));

        let i = BktParameters::for_difficulty(Difficulty::Intermediate);
        assert_eq!((i.prior_mastery, i.learn_rate, i.guess_rate, i.slip_rate), (0.20, 0.10, 0.20, 0.15));

        let a = BktParameters::for_difficulty(Difficulty::Advanced);
        assert_eq!((a.prior_mastery, a.learn_rate, a.guess_rate, a.slip_rate), (0.10, 0.08, 0.15, 0.20));
    }

    #[test]
    fn test_presets_are_valid() {
        for difficulty in Difficulty::ALL {
            assert!(BktParameters::for_difficulty(difficulty).validate().is_ok());
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = BktParameters::new(0.2, 1.5, 0.2, 0.1).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidParameter {
                name: "learnRate",
                value: 1.5
            }
        );
        assert!(BktParameters::new(f64::NAN, 0.1, 0.2, 0.1).is_err());
        assert!(BktParameters::new(0.0, 0.0, 1.0, 1.0).is_ok());
    }
}
