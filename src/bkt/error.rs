use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("invalid input shape: {0}")]
    InvalidInputShape(String),
    #[error("invalid parameter {name}: {value} is outside [0, 1]")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("degenerate probability at observation {step} (correct = {correct}): Bayes denominator is zero")]
    DegenerateProbability { step: usize, correct: bool },
}

impl AssessmentError {
    pub fn shape(message: impl Into<String>) -> Self {
        Self::InvalidInputShape(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInputShape(_) => "INVALID_INPUT_SHAPE",
            Self::InvalidParameter { .. } => "INVALID_PARAMETER",
            Self::DegenerateProbability { .. } => "DEGENERATE_PROBABILITY",
        }
    }
}
