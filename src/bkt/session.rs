//! Assessment phase sequencing for a single learner screen.
//!
//! setup -> generating -> quiz -> analyzing -> results, with one retry edge
//! results -> generating and an exit to the report view from any phase.
//! The engine runs exactly once per quiz -> analyzing transition.

use serde::Serialize;
use thiserror::Error;

use super::engine::{assess, AssessmentReport, AssessmentRequest};
use super::error::AssessmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentPhase {
    Setup,
    Generating,
    Quiz,
    Analyzing,
    Results,
    Report,
}

impl AssessmentPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            AssessmentPhase::Setup => "setup",
            AssessmentPhase::Generating => "generating",
            AssessmentPhase::Quiz => "quiz",
            AssessmentPhase::Analyzing => "analyzing",
            AssessmentPhase::Results => "results",
            AssessmentPhase::Report => "report",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhaseTransition {
    pub from: AssessmentPhase,
    pub to: AssessmentPhase,
    pub reason: String,
    pub timestamp_ms: i64,
}

const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: AssessmentPhase,
        to: AssessmentPhase,
    },
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

#[derive(Debug)]
pub struct AssessmentSession {
    current: AssessmentPhase,
    history: Vec<PhaseTransition>,
    attempts: u32,
    report: Option<AssessmentReport>,
    last_error: Option<AssessmentError>,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            current: AssessmentPhase::Setup,
            history: Vec::new(),
            attempts: 0,
            report: None,
            last_error: None,
        }
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.current
    }

    pub fn history(&self) -> &[PhaseTransition] {
        &self.history
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn report(&self) -> Option<&AssessmentReport> {
        self.report.as_ref()
    }

    pub fn last_error(&self) -> Option<&AssessmentError> {
        self.last_error.as_ref()
    }

    pub fn can_transition_to(&self, target: AssessmentPhase) -> bool {
        use AssessmentPhase::*;
        matches!(
            (self.current, target),
            (Setup, Generating)
                | (Generating, Quiz)
                | (Quiz, Analyzing)
                | (Analyzing, Results)
                | (Results, Generating)
        ) || (target == Report && self.current != Report)
    }

    pub fn transition_to(
        &mut self,
        target: AssessmentPhase,
        reason: impl Into<String>,
    ) -> Result<(), SessionError> {
        if !self.can_transition_to(target) {
            return Err(SessionError::InvalidTransition {
                from: self.current,
                to: target,
            });
        }

        tracing::debug!(
            from = self.current.as_str(),
            to = target.as_str(),
            "assessment phase changed"
        );

        self.history.push(PhaseTransition {
            from: self.current,
            to: target,
            reason: reason.into(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        });
        self.current = target;

        if self.history.len() > HISTORY_LIMIT {
            let extra = self.history.len() - HISTORY_LIMIT;
            self.history.drain(0..extra);
        }

        Ok(())
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.transition_to(AssessmentPhase::Generating, "assessment started")
    }

    pub fn questions_ready(&mut self) -> Result<(), SessionError> {
        self.transition_to(AssessmentPhase::Quiz, "questions ready")
    }

    /// quiz -> analyzing -> results. An engine failure still lands in
    /// results, with `last_error` set and no report.
    pub fn submit(&mut self, request: &AssessmentRequest) -> Result<&AssessmentReport, SessionError> {
        self.transition_to(AssessmentPhase::Analyzing, "answers submitted")?;
        self.attempts += 1;

        let outcome = assess(request);
        self.transition_to(AssessmentPhase::Results, "analysis finished")?;

        match outcome {
            Ok(report) => {
                self.last_error = None;
                Ok(&*self.report.insert(report))
            }
            Err(err) => {
                self.report = None;
                self.last_error = Some(err.clone());
                Err(err.into())
            }
        }
    }

    pub fn retry(&mut self) -> Result<(), SessionError> {
        self.transition_to(AssessmentPhase::Generating, "retry assessment")?;
        self.report = None;
        self.last_error = None;
        Ok(())
    }

    pub fn exit_to_report(&mut self) -> Result<(), SessionError> {
        self.transition_to(AssessmentPhase::Report, "view report")
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}
