//! BKT (Bayesian Knowledge Tracing) assessment engine
//!
//! - params: difficulty -> (P(L0), P(T), P(G), P(S)) presets
//! - tracer: mastery trajectory over an answer sequence
//! - concepts: per-concept accuracy, weak concepts below 50%
//! - outcome: pass = score >= 90 AND mastery >= 0.7
//! - remediation: weak concept -> curated or synthesized resource
//! - engine: single entry point producing an `AssessmentReport`
//! - fallback: provisional raw-accuracy report
//! - session: setup/generating/quiz/analyzing/results sequencing

pub mod concepts;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod outcome;
pub mod params;
pub mod remediation;
pub mod session;
pub mod tracer;

pub use engine::{
    assess, assess_with_parameters, AssessmentReport, AssessmentRequest, BktAnalysis, Provenance,
};
pub use error::AssessmentError;
pub use fallback::accuracy_fallback;
pub use params::{BktParameters, Difficulty};
pub use tracer::{trace_mastery, MasteryTrace};
