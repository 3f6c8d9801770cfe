//! Assessment orchestration
//!
//! Parameter Selector -> BKT Updater -> Outcome Classifier, and
//! Concept Aggregator -> Remediation Resolver when the verdict is a fail.
//! Pure and synchronous; identical requests give identical reports.

use serde::{Deserialize, Deserializer, Serialize};

use super::concepts::weak_concepts;
use super::error::AssessmentError;
use super::outcome::{is_passed, raw_score, round_probability, round_score};
use super::params::{BktParameters, Difficulty};
use super::remediation::{resolve, RemediationVideo};
use super::tracer::trace_mastery;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    #[serde(default)]
    pub subject_id: String,
    #[serde(default)]
    pub topic_title: String,
    pub responses: Vec<bool>,
    #[serde(default, deserialize_with = "lenient_tag")]
    pub difficulty: String,
    #[serde(default)]
    pub question_concepts: Vec<Option<String>>,
    /// Overrides the difficulty preset when present.
    #[serde(default)]
    pub parameters: Option<BktParameters>,
}

/// Any non-string difficulty (null, numbers, objects) reads as an unknown
/// tag, which resolves to the intermediate preset.
fn lenient_tag<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

impl AssessmentRequest {
    pub fn new(
        subject_id: impl Into<String>,
        topic_title: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            topic_title: topic_title.into(),
            difficulty: difficulty.into(),
            ..Self::default()
        }
    }

    pub fn answer(mut self, correct: bool, concept: impl Into<String>) -> Self {
        self.responses.push(correct);
        self.question_concepts.push(Some(concept.into()));
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::parse(&self.difficulty)
    }

    /// Explicit parameters if supplied, otherwise the difficulty preset.
    pub fn bkt_parameters(&self) -> BktParameters {
        self.parameters
            .unwrap_or_else(|| BktParameters::for_difficulty(self.difficulty()))
    }

    pub fn correct_answers(&self) -> usize {
        self.responses.iter().filter(|&&correct| correct).count()
    }

    /// Concept tags with absent entries flattened to empty strings, which
    /// the aggregator reads as `"General"`.
    pub fn concept_tags(&self) -> Vec<String> {
        self.question_concepts
            .iter()
            .map(|tag| tag.clone().unwrap_or_default())
            .collect()
    }

    /// Rejects empty `responses` and a concept list whose length disagrees
    /// with them. An empty concept list tags every question `"General"`.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        if self.responses.is_empty() {
            return Err(AssessmentError::shape("responses must not be empty"));
        }
        if !self.question_concepts.is_empty() && self.question_concepts.len() != self.responses.len() {
            return Err(AssessmentError::shape(format!(
                "questionConcepts has {} entries but responses has {}",
                self.question_concepts.len(),
                self.responses.len()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Provenance {
    Bkt,
    RawAccuracy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BktAnalysis {
    pub p_learn: f64,
    pub p_guess: f64,
    pub p_slip: f64,
    pub p_known: f64,
    pub trace: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub passed: bool,
    pub mastery_probability: f64,
    pub score: u32,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub weak_concepts: Vec<String>,
    pub remediation_videos: Vec<RemediationVideo>,
    pub bkt_analysis: Option<BktAnalysis>,
    pub provenance: Provenance,
}

pub fn assess(request: &AssessmentRequest) -> Result<AssessmentReport, AssessmentError> {
    assess_with_parameters(request, request.bkt_parameters())
}

pub fn assess_with_parameters(
    request: &AssessmentRequest,
    params: BktParameters,
) -> Result<AssessmentReport, AssessmentError> {
    params.validate()?;
    request.validate()?;

    let trace = trace_mastery(&params, &request.responses)?;
    let final_mastery = trace.final_mastery();

    let total = request.responses.len();
    let correct = request.correct_answers();
    let score = raw_score(correct, total);
    let passed = is_passed(score, final_mastery);

    let weak = weak_concepts(&request.responses, &request.concept_tags());
    let remediation_videos = if passed {
        Vec::new()
    } else {
        resolve(&weak, &request.subject_id, &request.topic_title)
    };

    let mastery_probability = round_probability(final_mastery);

    tracing::debug!(
        subject = %request.subject_id,
        total,
        correct,
        mastery = mastery_probability,
        passed,
        weak = weak.len(),
        "assessment analysed"
    );

    Ok(AssessmentReport {
        passed,
        mastery_probability,
        score: round_score(score),
        total_questions: total,
        correct_answers: correct,
        weak_concepts: weak,
        remediation_videos,
        bkt_analysis: Some(BktAnalysis {
            p_learn: params.learn_rate,
            p_guess: params.guess_rate,
            p_slip: params.slip_rate,
            p_known: mastery_probability,
            trace: trace.rounded(),
        }),
        provenance: Provenance::Bkt,
    })
}
