//! Provisional result computed from raw accuracy alone.
//!
//! Used when the BKT run cannot complete. The report is tagged
//! `Provenance::RawAccuracy` and carries no `bktAnalysis`.

use super::concepts::weak_concepts;
use super::engine::{AssessmentReport, AssessmentRequest, Provenance};
use super::error::AssessmentError;
use super::outcome::{is_passed, raw_score, round_probability, round_score};
use super::remediation::resolve;

pub fn accuracy_fallback(request: &AssessmentRequest) -> Result<AssessmentReport, AssessmentError> {
    request.validate()?;

    let total = request.responses.len();
    let correct = request.correct_answers();
    let accuracy = correct as f64 / total as f64;
    let score = raw_score(correct, total);
    let passed = is_passed(score, accuracy);

    let weak = weak_concepts(&request.responses, &request.concept_tags());
    let remediation_videos = if passed {
        Vec::new()
    } else {
        resolve(&weak, &request.subject_id, &request.topic_title)
    };

    tracing::warn!(
        subject = %request.subject_id,
        total,
        correct,
        "serving raw-accuracy fallback instead of BKT analysis"
    );

    Ok(AssessmentReport {
        passed,
        mastery_probability: round_probability(accuracy),
        score: round_score(score),
        total_questions: total,
        correct_answers: correct,
        weak_concepts: weak,
        remediation_videos,
        bkt_analysis: None,
        provenance: Provenance::RawAccuracy,
    })
}
