use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::bkt::{self, AssessmentError, AssessmentReport, AssessmentRequest, BktParameters, Difficulty};
use crate::response::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetDto {
    difficulty: &'static str,
    #[serde(flatten)]
    parameters: BktParameters,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(assess))
        .route("/presets", get(presets))
}

async fn assess(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentReport>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    let runtime = state.runtime();

    let report = match bkt::assess(&request) {
        Ok(report) => report,
        Err(err @ AssessmentError::DegenerateProbability { .. }) if runtime.is_fallback_enabled() => {
            tracing::warn!(error = %err, subject = %request.subject_id, "BKT analysis failed");
            bkt::accuracy_fallback(&request)?
        }
        Err(err) => {
            tracing::info!(error = %err, subject = %request.subject_id, "assessment rejected");
            return Err(err.into());
        }
    };

    runtime.maybe_assess_delay().await;

    Ok(Json(report))
}

async fn presets() -> Json<Vec<PresetDto>> {
    let presets = Difficulty::ALL
        .iter()
        .map(|difficulty| PresetDto {
            difficulty: difficulty.as_str(),
            parameters: BktParameters::for_difficulty(*difficulty),
        })
        .collect();
    Json(presets)
}
