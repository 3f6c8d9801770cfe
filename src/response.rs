use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::bkt::AssessmentError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    fn with_status(
        status: StatusCode,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<AssessmentError> for AppError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::InvalidInputShape(_) | AssessmentError::InvalidParameter { .. } => {
                Self::validation(err.to_string())
            }
            AssessmentError::DegenerateProbability { .. } => Self::with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                err.code(),
                err.to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.message,
            code: self.code,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_map_to_status() {
        let shape: AppError = AssessmentError::shape("responses must not be empty").into();
        assert_eq!(shape.status(), StatusCode::BAD_REQUEST);
        assert_eq!(shape.code(), "VALIDATION_ERROR");

        let degenerate: AppError = AssessmentError::DegenerateProbability {
            step: 3,
            correct: false,
        }
        .into();
        assert_eq!(degenerate.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(degenerate.code(), "DEGENERATE_PROBABILITY");
    }
}
