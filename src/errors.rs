use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(ValidationErrors),

    #[error("messaging error: {0}")]
    Messaging(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "errors": errors }),
            ),
            AppError::Messaging(_) => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({ "error": self.to_string() }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Why a submission ended in the `error` outcome. The user sees the same
/// banner for both; the distinction only reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("contact endpoint rejected the request with status {status}")]
    Rejected { status: u16 },

    #[error("transport error: {0:#}")]
    Transport(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("testimonial index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}
