use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Failures of a single recommendation run.
///
/// The first three variants are the recognized outcomes of the pipeline and carry
/// fixed messages that callers match on. Everything else is an infrastructure
/// failure and is reported with a distinct prefix.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("No student ID provided")]
    MissingInput,

    #[error("No resume found for this student")]
    ResumeNotFound,

    #[error("No job postings found")]
    EmptyJobCorpus,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl RecommendError {
    /// The `{"error": "..."}` document written in place of a result list.
    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string() })
    }

    fn status(&self) -> StatusCode {
        match self {
            RecommendError::MissingInput | RecommendError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            RecommendError::ResumeNotFound | RecommendError::EmptyJobCorpus => {
                StatusCode::NOT_FOUND
            }
            RecommendError::Database(_) | RecommendError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            RecommendError::Database(e) => {
                tracing::error!("Database error: {e}");
                json!({ "error": "A database error occurred" })
            }
            RecommendError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                json!({ "error": "An internal server error occurred" })
            }
            _ => self.to_json(),
        };

        (status, Json(body)).into_response()
    }
}
