//! Unified API error handling.
//!
//! Every endpoint returns `Result<T, ApiError>` so clients always see the
//! same error body shape.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use triage_extract::{ExtractionFailure, FailureReason};
use uuid::Uuid;

/// Standard error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type code.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    /// Extraction failure reason, when the model reply was the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
    /// Unique request ID for log correlation.
    pub request_id: String,
}

/// Unified API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request body (400).
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The model reply could not be turned into a record (502).
    #[error("Model reply could not be processed: {0}")]
    Extraction(#[from] ExtractionFailure),

    /// Internal server error (500).
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            // The model is an external collaborator; its failures are
            // gateway failures, not ours.
            Self::Extraction(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (error_type, reason) = match self {
            Self::BadRequest(_) => ("bad_request", None),
            Self::Extraction(failure) => ("extraction_failed", Some(failure.reason())),
            Self::Internal(_) => ("internal_error", None),
        };

        tracing::error!(
            error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_owned(),
            message: self.to_string(),
            reason,
            request_id: Uuid::new_v4().to_string(),
        })
    }
}
