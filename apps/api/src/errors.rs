use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extractor::ExtractionError;
use crate::llm_client::LlmError;
use crate::models::report::SchemaError;

/// Application-level error type. Each variant maps to exactly one status.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Malformed model output is not an error here: it is a successful
/// `AnalysisOutcome` carrying the raw text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Only PDF files are supported")]
    UnsupportedMediaType,

    #[error("Could not extract enough text")]
    InsufficientContent,

    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Upload exceeds the {limit} byte limit")]
    UploadTooLarge { limit: usize },

    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("{0}")]
    Upstream(#[from] LlmError),

    #[error("{0}")]
    SchemaViolation(#[from] SchemaError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedMediaType
            | AppError::InsufficientContent
            | AppError::MissingFile
            | AppError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            AppError::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::SchemaViolation(_) => StatusCode::BAD_GATEWAY,
            AppError::Extraction(_) | AppError::Upstream(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            AppError::InsufficientContent => "INSUFFICIENT_CONTENT",
            AppError::MissingFile => "MISSING_FILE",
            AppError::InvalidUpload(_) => "INVALID_UPLOAD",
            AppError::UploadTooLarge { .. } => "UPLOAD_TOO_LARGE",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Extraction(e) => tracing::error!("PDF extraction failed: {e}"),
            AppError::Upstream(e) => tracing::error!("Gemini call failed: {e}"),
            AppError::SchemaViolation(e) => tracing::error!("Model output rejected: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => tracing::info!("Rejected upload: {self}"),
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_400() {
        for err in [
            AppError::UnsupportedMediaType,
            AppError::InsufficientContent,
            AppError::MissingFile,
            AppError::InvalidUpload("bad boundary".to_string()),
        ] {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST, "{err}");
        }
    }

    #[test]
    fn test_oversized_upload_is_413() {
        let err = AppError::UploadTooLarge { limit: 1024 };
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "Upload exceeds the 1024 byte limit");
    }

    #[test]
    fn test_upstream_error_keeps_raw_message() {
        let err = AppError::from(LlmError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "UPSTREAM_ERROR");
        assert_eq!(
            err.to_string(),
            "API error (status 429): Resource has been exhausted"
        );
    }

    #[test]
    fn test_extraction_error_is_500() {
        let err = AppError::from(ExtractionError::Parse("invalid file header".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "EXTRACTION_ERROR");
        assert!(err.to_string().contains("invalid file header"));
    }

    #[test]
    fn test_schema_violation_is_bad_gateway() {
        let err = AppError::from(SchemaError::ScoreOutOfRange {
            field: "ats_score",
            value: 120,
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            AppError::UnsupportedMediaType.to_string(),
            "Only PDF files are supported"
        );
        assert_eq!(
            AppError::InsufficientContent.to_string(),
            "Could not extract enough text"
        );
        assert_eq!(AppError::MissingFile.to_string(), "No file uploaded");
    }
}
