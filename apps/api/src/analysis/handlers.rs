//! Axum route handler for resume uploads.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
};

use crate::analysis::pipeline::{analyze_document, AnalysisOutcome, UploadedDocument};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the resume.
pub const FILE_FIELD: &str = "file";

/// Headroom on top of the file limit for boundaries and part headers, so the
/// body limit never rejects a file that is within `MAX_UPLOAD_BYTES`.
pub const MULTIPART_OVERHEAD_BYTES: usize = 16 * 1024;

/// POST /analyze
///
/// Accepts a multipart upload with a single `file` field and returns the
/// analysis report, a `{error, raw}` body for unparsable model output, or an
/// error envelope.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AnalysisOutcome, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::InvalidUpload(e.body_text()))?;
    let limit = state.config.max_upload_bytes;
    let document = read_file_field(&mut multipart, limit).await?;
    analyze_document(&state, document).await
}

/// Returns the first `file` field; other fields are skipped.
/// The file itself must fit in `limit` bytes.
async fn read_file_field(
    multipart: &mut Multipart,
    limit: usize,
) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, limit))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| upload_error(e, limit))?;
        if bytes.len() > limit {
            return Err(AppError::UploadTooLarge { limit });
        }

        return Ok(UploadedDocument {
            bytes,
            content_type,
            file_name,
        });
    }

    Err(AppError::MissingFile)
}

fn upload_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::UploadTooLarge { limit }
    } else {
        AppError::InvalidUpload(err.body_text())
    }
}
