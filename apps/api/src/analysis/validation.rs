//! Content Validator — rejects uploads that cannot be analysed.
//!
//! Two checks, applied in this order by the pipeline:
//! 1. declared content type must be exactly `application/pdf` (before parsing)
//! 2. extracted text must be at least `MIN_TEXT_CHARS` characters long

use crate::errors::AppError;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
/// Measured in characters, not bytes.
pub const MIN_TEXT_CHARS: usize = 50;

/// Exact, case-sensitive match. A missing content type is a mismatch.
pub fn validate_content_type(content_type: Option<&str>) -> Result<(), AppError> {
    match content_type {
        Some(PDF_CONTENT_TYPE) => Ok(()),
        _ => Err(AppError::UnsupportedMediaType),
    }
}

pub fn validate_text_length(text: &str) -> Result<(), AppError> {
    if text.chars().count() < MIN_TEXT_CHARS {
        return Err(AppError::InsufficientContent);
    }
    Ok(())
}
