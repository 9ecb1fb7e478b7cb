//! Resume analysis pipeline and its terminal outcomes.
//!
//! bytes → text → validated text → prompt + seed → raw model text → JSON.
//! Every step either advances or ends the request; nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::analysis::builder::build_generation_request;
use crate::analysis::extractor::extract_text;
use crate::analysis::sanitizer::parse_model_output;
use crate::analysis::validation::{validate_content_type, validate_text_length};
use crate::config::SchemaMode;
use crate::errors::AppError;
use crate::models::report::AnalysisReport;
use crate::state::AppState;

pub const MALFORMED_RESPONSE_ERROR: &str = "Invalid JSON from Gemini";

/// The uploaded file as received. Consumed by `analyze_document`.
#[derive(Debug)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

/// Successful terminal states. Both are answered with 200.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Parsed model output, forwarded verbatim.
    Report(Value),
    /// Model text that did not parse as JSON. Returned with the raw text so the
    /// caller can inspect it.
    Malformed { raw: String },
}

impl IntoResponse for AnalysisOutcome {
    fn into_response(self) -> Response {
        match self {
            AnalysisOutcome::Report(value) => (StatusCode::OK, Json(value)).into_response(),
            AnalysisOutcome::Malformed { raw } => (
                StatusCode::OK,
                Json(json!({
                    "error": MALFORMED_RESPONSE_ERROR,
                    "raw": raw
                })),
            )
                .into_response(),
        }
    }
}

pub async fn analyze_document(
    state: &AppState,
    document: UploadedDocument,
) -> Result<AnalysisOutcome, AppError> {
    validate_content_type(document.content_type.as_deref())?;

    let file_name = document.file_name.as_deref().unwrap_or("<unnamed>");
    info!("Analysing {} ({} bytes)", file_name, document.bytes.len());

    let text = extract_text(state.extractor.clone(), document.bytes).await?;
    validate_text_length(&text)?;
    info!("Extracted {} chars", text.chars().count());

    let request = build_generation_request(&state.config.gemini_model, &text);
    info!(
        "Sending analysis prompt to {} (seed {})",
        request.model(),
        request.config().seed
    );

    let raw = state.generator.generate(&request).await?;

    interpret_model_output(raw, state.config.schema_mode)
}

/// Sanitizes and parses the model text, then applies the schema policy.
pub fn interpret_model_output(
    raw: String,
    mode: SchemaMode,
) -> Result<AnalysisOutcome, AppError> {
    let value = match parse_model_output(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Model returned invalid JSON ({e}); raw length {}", raw.len());
            return Ok(AnalysisOutcome::Malformed { raw });
        }
    };

    match AnalysisReport::from_value(&value) {
        Ok(report) => {
            for warning in report.bound_warnings() {
                warn!("Report outside requested bounds: {warning}");
            }
        }
        Err(e) if mode == SchemaMode::Strict => return Err(e.into()),
        Err(e) => warn!("Forwarding report that does not match schema: {e}"),
    }

    Ok(AnalysisOutcome::Report(value))
}
