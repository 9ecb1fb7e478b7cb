//! Text Extractor — turns uploaded PDF bytes into plain text.
//!
//! The parser is a black box behind `TextExtractor`. A page that yields no text
//! contributes an empty string; only an unparsable container is an error.
//! Parsing is CPU-bound and runs on the blocking pool.

use std::sync::Arc;

use anyhow::anyhow;
use bytes::Bytes;
use thiserror::Error;
use tokio::task::JoinError;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not parse PDF: {0}")]
    Parse(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Per-page text extraction. `None` marks a page with no extractable text.
pub trait TextExtractor: Send + Sync {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<Option<String>>, ExtractionError>;
}

/// `pdf-extract` backed extractor used in production.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<Option<String>>, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractionError::Parse(e.to_string()))?;

        Ok(pages
            .into_iter()
            .map(|page| if page.is_empty() { None } else { Some(page) })
            .collect())
    }
}

/// Concatenates page text in order. Missing pages add nothing; no separator.
pub fn join_pages(pages: Vec<Option<String>>) -> String {
    pages.into_iter().flatten().collect()
}

/// Runs the extractor off the async executor and joins the pages.
/// A parser panic is reported as an extraction failure rather than tearing
/// down the request task.
pub async fn extract_text(
    extractor: Arc<dyn TextExtractor>,
    bytes: Bytes,
) -> Result<String, AppError> {
    let pages = tokio::task::spawn_blocking(move || extractor.extract_pages(&bytes))
        .await
        .map_err(join_failure)??;

    Ok(join_pages(pages))
}

/// A panic blames the document; a cancelled task (runtime shutting down) does not.
fn join_failure(err: JoinError) -> AppError {
    if err.is_panic() {
        ExtractionError::Aborted(err.to_string()).into()
    } else {
        AppError::Internal(anyhow!("PDF extraction task did not complete: {err}"))
    }
}
