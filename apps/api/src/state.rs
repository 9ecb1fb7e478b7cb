use std::sync::Arc;

use crate::analysis::extractor::TextExtractor;
use crate::config::Config;
use crate::llm_client::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in it is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generation backend. Default: `GeminiClient`.
    pub generator: Arc<dyn ContentGenerator>,
    /// PDF text backend. Default: `PdfTextExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
}
