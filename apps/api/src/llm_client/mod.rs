/// LLM Client — the single point of entry for all Gemini API calls.
///
/// No other module talks to the generation API directly. Handlers depend on the
/// `ContentGenerator` trait so the upstream can be swapped in tests.
///
/// Calls are made exactly once: no retry, no backoff. Determinism comes from the
/// fixed sampling config plus a per-text seed, to the extent the model honors it.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Sampling constants. Not configurable.
pub const TEMPERATURE: f32 = 0.0;
pub const TOP_P: f32 = 1.0;
pub const TOP_K: u32 = 1;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Prompt blocked by Gemini: {0}")]
    Blocked(String),

    #[error("Gemini returned no text content")]
    EmptyContent,
}

/// Deterministic sampling configuration sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub seed: u32,
}

impl GenerationConfig {
    pub fn deterministic(seed: u32) -> Self {
        Self {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            seed,
        }
    }
}

/// One fully-built call to the generation capability. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    model: String,
    prompt: String,
    config: GenerationConfig,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: String, config: GenerationConfig) -> Self {
        Self {
            model: model.into(),
            prompt,
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

/// The black-box "generate content" capability. Returns the raw model text,
/// which is expected (not guaranteed) to be JSON.
///
/// Carried in `AppState` as `Arc<dyn ContentGenerator>`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    seed: u32,
}

impl<'a> From<&'a GenerationRequest> for GeminiRequest<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        let config = request.config();
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart {
                    text: request.prompt(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: config.temperature,
                top_p: config.top_p,
                top_k: config.top_k,
                seed: config.seed,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl GeminiResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Gemini `generateContent` client. Built once at startup and shared read-only.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let body = GeminiRequest::from(request);

        let response = self
            .client
            .post(self.endpoint(request.model()))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        parse_generate_response(&text)
    }
}

/// Pulls the message out of a Google error envelope, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<GoogleError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

/// Decodes a successful `generateContent` body into the model's text.
pub fn parse_generate_response(body: &str) -> Result<String, LlmError> {
    let response: GeminiResponse = serde_json::from_str(body)?;

    if let Some(usage) = &response.usage_metadata {
        debug!(
            "Gemini call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
            usage.prompt_token_count, usage.candidates_token_count
        );
    }

    if let Some(text) = response.text() {
        return Ok(text);
    }

    match response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        Some(reason) => Err(LlmError::Blocked(reason)),
        None => Err(LlmError::EmptyContent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> GenerationRequest {
        GenerationRequest::new(
            "gemini-2.5-flash",
            "Rate this resume".to_string(),
            GenerationConfig::deterministic(42),
        )
    }

    #[test]
    fn test_deterministic_config_constants() {
        let config = GenerationConfig::deterministic(7);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.top_p, 1.0);
        assert_eq!(config.top_k, 1);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_request_body_wire_shape() {
        let request = sample_request();
        let body = serde_json::to_value(GeminiRequest::from(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Rate this resume"}]}],
                "generationConfig": {"temperature": 0.0, "topP": 1.0, "topK": 1, "seed": 42}
            })
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(
            "key".to_string(),
            "https://example.test/".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_parse_response_concatenates_parts() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"ats_"}, {"text": "score\": 61}"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 900, "candidatesTokenCount": 300}
        })
        .to_string();
        assert_eq!(parse_generate_response(&body).unwrap(), "{\"ats_score\": 61}");
    }

    #[test]
    fn test_parse_response_uses_first_candidate_only() {
        let body = json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        })
        .to_string();
        assert_eq!(parse_generate_response(&body).unwrap(), "first");
    }

    #[test]
    fn test_parse_response_blocked_prompt() {
        let body = json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string();
        let err = parse_generate_response(&body).unwrap_err();
        assert!(matches!(err, LlmError::Blocked(ref r) if r == "SAFETY"));
    }

    #[test]
    fn test_parse_response_without_text_is_empty_content() {
        let body = json!({"candidates": [{"finishReason": "MAX_TOKENS"}]}).to_string();
        assert!(matches!(
            parse_generate_response(&body),
            Err(LlmError::EmptyContent)
        ));
    }

    #[test]
    fn test_parse_response_invalid_body() {
        assert!(matches!(
            parse_generate_response("<html>oops</html>"),
            Err(LlmError::Parse(_))
        ));
    }

    #[test]
    fn test_api_error_message_from_envelope() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(api_error_message(body), "API key not valid");
    }

    #[test]
    fn test_api_error_message_falls_back_to_body() {
        assert_eq!(api_error_message("quota exceeded"), "quota exceeded");
    }
}
