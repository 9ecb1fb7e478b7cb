//! Response Sanitizer — cleans raw model text and parses it as JSON.

use serde_json::Value;

/// Removes every "```json" and "```" marker, wherever it appears, then trims.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses sanitized model output. Any well-formed JSON value is accepted as-is;
/// shape checks happen later and only in strict mode.
pub fn parse_model_output(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(raw))
}
