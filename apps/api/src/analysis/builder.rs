//! Deterministic Prompt Builder.
//!
//! The prompt embeds at most `MAX_PROMPT_CHARS` characters of the resume, while
//! the seed is derived from the full extracted text. Two resumes that differ
//! only past the cut-off therefore share a prompt but not a seed.

use md5::{Digest, Md5};

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, RESUME_TEXT_PLACEHOLDER};
use crate::llm_client::{GenerationConfig, GenerationRequest};

/// Hard ceiling on resume characters sent to the model.
pub const MAX_PROMPT_CHARS: usize = 15_000;

const SEED_MODULUS: u32 = 1 << 31;

/// Returns the first `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

pub fn build_prompt(text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace(
        RESUME_TEXT_PLACEHOLDER,
        truncate_chars(text, MAX_PROMPT_CHARS),
    )
}

/// `uint32(first 8 hex digits of MD5(text)) mod 2^31`.
///
/// The first 8 hex digits are the first 4 digest bytes read big-endian.
pub fn derive_seed(text: &str) -> u32 {
    let digest = Md5::digest(text.as_bytes());
    let head = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    head % SEED_MODULUS
}

pub fn build_generation_request(model: &str, text: &str) -> GenerationRequest {
    GenerationRequest::new(
        model,
        build_prompt(text),
        GenerationConfig::deterministic(derive_seed(text)),
    )
}
