// Resume analysis: extraction, validation, prompt + seed, Gemini call, sanitizing.
// All LLM calls go through llm_client::ContentGenerator.

pub mod builder;
pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod sanitizer;
pub mod validation;
