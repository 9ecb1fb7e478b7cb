use anyhow::{bail, Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// How the parsed model output is checked against `AnalysisReport`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaMode {
    /// Forward whatever parses; schema problems are only logged.
    #[default]
    Passthrough,
    /// Reject output that does not deserialize into `AnalysisReport`.
    Strict,
}

impl std::str::FromStr for SchemaMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" => Ok(SchemaMode::Passthrough),
            "strict" => Ok(SchemaMode::Strict),
            other => {
                bail!("ANALYSIS_SCHEMA_MODE must be 'passthrough' or 'strict', got '{other}'")
            }
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    /// CORS allow-list built from FRONTEND_URL and FRONTEND_URL_ALT. Never empty.
    pub allowed_origins: Vec<String>,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub llm_timeout_secs: u64,
    pub schema_mode: SchemaMode,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_api_key = get("GEMINI_API_KEY")
            .context("Required environment variable 'GEMINI_API_KEY' is not set")?;

        let allowed_origins: Vec<String> = ["FRONTEND_URL", "FRONTEND_URL_ALT"]
            .iter()
            .filter_map(|&key| get(key))
            .collect();
        if allowed_origins.is_empty() {
            bail!("At least one of FRONTEND_URL or FRONTEND_URL_ALT must be set");
        }

        Ok(Config {
            gemini_api_key,
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: get("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            allowed_origins,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: match get("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            llm_timeout_secs: match get("LLM_TIMEOUT_SECS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_LLM_TIMEOUT_SECS,
            },
            schema_mode: match get("ANALYSIS_SCHEMA_MODE") {
                Some(v) => v.parse()?,
                None => SchemaMode::default(),
            },
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
