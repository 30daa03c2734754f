use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a workable default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Single allowed CORS origin; permissive when unset.
    pub cors_allowed_origin: Option<String>,
    /// External NER service consulted for person names when the line
    /// heuristic fails; disabled when unset.
    pub ner_endpoint: Option<String>,
    /// Upload body limit in bytes.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
            ner_endpoint: std::env::var("NER_ENDPOINT").ok(),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}
