use anyhow::{Context, Result};

/// Backend origin used when `BRIDGE_BASE_URL` is unset (the Flask dev server default).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to local-development defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let base_url =
            std::env::var("BRIDGE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Config {
            base_url: validate_base_url(&base_url)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Replaces the backend origin, e.g. from a `--base-url` flag.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = validate_base_url(base_url)?;
        Ok(self)
    }
}

/// Checks the origin is an absolute http(s) URL and strips any trailing slash,
/// so endpoint paths can be appended verbatim.
fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .with_context(|| format!("Backend base URL '{raw}' is not a valid URL"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("Backend base URL '{raw}' must use http or https");
    }

    Ok(trimmed.to_string())
}
