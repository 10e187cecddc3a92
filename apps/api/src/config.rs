use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub profile_service_url: String,
    pub jobs_service_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Minimum similarity for a job to count as a recommendation.
    pub score_floor: f64,
    /// Maximum number of recommendations returned per request.
    pub result_cap: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            profile_service_url: require_env("PROFILE_SERVICE_URL")?,
            jobs_service_url: require_env("JOBS_SERVICE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            score_floor: std::env::var("RECOMMEND_SCORE_FLOOR")
                .unwrap_or_else(|_| "0.01".to_string())
                .parse::<f64>()
                .context("RECOMMEND_SCORE_FLOOR must be a number")?,
            result_cap: std::env::var("RECOMMEND_RESULT_CAP")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .context("RECOMMEND_RESULT_CAP must be a non-negative integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
