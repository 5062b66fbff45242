use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare environment boots a working
/// service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub rate_limit_requests: usize,
    pub rate_limit_period_secs: u64,
    pub max_file_size: usize,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            rate_limit_requests: env_or("RATE_LIMIT_REQUESTS", "10")
                .parse::<usize>()
                .context("RATE_LIMIT_REQUESTS must be a positive integer")?,
            rate_limit_period_secs: env_or("RATE_LIMIT_PERIOD", "60")
                .parse::<u64>()
                .context("RATE_LIMIT_PERIOD must be a duration in seconds")?,
            max_file_size: env_or("MAX_FILE_SIZE", "10485760")
                .parse::<usize>()
                .context("MAX_FILE_SIZE must be a size in bytes")?,
            cors_origins: env_or("CORS_ORIGINS", "*")
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
