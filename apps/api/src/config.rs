use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job-marketplace backend.
    pub market_api_url: String,
    /// Bearer token forwarded to the backend. Absent means only public
    /// endpoints will answer — the host shell owns real session handling.
    pub market_api_token: Option<String>,
    /// Display name stamped on outgoing outreach.
    pub sender_name: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            market_api_url: require_env("MARKET_API_URL")?,
            market_api_token: std::env::var("MARKET_API_TOKEN").ok(),
            sender_name: std::env::var("SENDER_NAME").unwrap_or_else(|_| "Matchboard".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
