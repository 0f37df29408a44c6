use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub indeed_publisher_id: String,
    pub indeed_api_version: String,
    pub smmry_api_key: String,
    pub glassdoor_partner_id: String,
    pub glassdoor_partner_key: String,
    pub glassdoor_api_version: String,
    /// Forwarded to the job search and ratings sources, which expect the end
    /// user's agent string as a query parameter.
    pub user_agent: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            indeed_publisher_id: require_env("INDEED_PUBLISHER_ID")?,
            indeed_api_version: env_or("INDEED_API_VERSION", "2"),
            smmry_api_key: require_env("SMMRY_API_KEY")?,
            glassdoor_partner_id: require_env("GLASSDOOR_PARTNER_ID")?,
            glassdoor_partner_key: require_env("GLASSDOOR_PARTNER_KEY")?,
            glassdoor_api_version: env_or("GLASSDOOR_API_VERSION", "1"),
            user_agent: env_or("USER_AGENT", "Mozilla/5.0 (compatible; JobbaBot/0.1)"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
