//! Clients for the three external data sources: job search, posting
//! summarization and employer ratings.
//!
//! Each client is one request/response call — no retries, no caching. Every
//! call carries an explicit timeout so a stalled source fails the call
//! instead of stalling the conversation turn.

pub mod jobs;
pub mod ratings;
pub mod summary;

use std::time::Duration;

use thiserror::Error;

/// Shared error type for the external data source clients.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

const CALL_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn http_client(user_agent: &str) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(CALL_TIMEOUT)
        .user_agent(user_agent)
        .build()
        .expect("Failed to build HTTP client")
}
