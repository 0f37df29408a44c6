//! Posting summarizer — wraps the SMMRY text summarization API.
//!
//! Summarization is strictly best-effort: the API reports its own failures
//! in-band with a 200 status, and both that and an empty summary come back
//! as `Ok(None)` so the caller can fall back to the listing snippet.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use super::{http_client, ClientError};
use crate::config::Config;

const SMMRY_API_URL: &str = "https://api.smmry.com";
/// Sentence budget for the condensed posting.
const SUMMARY_SENTENCES: u32 = 7;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Condenses the page at `url`. `Ok(None)` means the source had nothing
    /// usable.
    async fn summarize(&self, url: &str) -> Result<Option<String>, ClientError>;
}

pub struct SmmryClient {
    client: reqwest::Client,
    api_key: String,
}

impl SmmryClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: http_client(&config.user_agent),
            api_key: config.smmry_api_key.clone(),
        }
    }
}

#[async_trait]
impl Summarizer for SmmryClient {
    async fn summarize(&self, url: &str) -> Result<Option<String>, ClientError> {
        let response = self
            .client
            .get(SMMRY_API_URL)
            .query(&[
                ("SM_API_KEY", self.api_key.clone()),
                ("SM_URL", url.to_string()),
                ("SM_LENGTH", SUMMARY_SENTENCES.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SmmryResponse = response.json().await?;

        if let Some(code) = body.sm_api_error {
            warn!(
                "Summary source reported error {code} for {url}: {}",
                body.sm_api_message.unwrap_or_default()
            );
            return Ok(None);
        }

        Ok(body
            .sm_api_content
            .filter(|content| !content.trim().is_empty()))
    }
}

#[derive(Debug, Deserialize)]
struct SmmryResponse {
    #[serde(default)]
    sm_api_content: Option<String>,
    #[serde(default)]
    sm_api_error: Option<i64>,
    #[serde(default)]
    sm_api_message: Option<String>,
}
