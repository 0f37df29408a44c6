//! Job search client — wraps the Indeed publisher search API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{http_client, ClientError};
use crate::config::Config;
use crate::models::job::JobListing;

const INDEED_API_URL: &str = "https://api.indeed.com/ads/apisearch";

/// City answers that mean the user declined to name one.
const NO_CITY_ANSWERS: &[&str] = &["none", "no", "nope"];

/// A search request assembled from the user's stored preferences.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keywords: String,
    pub country: String,
    pub city: Option<String>,
    pub job_type: Option<String>,
}

/// The source's answer: the reduced result page plus its total match count.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub total_results: u64,
    pub listings: Vec<JobListing>,
}

#[async_trait]
pub trait JobSearch: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, ClientError>;
}

pub struct IndeedClient {
    client: reqwest::Client,
    publisher_id: String,
    api_version: String,
    user_agent: String,
}

impl IndeedClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: http_client(&config.user_agent),
            publisher_id: config.indeed_publisher_id.clone(),
            api_version: config.indeed_api_version.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl JobSearch for IndeedClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, ClientError> {
        let location = location_string(&query.country, query.city.as_deref());

        let mut params: Vec<(&str, String)> = vec![
            ("publisher", self.publisher_id.clone()),
            ("v", self.api_version.clone()),
            ("format", "json".to_string()),
            ("q", query.keywords.clone()),
            ("l", location),
            ("userip", "0.0.0.0".to_string()),
            ("useragent", self.user_agent.clone()),
        ];
        if let Some(job_type) = &query.job_type {
            params.push(("jt", job_type.clone()));
        }
        if let Some(code) = country_code(&query.country) {
            params.push(("co", code.to_string()));
        }

        let response = self
            .client
            .get(INDEED_API_URL)
            .query(&params)
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

        let body: IndeedResponse = response.json().await?;
        debug!(
            "Search returned {} of {} total listings",
            body.results.len(),
            body.total_results
        );

        Ok(SearchOutcome {
            total_results: body.total_results,
            listings: body.results,
        })
    }
}

#[derive(Debug, Deserialize)]
struct IndeedResponse {
    #[serde(rename = "totalResults", default)]
    total_results: u64,
    #[serde(default)]
    results: Vec<JobListing>,
}

/// "City, Country" when the user gave a real city, the country alone when
/// they answered with one of the refusal phrases.
fn location_string(country: &str, city: Option<&str>) -> String {
    match city {
        Some(city)
            if !city.trim().is_empty()
                && !NO_CITY_ANSWERS.contains(&city.trim().to_lowercase().as_str()) =>
        {
            format!("{}, {}", city.trim(), country)
        }
        _ => country.to_string(),
    }
}

/// ISO 3166-1 alpha-2 code for the countries users name most often. An
/// unrecognized country is still searchable through the location string, so
/// `None` just drops the country parameter.
fn country_code(country: &str) -> Option<&'static str> {
    match country.trim().to_lowercase().as_str() {
        "united states" | "usa" | "us" | "america" => Some("us"),
        "united kingdom" | "uk" | "great britain" | "england" => Some("gb"),
        "canada" => Some("ca"),
        "australia" => Some("au"),
        "germany" => Some("de"),
        "france" => Some("fr"),
        "netherlands" => Some("nl"),
        "ireland" => Some("ie"),
        "india" => Some("in"),
        "singapore" => Some("sg"),
        "philippines" => Some("ph"),
        "japan" => Some("jp"),
        "new zealand" => Some("nz"),
        _ => None,
    }
}
