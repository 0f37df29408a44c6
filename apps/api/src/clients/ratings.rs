//! Employer ratings client — wraps the Glassdoor employers API.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::{http_client, ClientError};
use crate::config::Config;

const GLASSDOOR_API_URL: &str = "http://api.glassdoor.com/api/api.htm";

/// Outcome of a company lookup. `total_matches` is the source's full match
/// count even though only the most relevant employer is carried; callers use
/// it for the disambiguation note.
#[derive(Debug, Clone)]
pub struct RatingsLookup {
    pub total_matches: u64,
    pub attribution_url: String,
    pub top_match: Option<Employer>,
}

/// One employer record with its numeric sub-ratings and featured review.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "flexible_f64")]
    pub overall_rating: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub culture_and_values_rating: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub senior_leadership_rating: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub compensation_and_benefits_rating: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub career_opportunities_rating: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub work_life_balance_rating: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub recommend_to_friend_rating: f64,
    #[serde(default)]
    pub featured_review: Option<FeaturedReview>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedReview {
    #[serde(default)]
    pub pros: String,
    #[serde(default)]
    pub cons: String,
}

#[async_trait]
pub trait EmployerRatings: Send + Sync {
    async fn lookup(&self, company: &str) -> Result<RatingsLookup, ClientError>;
}

pub struct GlassdoorClient {
    client: reqwest::Client,
    partner_id: String,
    partner_key: String,
    api_version: String,
    user_agent: String,
}

impl GlassdoorClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: http_client(&config.user_agent),
            partner_id: config.glassdoor_partner_id.clone(),
            partner_key: config.glassdoor_partner_key.clone(),
            api_version: config.glassdoor_api_version.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl EmployerRatings for GlassdoorClient {
    async fn lookup(&self, company: &str) -> Result<RatingsLookup, ClientError> {
        let params = [
            ("v", self.api_version.as_str()),
            ("format", "json"),
            ("t.p", self.partner_id.as_str()),
            ("t.k", self.partner_key.as_str()),
            ("userip", "0.0.0.0"),
            ("useragent", self.user_agent.as_str()),
            ("action", "employers"),
            ("q", company),
        ];

        let response = self
            .client
            .get(GLASSDOOR_API_URL)
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

        let envelope: GlassdoorEnvelope = response.json().await?;
        let mut payload = envelope.response;
        debug!(
            "Ratings lookup for '{company}' matched {} employers",
            payload.total_record_count
        );

        // Multiple matches come back relevance-ordered; only the first is kept.
        let top_match = if payload.employers.is_empty() {
            None
        } else {
            Some(payload.employers.remove(0))
        };

        Ok(RatingsLookup {
            total_matches: payload.total_record_count,
            attribution_url: payload.attribution_url,
            top_match,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GlassdoorEnvelope {
    response: GlassdoorResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlassdoorResponse {
    #[serde(default)]
    total_record_count: u64,
    #[serde(default)]
    employers: Vec<Employer>,
    #[serde(rename = "attributionURL", default)]
    attribution_url: String,
}

/// The source serializes ratings sometimes as JSON numbers and sometimes as
/// numeric strings; accept both.
fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_string_ratings() {
        let raw = r#"{
            "success": true,
            "response": {
                "totalRecordCount": 2,
                "attributionURL": "https://www.glassdoor.com/Acme",
                "employers": [
                    {
                        "name": "Acme Corp",
                        "overallRating": "3.8",
                        "cultureAndValuesRating": "3.5",
                        "seniorLeadershipRating": "3.1",
                        "compensationAndBenefitsRating": "4.0",
                        "careerOpportunitiesRating": "3.6",
                        "workLifeBalanceRating": "3.9",
                        "recommendToFriendRating": "78",
                        "featuredReview": {"pros": "Great team", "cons": "Long hours"}
                    },
                    {
                        "name": "Acme Holdings",
                        "overallRating": 2.9,
                        "cultureAndValuesRating": 2.5,
                        "seniorLeadershipRating": 2.2,
                        "compensationAndBenefitsRating": 3.0,
                        "careerOpportunitiesRating": 2.8,
                        "workLifeBalanceRating": 3.1,
                        "recommendToFriendRating": 54
                    }
                ]
            }
        }"#;

        let envelope: GlassdoorEnvelope = serde_json::from_str(raw).unwrap();
        let payload = envelope.response;
        assert_eq!(payload.total_record_count, 2);
        assert_eq!(payload.employers[0].overall_rating, 3.8);
        assert_eq!(payload.employers[0].recommend_to_friend_rating, 78.0);
        assert_eq!(payload.employers[1].overall_rating, 2.9);
        assert_eq!(
            payload.employers[0].featured_review.as_ref().unwrap().pros,
            "Great team"
        );
    }

    #[test]
    fn test_parses_zero_match_response() {
        let raw = r#"{"success": true, "response": {"totalRecordCount": 0, "employers": [], "attributionURL": "https://www.glassdoor.com"}}"#;
        let envelope: GlassdoorEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.response.total_record_count, 0);
        assert!(envelope.response.employers.is_empty());
    }
}
