use serde::{Deserialize, Serialize};

/// A single job listing as the search source returned it.
///
/// The named fields are the ones the bot reads out; everything else the
/// source sent is carried through untouched in `extra` so the stored record
/// stays a faithful copy of the upstream result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(rename = "jobtitle")]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "formattedRelativeTime", default)]
    pub posted_relative: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
impl JobListing {
    /// Minimal listing fixture for pager and handler tests.
    pub fn sample(title: &str, company: &str) -> Self {
        Self {
            title: title.to_string(),
            company: company.to_string(),
            snippet: format!("{title} snippet"),
            url: format!("https://jobs.example.com/{}", title.replace(' ', "-")),
            posted_relative: "3 days ago".to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_source_field_names() {
        let raw = r#"{
            "jobtitle": "Backend Engineer",
            "company": "Acme",
            "snippet": "Build services.",
            "url": "https://example.com/job/1",
            "formattedRelativeTime": "6 days ago",
            "city": "Berlin",
            "sponsored": false
        }"#;

        let listing: JobListing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.title, "Backend Engineer");
        assert_eq!(listing.posted_relative, "6 days ago");
        assert_eq!(listing.extra["city"], "Berlin");
    }

    #[test]
    fn test_roundtrip_preserves_extra_fields() {
        let raw = r#"{"jobtitle":"QA","company":"Acme","snippet":"s","url":"u","formattedRelativeTime":"today","jobkey":"abc123"}"#;
        let listing: JobListing = serde_json::from_str(raw).unwrap();
        let encoded = serde_json::to_string(&listing).unwrap();
        let back: JobListing = serde_json::from_str(&encoded).unwrap();
        assert_eq!(listing, back);
        assert_eq!(back.extra["jobkey"], "abc123");
    }

    #[test]
    fn test_missing_optional_fields_default_empty() {
        let listing: JobListing = serde_json::from_str(r#"{"jobtitle":"Chef"}"#).unwrap();
        assert_eq!(listing.company, "");
        assert_eq!(listing.posted_relative, "");
    }
}
