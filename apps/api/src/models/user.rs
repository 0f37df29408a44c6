use chrono::{DateTime, Utc};

use crate::models::job::JobListing;

/// One record per front-end user id.
///
/// `search_results` is persisted as a single JSON text field and decoded at
/// the store boundary, so handlers only ever see the typed list. The
/// `reading_index` cursor points at the next unread listing; it equals the
/// list length once everything has been read.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub keywords: Option<String>,
    pub job_type: Option<String>,
    pub search_results: Vec<JobListing>,
    pub reading_index: usize,
    pub created_at: DateTime<Utc>,
}

/// The four free-text search preferences captured from the front end's slots.
/// Re-capture overwrites them wholesale.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub country: Option<String>,
    pub city: Option<String>,
    pub keywords: Option<String>,
    pub job_type: Option<String>,
}

#[cfg(test)]
impl UserProfile {
    /// Profile fixture with preferences filled in and no search yet.
    pub fn sample(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            country: Some("Germany".to_string()),
            city: Some("Berlin".to_string()),
            keywords: Some("rust backend".to_string()),
            job_type: Some("fulltime".to_string()),
            search_results: Vec::new(),
            reading_index: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_results(mut self, results: Vec<JobListing>, reading_index: usize) -> Self {
        self.search_results = results;
        self.reading_index = reading_index;
        self
    }
}
