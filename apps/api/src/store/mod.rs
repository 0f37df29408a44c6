//! User record persistence — one record per front-end user id.
//!
//! Handlers receive the store as an `Arc<dyn UserStore>` so composition tests
//! can substitute the in-memory double. The serialized-text encoding of the
//! result list lives here and nowhere else.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::job::JobListing;
use crate::models::user::{Preferences, UserProfile};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("search result codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("reading index moved concurrently (expected {expected})")]
    Conflict { expected: usize },
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetches a profile, decoding the stored result list. `Ok(None)` means
    /// the user has never captured preferences.
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Creates the record on first capture, otherwise overwrites the four
    /// preference fields wholesale. Stored search results and the reading
    /// cursor are left alone.
    async fn upsert_preferences(
        &self,
        user_id: &str,
        prefs: &Preferences,
    ) -> Result<(), StoreError>;

    /// Replaces the stored result list and resets the reading cursor to zero
    /// in a single write.
    async fn replace_search_results(
        &self,
        user_id: &str,
        results: &[JobListing],
    ) -> Result<(), StoreError>;

    /// Moves the reading cursor from `from` to `to`. The write is conditional
    /// on the cursor still holding `from`; a duplicate turn that already
    /// moved it gets `StoreError::Conflict` instead of a silent lost update.
    async fn set_reading_index(
        &self,
        user_id: &str,
        from: usize,
        to: usize,
    ) -> Result<(), StoreError>;
}

/// Encodes a result list for the text column. The whole list is one JSON
/// document, so readers can never observe a partially replaced list.
pub fn encode_results(results: &[JobListing]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(results)?)
}

/// Decodes the text column back into listings. An absent or blank column
/// means no search has run yet.
pub fn decode_results(raw: Option<&str>) -> Result<Vec<JobListing>, StoreError> {
    match raw {
        None => Ok(Vec::new()),
        Some(text) if text.trim().is_empty() => Ok(Vec::new()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_absent_column_is_empty_list() {
        assert!(decode_results(None).unwrap().is_empty());
        assert!(decode_results(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let results = vec![
            JobListing::sample("Job A", "Acme"),
            JobListing::sample("Job B", "Globex"),
        ];
        let encoded = encode_results(&results).unwrap();
        let decoded = decode_results(Some(&encoded)).unwrap();
        assert_eq!(decoded, results);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_results(Some("not json")).is_err());
    }
}
