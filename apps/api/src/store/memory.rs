//! In-memory `UserStore` double for handler composition tests. Mirrors the
//! Postgres implementation's contract, including the conditional cursor write.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{StoreError, UserStore};
use crate::models::job::JobListing;
use crate::models::user::{Preferences, UserProfile};

#[derive(Default)]
pub struct MemoryUserStore {
    records: Mutex<HashMap<String, UserProfile>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        let store = Self::new();
        store
            .records
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile);
        store
    }

    /// Snapshot of the stored record, for assertions.
    pub fn profile(&self, user_id: &str) -> Option<UserProfile> {
        self.records.lock().unwrap().get(user_id).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.records.lock().unwrap().get(user_id).cloned())
    }

    async fn upsert_preferences(
        &self,
        user_id: &str,
        prefs: &Preferences,
    ) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .entry(user_id.to_string())
            .or_insert_with(|| UserProfile {
                user_id: user_id.to_string(),
                country: None,
                city: None,
                keywords: None,
                job_type: None,
                search_results: Vec::new(),
                reading_index: 0,
                created_at: Utc::now(),
            });
        record.country = prefs.country.clone();
        record.city = prefs.city.clone();
        record.keywords = prefs.keywords.clone();
        record.job_type = prefs.job_type.clone();
        Ok(())
    }

    async fn replace_search_results(
        &self,
        user_id: &str,
        results: &[JobListing],
    ) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        if let Some(record) = records.get_mut(user_id) {
            record.search_results = results.to_vec();
            record.reading_index = 0;
        }
        Ok(())
    }

    async fn set_reading_index(
        &self,
        user_id: &str,
        from: usize,
        to: usize,
    ) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        match records.get_mut(user_id) {
            Some(record) if record.reading_index == from => {
                record.reading_index = to;
                Ok(())
            }
            _ => Err(StoreError::Conflict { expected: from }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_preserves_search_results() {
        let profile = UserProfile::sample("u")
            .with_results(vec![JobListing::sample("Job A", "Acme")], 1);
        let store = MemoryUserStore::with_profile(profile);

        let prefs = Preferences {
            country: Some("Canada".to_string()),
            ..Preferences::default()
        };
        store.upsert_preferences("u", &prefs).await.unwrap();

        let stored = store.profile("u").unwrap();
        assert_eq!(stored.country.as_deref(), Some("Canada"));
        assert_eq!(stored.keywords, None); // overwritten wholesale
        assert_eq!(stored.search_results.len(), 1);
        assert_eq!(stored.reading_index, 1);
    }

    #[tokio::test]
    async fn test_replace_results_resets_cursor() {
        let profile = UserProfile::sample("u")
            .with_results(vec![JobListing::sample("Old", "Acme")], 1);
        let store = MemoryUserStore::with_profile(profile);

        store
            .replace_search_results("u", &[JobListing::sample("New", "Globex")])
            .await
            .unwrap();

        let stored = store.profile("u").unwrap();
        assert_eq!(stored.reading_index, 0);
        assert_eq!(stored.search_results[0].title, "New");
    }

    #[tokio::test]
    async fn test_conditional_cursor_write_detects_races() {
        let profile = UserProfile::sample("u")
            .with_results(vec![JobListing::sample("Job A", "Acme")], 0);
        let store = MemoryUserStore::with_profile(profile);

        store.set_reading_index("u", 0, 1).await.unwrap();
        let second = store.set_reading_index("u", 0, 1).await;
        assert!(matches!(second, Err(StoreError::Conflict { expected: 0 })));
    }
}
