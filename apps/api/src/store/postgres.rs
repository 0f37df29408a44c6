use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use super::{decode_results, encode_results, StoreError, UserStore};
use crate::models::job::JobListing;
use crate::models::user::{Preferences, UserProfile};

/// `UserStore` backed by a single `users` table.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the users table on a fresh database.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id TEXT PRIMARY KEY,
                country TEXT,
                city TEXT,
                keywords TEXT,
                job_type TEXT,
                search_results TEXT,
                reading_index INTEGER NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(FromRow)]
struct UserRow {
    user_id: String,
    country: Option<String>,
    city: Option<String>,
    keywords: Option<String>,
    job_type: Option<String>,
    search_results: Option<String>,
    reading_index: i32,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_profile(self) -> Result<UserProfile, StoreError> {
        let search_results = decode_results(self.search_results.as_deref())?;
        Ok(UserProfile {
            user_id: self.user_id,
            country: self.country,
            city: self.city,
            keywords: self.keywords,
            job_type: self.job_type,
            search_results,
            reading_index: self.reading_index.max(0) as usize,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT user_id, country, city, keywords, job_type,
                   search_results, reading_index, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_profile).transpose()
    }

    async fn upsert_preferences(
        &self,
        user_id: &str,
        prefs: &Preferences,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, country, city, keywords, job_type)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                country = EXCLUDED.country,
                city = EXCLUDED.city,
                keywords = EXCLUDED.keywords,
                job_type = EXCLUDED.job_type,
                updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(&prefs.country)
        .bind(&prefs.city)
        .bind(&prefs.keywords)
        .bind(&prefs.job_type)
        .execute(&self.pool)
        .await?;

        info!("Stored preferences for user {user_id}");
        Ok(())
    }

    async fn replace_search_results(
        &self,
        user_id: &str,
        results: &[JobListing],
    ) -> Result<(), StoreError> {
        let encoded = encode_results(results)?;

        // Single statement: the new list and the reset cursor land together.
        sqlx::query(
            r#"
            UPDATE users
            SET search_results = $2, reading_index = 0, updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(&encoded)
        .execute(&self.pool)
        .await?;

        info!("Stored {} search results for user {user_id}", results.len());
        Ok(())
    }

    async fn set_reading_index(
        &self,
        user_id: &str,
        from: usize,
        to: usize,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET reading_index = $3, updated_at = now()
            WHERE user_id = $1 AND reading_index = $2
            "#,
        )
        .bind(user_id)
        .bind(from as i32)
        .bind(to as i32)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict { expected: from });
        }
        Ok(())
    }
}
