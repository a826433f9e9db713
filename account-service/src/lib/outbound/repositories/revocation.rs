use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::session::errors::SessionError;
use crate::session::models::RevocationEntry;
use crate::session::ports::RevocationRepository;

/// Revocation list stored in the `revoked_tokens` table.
pub struct PostgresRevocationRepository {
    pool: PgPool,
}

impl PostgresRevocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevocationRepository for PostgresRevocationRepository {
    async fn insert(&self, entry: RevocationEntry) -> Result<(), SessionError> {
        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (token, revoked_at, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (token) DO NOTHING
            "#,
        )
        .bind(&entry.token)
        .bind(entry.revoked_at)
        .bind(entry.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::Store(e.to_string()))?;

        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, SessionError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM revoked_tokens WHERE token = $1)
            "#,
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| SessionError::Store(e.to_string()))
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, SessionError> {
        let result = sqlx::query(
            r#"
            DELETE FROM revoked_tokens
            WHERE expires_at < $1
            "#,
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::Store(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
