use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::with_timeout;
use crate::errors::ApiError;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    /// Find a user by email. Email is matched as an opaque string, no
    /// trimming or case folding.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, ApiError> {
        with_timeout(
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, username, email, password_hash, created_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(db),
        )
        .await
    }

    /// Create a new user with hashed password. A unique-constraint hit on
    /// email surfaces as [`ApiError::DuplicateEmail`].
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        with_timeout(
            sqlx::query_as::<_, User>(
                r#"
                INSERT INTO users (username, email, password_hash)
                VALUES ($1, $2, $3)
                RETURNING id, username, email, password_hash, created_at
                "#,
            )
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .fetch_one(db),
        )
        .await
    }
}
