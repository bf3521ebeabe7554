use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::models::UserProfile;

use super::DatabasePool;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The update matched no row. Profiles are created elsewhere; this
    /// receiver only ever updates existing ones.
    #[error("no user with clerk id {0}")]
    UserNotFound(String),
}

/// Persistence seam for user profiles.
///
/// The single operation this service performs against the database.
/// Handler tests substitute a recording implementation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Update the profile row keyed by `clerk_id`. Update-only: a missing
    /// row is an error, never an insert.
    async fn update_profile(
        &self,
        clerk_id: &str,
        username: Option<&str>,
        image: Option<&str>,
    ) -> Result<UserProfile, StoreError>;
}

/// Postgres-backed user store
pub struct PgUserStore {
    pool: DatabasePool,
}

impl PgUserStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn update_profile(
        &self,
        clerk_id: &str,
        username: Option<&str>,
        image: Option<&str>,
    ) -> Result<UserProfile, StoreError> {
        let updated = sqlx::query_as::<_, UserProfile>(
            "UPDATE users
             SET username = $2, image = $3, updated_at = NOW()
             WHERE clerk_id = $1
             RETURNING id, clerk_id, username, image, created_at, updated_at",
        )
        .bind(clerk_id)
        .bind(username)
        .bind(image)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(profile) => {
                debug!(clerk_id, "user profile updated");
                Ok(profile)
            }
            None => Err(StoreError::UserNotFound(clerk_id.to_string())),
        }
    }
}
