use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row in the `users` table, keyed externally by `clerk_id`.
///
/// Only `username` and `image` are ever written by this service, and only
/// in response to `user.updated` events. Both columns are nullable: Clerk
/// accounts are not required to carry a username or an avatar.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub clerk_id: String,
    pub username: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
