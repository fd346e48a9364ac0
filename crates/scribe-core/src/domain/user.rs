use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - a registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    ///
    /// The username is stored in its normalized (lowercase) form.
    pub fn new(username: &str, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: Self::normalize_username(username),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Canonical form used for storage and every lookup.
    pub fn normalize_username(username: &str) -> String {
        username.trim().to_lowercase()
    }
}
