use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ownership::{Denial, Owned};
use crate::error::DomainError;

/// Maximum blog title length, in characters.
pub const TITLE_MAX_CHARS: usize = 600;

/// Blog entity - a post owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a blog. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Blog {
    /// Create a new blog owned by `user_id`.
    pub fn new(user_id: Uuid, title: String, content: String) -> Result<Self, DomainError> {
        validate_title(&title)?;
        validate_content(&content)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update. The owner is never touched.
    pub fn apply(&mut self, changes: BlogChanges) -> Result<(), DomainError> {
        if let Some(title) = &changes.title {
            validate_title(title)?;
        }
        if let Some(content) = &changes.content {
            validate_content(content)?;
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Case-insensitive substring match on title or content.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.content.to_lowercase().contains(&needle)
    }
}

impl Owned for Blog {
    const ENTITY: &'static str = "blog";
    const DENIAL: Denial = Denial::Forbidden;

    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("title", "This field may not be blank."));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(DomainError::validation(
            "title",
            format!("Ensure this field has no more than {TITLE_MAX_CHARS} characters."),
        ));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::validation("content", "This field may not be blank."));
    }
    Ok(())
}
