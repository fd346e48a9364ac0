use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ownership::{Denial, Owned};
use crate::error::DomainError;

/// Comment entity - free text attached to a blog by its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: Uuid, author_id: Uuid, body: String) -> Result<Self, DomainError> {
        if body.trim().is_empty() {
            return Err(DomainError::validation("comment", "This field may not be blank."));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            body,
            created_at: Utc::now(),
        })
    }
}

// Non-authors must not learn whether a comment exists.
impl Owned for Comment {
    const ENTITY: &'static str = "comment";
    const DENIAL: Denial = Denial::NotFound;

    fn owner_id(&self) -> Uuid {
        self.author_id
    }
}
