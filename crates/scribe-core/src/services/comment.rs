use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, authorize};
use crate::error::DomainError;
use crate::ports::{BlogRepository, CommentRepository};

/// Comment use cases on a single blog post.
pub struct CommentService {
    blogs: Arc<dyn BlogRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(blogs: Arc<dyn BlogRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { blogs, comments }
    }

    /// Comments on a post. An unknown post simply has none.
    pub async fn list(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        Ok(self.comments.find_by_post_id(post_id).await?)
    }

    pub async fn create(
        &self,
        author: Uuid,
        post_id: Uuid,
        body: String,
    ) -> Result<Comment, DomainError> {
        if self.blogs.find_by_id(post_id).await?.is_none() {
            return Err(DomainError::not_found("blog", post_id));
        }

        let comment = Comment::new(post_id, author, body)?;
        let saved = self.comments.create(comment).await?;

        tracing::info!(comment_id = %saved.id, blog_id = %post_id, "Comment created");
        Ok(saved)
    }

    /// Delete a comment the caller wrote on `post_id`.
    pub async fn delete(
        &self,
        actor: Uuid,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DomainError> {
        let found = self.comments.find_in_post(post_id, comment_id).await?;
        let comment = authorize(found, comment_id, actor, "delete")?;

        self.comments.delete(comment.id).await?;

        tracing::info!(comment_id = %comment_id, blog_id = %post_id, "Comment deleted");
        Ok(())
    }
}
