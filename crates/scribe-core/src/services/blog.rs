use std::sync::Arc;

use uuid::Uuid;

use super::search_term;
use crate::domain::{Blog, BlogChanges, authorize};
use crate::error::DomainError;
use crate::pagination::{PUBLIC_PAGE_SIZE, Page, PageRequest};
use crate::ports::BlogRepository;

/// Blog use cases: public and owner-scoped listing, owner-only mutation.
pub struct BlogService {
    blogs: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    /// Every blog, in unspecified order, five per page.
    pub async fn list_public(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Blog>, DomainError> {
        Ok(self
            .blogs
            .find_page(search_term(search), page, PUBLIC_PAGE_SIZE)
            .await?)
    }

    /// The caller's own blogs, unpaginated.
    pub async fn list_mine(
        &self,
        owner: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<Blog>, DomainError> {
        Ok(self
            .blogs
            .find_by_user_id(owner, search_term(search))
            .await?)
    }

    pub async fn create(
        &self,
        owner: Uuid,
        title: String,
        content: String,
    ) -> Result<Blog, DomainError> {
        let blog = Blog::new(owner, title, content)?;
        let saved = self.blogs.create(blog).await?;

        tracing::info!(blog_id = %saved.id, user_id = %owner, "Blog created");
        Ok(saved)
    }

    pub async fn update(
        &self,
        actor: Uuid,
        id: Uuid,
        changes: BlogChanges,
    ) -> Result<Blog, DomainError> {
        let found = self.blogs.find_by_id(id).await?;
        let mut blog = authorize(found, id, actor, "edit")?;

        blog.apply(changes)?;
        let saved = self.blogs.update(blog).await?;

        tracing::info!(blog_id = %id, "Blog updated");
        Ok(saved)
    }

    /// Remove a blog together with its comments.
    pub async fn delete(&self, actor: Uuid, id: Uuid) -> Result<(), DomainError> {
        let found = self.blogs.find_by_id(id).await?;
        let blog = authorize(found, id, actor, "delete")?;

        self.blogs.delete(blog.id).await?;

        tracing::info!(blog_id = %id, "Blog deleted");
        Ok(())
    }
}
