use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, Comment, User};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by normalized username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Blog repository. Deleting a blog removes its comments.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// All blogs of one owner, newest first, optionally filtered.
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<Blog>, RepoError>;

    /// One page across all blogs in unspecified order, optionally filtered.
    async fn find_page(
        &self,
        search: Option<&str>,
        page: PageRequest,
        per_page: u64,
    ) -> Result<Page<Blog>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// All comments of a post, oldest first.
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    /// A comment by id, only if it belongs to `post_id`.
    async fn find_in_post(&self, post_id: Uuid, id: Uuid) -> Result<Option<Comment>, RepoError>;
}
