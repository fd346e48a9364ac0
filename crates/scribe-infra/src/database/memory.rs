//! In-memory store - used when no database is configured and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{Blog, Comment, User};
use scribe_core::error::RepoError;
use scribe_core::pagination::{Page, PageRequest, num_pages};
use scribe_core::ports::{BaseRepository, BlogRepository, CommentRepository, UserRepository};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    blogs: HashMap<Uuid, Blog>,
    comments: HashMap<Uuid, Comment>,
}

/// All three repositories over one async `RwLock`, with the same
/// uniqueness and cascade rules as the PostgreSQL schema.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Replace an existing row; missing rows are not inserted.
fn overwrite<T: Clone>(table: &mut HashMap<Uuid, T>, id: Uuid, row: T) -> Result<T, RepoError> {
    let slot = table.get_mut(&id).ok_or(RepoError::NotFound)?;
    *slot = row.clone();
    Ok(row)
}

fn matches_search(blog: &Blog, search: Option<&str>) -> bool {
    search.is_none_or(|term| blog.matches(term))
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, RepoError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(RepoError::Duplicate("users.username".to_string()));
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut tables = self.tables.write().await;
        overwrite(&mut tables.users, user.id, user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.users.remove(&id).ok_or(RepoError::NotFound)?;

        let Tables {
            blogs, comments, ..
        } = &mut *tables;
        blogs.retain(|_, b| b.user_id != id);
        comments.retain(|_, c| c.author_id != id && blogs.contains_key(&c.post_id));
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.tables.read().await.blogs.get(&id).cloned())
    }

    async fn create(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&blog.user_id) {
            return Err(RepoError::Constraint("blogs.user_id".to_string()));
        }
        tables.blogs.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut tables = self.tables.write().await;
        overwrite(&mut tables.blogs, blog.id, blog)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.blogs.remove(&id).ok_or(RepoError::NotFound)?;
        tables.comments.retain(|_, c| c.post_id != id);
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryStore {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<Blog>, RepoError> {
        let tables = self.tables.read().await;
        let mut blogs: Vec<Blog> = tables
            .blogs
            .values()
            .filter(|b| b.user_id == user_id && matches_search(b, search))
            .cloned()
            .collect();

        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(blogs)
    }

    async fn find_page(
        &self,
        search: Option<&str>,
        page: PageRequest,
        per_page: u64,
    ) -> Result<Page<Blog>, RepoError> {
        let tables = self.tables.read().await;
        let mut blogs: Vec<Blog> = tables
            .blogs
            .values()
            .filter(|b| matches_search(b, search))
            .cloned()
            .collect();

        // Identifier order: arbitrary for random v4 ids, but stable across pages.
        blogs.sort_by_key(|b| b.id);

        let total_items = blogs.len() as u64;
        let num_pages = num_pages(total_items, per_page);
        let number = page.resolve(num_pages);

        let skip = usize::try_from((number - 1) * per_page).unwrap_or(usize::MAX);
        let take = usize::try_from(per_page).unwrap_or(usize::MAX);
        let items = blogs.into_iter().skip(skip).take(take).collect();

        Ok(Page {
            items,
            number,
            num_pages,
            total_items,
        })
    }
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        Ok(self.tables.read().await.comments.get(&id).cloned())
    }

    async fn create(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;

        if !tables.blogs.contains_key(&comment.post_id) {
            return Err(RepoError::Constraint("comments.post_id".to_string()));
        }
        if !tables.users.contains_key(&comment.author_id) {
            return Err(RepoError::Constraint("comments.author_id".to_string()));
        }
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn update(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;
        overwrite(&mut tables.comments, comment.id, comment)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.comments.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let tables = self.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();

        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn find_in_post(&self, post_id: Uuid, id: Uuid) -> Result<Option<Comment>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .get(&id)
            .filter(|c| c.post_id == post_id)
            .cloned())
    }
}
