//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use scribe_core::domain::{Blog, Comment, User};
use scribe_core::error::RepoError;
use scribe_core::pagination::{Page, PageRequest};
use scribe_core::ports::{BlogRepository, CommentRepository, UserRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!("Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

/// Case-insensitive substring match on title or content.
fn search_condition(search: Option<&str>) -> Condition {
    let Some(term) = search else {
        return Condition::all();
    };

    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    Condition::any()
        .add(Expr::expr(Func::lower(Expr::col(blog::Column::Title))).like(pattern.clone()))
        .add(Expr::expr(Func::lower(Expr::col(blog::Column::Content))).like(pattern))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<Blog>, RepoError> {
        let result = BlogEntity::find()
            .filter(blog::Column::UserId.eq(user_id))
            .filter(search_condition(search))
            .order_by_desc(blog::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_page(
        &self,
        search: Option<&str>,
        page: PageRequest,
        per_page: u64,
    ) -> Result<Page<Blog>, RepoError> {
        let paginator = BlogEntity::find()
            .filter(search_condition(search))
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .paginate(&self.db, per_page);

        let totals = paginator.num_items_and_pages().await.map_err(map_db_err)?;
        let num_pages = totals.number_of_pages.max(1);
        let number = page.resolve(num_pages);

        let items = paginator
            .fetch_page(number - 1)
            .await
            .map_err(map_db_err)?;

        Ok(Page {
            items: items.into_iter().map(Into::into).collect(),
            number,
            num_pages,
            total_items: totals.number_of_items,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_in_post(&self, post_id: Uuid, id: Uuid) -> Result<Option<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::Id.eq(id))
            .filter(comment::Column::PostId.eq(post_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
