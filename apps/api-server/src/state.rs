//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{BlogRepository, CommentRepository, TokenService, UserRepository};
use scribe_core::services::{AuthService, BlogService, CommentService};
use scribe_infra::{Argon2PasswordService, InMemoryStore, JwtTokenService};

#[cfg(feature = "postgres")]
use scribe_infra::DatabaseConnections;
#[cfg(feature = "postgres")]
use scribe_infra::database::{
    PostgresBlogRepository, PostgresCommentRepository, PostgresUserRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub blogs: Arc<BlogService>,
    pub comments: Arc<CommentService>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                let connections = DatabaseConnections::init(db_config).await.map_err(|e| {
                    tracing::error!("Failed to connect to database: {}", e);
                    std::io::Error::other(e)
                })?;

                let conn = connections.main;
                tracing::info!("Application state initialized (postgres)");
                return Ok(Self::assemble(
                    Arc::new(PostgresUserRepository::new(conn.clone())),
                    Arc::new(PostgresBlogRepository::new(conn.clone())),
                    Arc::new(PostgresCommentRepository::new(conn)),
                    tokens,
                ));
            }
        }

        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        let store = Arc::new(InMemoryStore::new());
        tracing::info!("Application state initialized (in-memory)");
        Ok(Self::assemble(store.clone(), store.clone(), store, tokens))
    }

    /// State over a fresh in-memory store.
    #[cfg(test)]
    pub fn in_memory(jwt: scribe_infra::JwtConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::assemble(
            store.clone(),
            store.clone(),
            store,
            Arc::new(JwtTokenService::new(jwt)),
        )
    }

    fn assemble(
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        comments: Arc<dyn CommentRepository>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(
                users,
                Arc::new(Argon2PasswordService::new()),
                tokens.clone(),
            )),
            blogs: Arc::new(BlogService::new(blogs.clone())),
            comments: Arc::new(CommentService::new(blogs, comments)),
            tokens,
        }
    }
}
