//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenKind, TokenPair, TokenService};
pub use repository::{BaseRepository, BlogRepository, CommentRepository, UserRepository};
