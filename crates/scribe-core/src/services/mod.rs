//! Application services - the use cases, wired to ports by the caller.

mod auth;
mod blog;
mod comment;

pub use auth::{AuthService, NewAccount};
pub use blog::BlogService;
pub use comment::CommentService;

/// Treat an empty search term as no filter. Whitespace is matched as given.
fn search_term(search: Option<&str>) -> Option<&str> {
    search.filter(|s| !s.is_empty())
}
