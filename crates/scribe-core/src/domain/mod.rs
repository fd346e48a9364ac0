//! Domain entities - the core business objects.

mod blog;
mod comment;
mod ownership;
mod user;

pub use blog::{Blog, BlogChanges, TITLE_MAX_CHARS};
pub use comment::Comment;
pub use ownership::{Denial, Owned, authorize};
pub use user::User;
