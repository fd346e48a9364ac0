//! SeaORM entities mirroring the migration schema.

pub mod blog;
pub mod comment;
pub mod user;
