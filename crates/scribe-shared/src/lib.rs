//! # Scribe Shared
//!
//! Wire types shared by the API server and its clients: request/response
//! bodies and the `{data, message}` envelope.

pub mod dto;
pub mod response;

pub use response::ApiResponse;
