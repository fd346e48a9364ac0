//! # Scribe Core
//!
//! The domain layer of the Scribe blogging backend.
//! This crate contains the entities, ports and application services with
//! zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod services;

pub use error::DomainError;
