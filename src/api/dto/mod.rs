//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON and query-string (de)serialization and
//! validator for optional input validation.

pub mod events;
pub mod health;
