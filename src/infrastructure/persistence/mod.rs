//! SQLite repository implementations.
//!
//! Queries are assembled at runtime with SQLx's `QueryBuilder`, so no database
//! is needed at compile time.
//!
//! # Repositories
//!
//! - [`SqliteEventRepository`] - Click and view event logs

pub mod sqlite_event_repository;

pub use sqlite_event_repository::SqliteEventRepository;
