//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`database`] - SQLite pool construction and embedded migrations
//! - [`persistence`] - SQLite repository implementations

pub mod database;
pub mod persistence;
