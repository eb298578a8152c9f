//! # Clicks and Views
//!
//! Records "click" and "view" events against arbitrary URLs and serves them
//! back through a small HTTP API with URL and time-range filtering.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Event entities, filter criteria, repository trait
//! - **Application Layer** ([`application`]) - One service per event log
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! Clicks and views are the same component instantiated twice, keyed by
//! [`domain::entities::EventKind`].
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://clicks-and-views.db"
//! cargo run
//!
//! curl -X POST localhost:8080/clicks -H 'Content-Type: application/json' \
//!      -d '{"url":"https://example.com"}'
//! curl 'localhost:8080/clicks?after=2024-04-01T00:00:00Z'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::EventService;
    pub use crate::domain::entities::{Event, EventKind, NewEvent};
    pub use crate::domain::repositories::{EventFilter, EventRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
