//! HTTP request handlers for API endpoints.

pub mod events;
pub mod health;

pub use events::{create_event_handler, filter_events_handler};
pub use health::health_handler;
