//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers and the admin CLI
//! a single entry point per event log.
//!
//! # Available Services
//!
//! - [`services::event_service::EventService`] - Recording and filtering events

pub mod services;
