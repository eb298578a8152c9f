//! Business logic services for the application layer.

pub mod event_service;

pub use event_service::EventService;
