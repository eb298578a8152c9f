//! Core domain entities.
//!
//! Clicks and views share a single shape and are told apart only by their
//! [`EventKind`].
//!
//! - [`Event`] - A stored click or view
//! - [`NewEvent`] - Input for recording a new event
//! - [`EventKind`] - Which log an event belongs to

pub mod event;

pub use event::{Event, EventKind, NewEvent};
