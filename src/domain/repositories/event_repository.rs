//! Repository trait for the click and view event logs.

use crate::domain::entities::{Event, EventKind, NewEvent};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filter criteria for event queries.
///
/// Every criterion is optional and an absent one imposes no constraint.
/// Time bounds are exclusive: `after` keeps events created strictly after it,
/// `before` keeps events created strictly before it. Present criteria are
/// combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub url: Option<String>,
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
}

impl EventFilter {
    /// Creates a filter that matches every event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to an exact URL. An empty string means no constraint.
    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url.filter(|u| !u.is_empty());
        self
    }

    /// Keeps events created strictly after `after`.
    pub fn with_after(mut self, after: Option<DateTime<Utc>>) -> Self {
        self.after = after;
        self
    }

    /// Keeps events created strictly before `before`.
    pub fn with_before(mut self, before: Option<DateTime<Utc>>) -> Self {
        self.before = before;
        self
    }

    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.after.is_none() && self.before.is_none()
    }
}

/// Repository interface for one event log.
///
/// A single implementation serves both logs; the instance is bound to an
/// [`EventKind`] at construction and never touches the other kind's table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteEventRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_events.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// The log this repository reads and writes.
    fn kind(&self) -> EventKind;

    /// Persists a new event.
    ///
    /// A missing `created_at` is replaced with the current time before the
    /// row is written. Returns the stored event including its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the write fails. No retry is attempted.
    async fn create(&self, new_event: NewEvent) -> Result<Event, AppError>;

    /// Returns every event matching the filter, ordered by id ascending.
    ///
    /// An empty result is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on query failure.
    async fn filter(&self, filter: EventFilter) -> Result<Vec<Event>, AppError>;

    /// Counts all events in the log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on query failure.
    async fn count(&self) -> Result<i64, AppError>;
}
