//! Event recording and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Event, EventKind, NewEvent};
use crate::domain::repositories::{EventFilter, EventRepository};
use crate::error::AppError;

/// Service over one event log.
///
/// The same type serves clicks and views; which log it writes to is decided by
/// the repository it wraps.
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a new event service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// The log this service is bound to.
    pub fn kind(&self) -> EventKind {
        self.repository.kind()
    }

    /// Records a new event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the event could not be persisted.
    pub async fn record(&self, new_event: NewEvent) -> Result<Event, AppError> {
        let kind = self.kind();
        let event = self.repository.create(new_event).await?;

        metrics::counter!("events_recorded_total", "kind" => kind.label()).increment(1);
        tracing::debug!(kind = %kind, id = event.id, url = %event.url, "Event recorded");

        Ok(event)
    }

    /// Returns all events matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn filter(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        let events = self.repository.filter(filter).await?;

        tracing::debug!(kind = %self.kind(), matches = events.len(), "Events filtered");

        Ok(events)
    }

    /// Counts all events in the log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
