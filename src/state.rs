//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::EventService;
use crate::config::UrlValidation;
use crate::domain::entities::EventKind;
use crate::infrastructure::persistence::SqliteEventRepository;

pub type SqliteEventService = EventService<SqliteEventRepository>;

/// Everything a handler needs to serve one event log.
#[derive(Clone)]
pub struct EventResource {
    pub service: Arc<SqliteEventService>,
    pub url_validation: UrlValidation,
}

impl EventResource {
    pub fn kind(&self) -> EventKind {
        self.service.kind()
    }
}

/// Application state shared by all routes.
///
/// Both logs use the same connection pool; the pool is owned by the server
/// and closed when it shuts down.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub clicks: EventResource,
    pub views: EventResource,
}

impl AppState {
    /// Wires one repository and service per event kind onto the shared pool.
    pub fn new(pool: SqlitePool, url_validation: UrlValidation) -> Self {
        let shared = Arc::new(pool.clone());
        let resource = |kind| EventResource {
            service: Arc::new(EventService::new(Arc::new(SqliteEventRepository::new(
                shared.clone(),
                kind,
            )))),
            url_validation,
        };

        Self {
            clicks: resource(EventKind::Click),
            views: resource(EventKind::View),
            pool,
        }
    }

    /// Returns the resource serving `kind`.
    pub fn resource(&self, kind: EventKind) -> EventResource {
        match kind {
            EventKind::Click => self.clicks.clone(),
            EventKind::View => self.views.clone(),
        }
    }
}
