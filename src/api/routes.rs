//! API route configuration.

use crate::api::handlers::{create_event_handler, filter_events_handler, health_handler};
use crate::domain::entities::EventKind;
use crate::state::{AppState, EventResource};
use axum::{Router, routing::get};

/// Routes for one event log, mounted at the kind's path.
///
/// # Endpoints
///
/// - `POST {path}` - Record an event
/// - `GET  {path}` - List events, filtered by `url`, `after`, `before`
pub fn event_routes(resource: EventResource) -> Router {
    Router::new()
        .route(
            resource.kind().path(),
            get(filter_events_handler).post(create_event_handler),
        )
        .with_state(resource)
}

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /health`  - Database health check
/// - `POST /clicks`  - Record a click
/// - `GET  /clicks`  - List clicks
/// - `POST /views`   - Record a view
/// - `GET  /views`   - List views
pub fn api_routes(state: AppState) -> Router {
    let events = EventKind::ALL
        .into_iter()
        .fold(Router::new(), |router, kind| {
            router.merge(event_routes(state.resource(kind)))
        });

    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(events)
}
