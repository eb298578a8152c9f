//! Handlers shared by the `/clicks` and `/views` resources.
//!
//! The resource a handler serves is decided by the [`EventResource`] state it
//! is mounted with (see [`crate::api::routes::event_routes`]).

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::events::{CreateEventRequest, EventFilterParams, EventResponse};
use crate::config::UrlValidation;
use crate::domain::repositories::EventFilter;
use crate::error::AppError;
use crate::state::EventResource;

/// Records a new event.
///
/// # Endpoint
///
/// `POST /clicks`, `POST /views`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "url": "https://example.com/page", "createdAt": "2024-04-02 10:15:00" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, `url` is missing, or
/// strict URL validation is enabled and `url` is not an absolute URL.
/// Returns 500 if the event could not be stored.
pub async fn create_event_handler(
    State(resource): State<EventResource>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let Json(payload) = payload?;

    if resource.url_validation == UrlValidation::Strict {
        payload.validate()?;
    }

    let event = resource.service.record(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(event.into())))
}

/// Lists events matching optional URL and time criteria.
///
/// # Endpoint
///
/// `GET /clicks`, `GET /views`
///
/// # Query Parameters
///
/// - `url` (optional): Exact URL match
/// - `after` (optional): Only events created strictly after this instant
/// - `before` (optional): Only events created strictly before this instant
///
/// Timestamps may be RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`.
///
/// # Response
///
/// `200 OK` with a JSON array ordered by id; empty when nothing matches.
///
/// # Errors
///
/// Returns 400 Bad Request if a timestamp cannot be parsed.
pub async fn filter_events_handler(
    State(resource): State<EventResource>,
    params: Result<Query<EventFilterParams>, QueryRejection>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let Query(params) = params?;
    let filter = EventFilter::from(params);

    let events = resource.service.filter(filter).await?;

    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}
