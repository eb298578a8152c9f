//! DTOs for the click and view resources.
//!
//! Both resources share these types; the wire shape of a record is
//! `{"id": 1, "url": "...", "createdAt": "YYYY-MM-DD HH:MM:SS"}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::{Event, NewEvent};
use crate::domain::repositories::EventFilter;
use crate::utils::timestamp::format_timestamp;

/// Request body for recording an event.
///
/// Only `url` is read. Fields the server assigns (`id`, `createdAt`) are
/// ignored if a client sends them.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Checked only when strict URL validation is enabled.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(request: CreateEventRequest) -> Self {
        NewEvent::new(request.url)
    }
}

/// A single event as returned by the API.
///
/// `id` is omitted when zero and `createdAt` when absent.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            created_at: Some(format_timestamp(&event.created_at)),
            url: event.url,
        }
    }
}

/// Query parameters for listing events.
///
/// Empty values behave like absent ones. Timestamps accept the formats listed
/// in [`crate::utils::timestamp`].
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct EventFilterParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, with = "optional_timestamp")]
    pub after: Option<DateTime<Utc>>,

    #[serde(default, with = "optional_timestamp")]
    pub before: Option<DateTime<Utc>>,
}

impl From<EventFilterParams> for EventFilter {
    fn from(params: EventFilterParams) -> Self {
        EventFilter::new()
            .with_url(params.url)
            .with_after(params.after)
            .with_before(params.before)
    }
}

/// Deserializer for optional filter bounds.
mod optional_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    use crate::utils::timestamp::parse_timestamp;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_timestamp(s)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;
    use chrono::TimeZone;

    fn query(uri: &'static str) -> Result<EventFilterParams, String> {
        Query::<EventFilterParams>::try_from_uri(&Uri::from_static(uri))
            .map(|Query(params)| params)
            .map_err(|e| e.body_text())
    }

    #[test]
    fn test_response_shape() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let response = EventResponse::from(Event::new(1, "test.url1".to_string(), created_at));

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["url"], "test.url1");
        assert_eq!(json["createdAt"], format_timestamp(&created_at));
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_response_omits_zero_id_and_missing_timestamp() {
        let response = EventResponse {
            id: 0,
            url: "test.url1".to_string(),
            created_at: None,
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"url":"test.url1"}"#
        );
    }

    #[test]
    fn test_create_request_ignores_server_fields() {
        let request: CreateEventRequest =
            serde_json::from_str(r#"{"url":"test.url1","id":99,"createdAt":"2020-01-01 00:00:00"}"#)
                .unwrap();

        assert_eq!(NewEvent::from(request), NewEvent::new("test.url1"));
    }

    #[test]
    fn test_create_request_requires_url() {
        assert!(serde_json::from_str::<CreateEventRequest>("{}").is_err());
    }

    #[test]
    fn test_create_request_url_validation() {
        let valid = CreateEventRequest {
            url: "https://example.com/page".to_string(),
        };
        let invalid = CreateEventRequest {
            url: "test.url1".to_string(),
        };

        assert!(valid.validate().is_ok());
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_filter_params_all_absent() {
        let params = query("/clicks").unwrap();

        assert!(EventFilter::from(params).is_empty());
    }

    #[test]
    fn test_filter_params_empty_values_are_absent() {
        let params = query("/clicks?url=&after=&before=").unwrap();

        assert!(EventFilter::from(params).is_empty());
    }

    #[test]
    fn test_filter_params_parsed() {
        let params =
            query("/clicks?url=test.url1&after=2024-04-01T00:00:00Z&before=2024-05-01T00:00:00Z")
                .unwrap();
        let filter = EventFilter::from(params);

        assert_eq!(filter.url.as_deref(), Some("test.url1"));
        assert_eq!(
            filter.after,
            Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            filter.before,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_filter_params_invalid_timestamp() {
        let err = query("/clicks?after=not-a-date").unwrap_err();
        assert!(err.contains("not-a-date"));
    }
}
