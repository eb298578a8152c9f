//! Event entity shared by the click and view logs.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// The log an event belongs to.
///
/// Each kind has its own table and its own API path; nothing else differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    View,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Click, EventKind::View];

    /// Table holding events of this kind.
    pub fn table(self) -> &'static str {
        match self {
            EventKind::Click => "clicks",
            EventKind::View => "views",
        }
    }

    /// HTTP path of the resource.
    pub fn path(self) -> &'static str {
        match self {
            EventKind::Click => "/clicks",
            EventKind::View => "/views",
        }
    }

    /// Singular label used in logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::View => "view",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "click" | "clicks" => Ok(EventKind::Click),
            "view" | "views" => Ok(EventKind::View),
            other => Err(format!("unknown event kind '{other}', expected 'click' or 'view'")),
        }
    }
}

/// A recorded click or view.
///
/// Records are append-only: once stored, `id` and `created_at` never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(id: i64, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            url,
            created_at,
        }
    }
}

/// Input data for recording a new event.
///
/// `created_at` is normally left empty and filled in by the store with the
/// current time. It is set explicitly by imports and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub url: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewEvent {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            created_at: None,
        }
    }

    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
