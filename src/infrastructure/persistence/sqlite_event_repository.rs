//! SQLite implementation of the event repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Event, EventKind, NewEvent};
use crate::domain::repositories::{EventFilter, EventRepository};
use crate::error::AppError;

/// Row layout shared by the `clicks` and `views` tables.
#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    url: String,
    created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event::new(row.id, row.url, row.created_at)
    }
}

/// SQLite repository for one event log.
///
/// The table name is taken from the bound [`EventKind`], never from user input.
pub struct SqliteEventRepository {
    pool: Arc<SqlitePool>,
    kind: EventKind,
}

impl SqliteEventRepository {
    /// Creates a repository for `kind` on a shared connection pool.
    pub fn new(pool: Arc<SqlitePool>, kind: EventKind) -> Self {
        Self { pool, kind }
    }

    /// Builds the `SELECT` for a filter. Only present criteria produce a predicate.
    fn filter_query(&self, filter: EventFilter) -> QueryBuilder<'static, Sqlite> {
        let mut query = QueryBuilder::new(format!(
            "SELECT id, url, created_at FROM {}",
            self.kind.table()
        ));
        let mut has_predicate = false;
        let mut next_clause = |query: &mut QueryBuilder<'static, Sqlite>| {
            query.push(if has_predicate { " AND " } else { " WHERE " });
            has_predicate = true;
        };

        if let Some(url) = filter.url {
            next_clause(&mut query);
            query.push("url = ").push_bind(url);
        }
        if let Some(after) = filter.after {
            next_clause(&mut query);
            query.push("created_at > ").push_bind(after);
        }
        if let Some(before) = filter.before {
            next_clause(&mut query);
            query.push("created_at < ").push_bind(before);
        }

        query.push(" ORDER BY id ASC");
        query
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    fn kind(&self) -> EventKind {
        self.kind
    }

    async fn create(&self, new_event: NewEvent) -> Result<Event, AppError> {
        let created_at = new_event.created_at.unwrap_or_else(Utc::now);

        let sql = format!(
            "INSERT INTO {} (url, created_at) VALUES (?, ?) RETURNING id, url, created_at",
            self.kind.table()
        );

        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(new_event.url)
            .bind(created_at)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn filter(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        let rows = self
            .filter_query(filter)
            .build_query_as::<EventRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.kind.table());

        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
