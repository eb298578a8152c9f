#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use clicks_and_views::config::UrlValidation;
use clicks_and_views::domain::entities::EventKind;
use clicks_and_views::state::AppState;
use sqlx::SqlitePool;

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub async fn create_test_event(
    pool: &SqlitePool,
    kind: EventKind,
    url: &str,
    created_at: DateTime<Utc>,
) -> i64 {
    let sql = format!(
        "INSERT INTO {} (url, created_at) VALUES (?, ?) RETURNING id",
        kind.table()
    );

    sqlx::query_scalar(&sql)
        .bind(url)
        .bind(created_at)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Two clicks dated 2024-01-02 (`test.url1`) and 2024-04-02 (`test.url2`).
pub async fn seed_two_clicks(pool: &SqlitePool) {
    create_test_event(pool, EventKind::Click, "test.url1", utc(2024, 1, 2)).await;
    create_test_event(pool, EventKind::Click, "test.url2", utc(2024, 4, 2)).await;
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, UrlValidation::Lenient)
}

pub fn create_strict_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, UrlValidation::Strict)
}
