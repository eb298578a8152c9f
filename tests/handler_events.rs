mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use clicks_and_views::api::routes::api_routes;
use clicks_and_views::domain::entities::EventKind;
use clicks_and_views::state::AppState;
use clicks_and_views::utils::timestamp::{format_timestamp, parse_timestamp};
use serde_json::{Value, json};
use sqlx::SqlitePool;

fn server(state: AppState) -> TestServer {
    TestServer::new(api_routes(state)).unwrap()
}

#[sqlx::test]
async fn test_create_click(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let started = Utc::now();
    let response = server
        .post("/clicks")
        .json(&json!({ "url": "test.url1" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["url"], "test.url1");
    assert_eq!(json.as_object().unwrap().len(), 3);

    let created_at = parse_timestamp(json["createdAt"].as_str().unwrap()).unwrap();
    assert!(created_at >= started - Duration::seconds(1));
    assert!(created_at <= Utc::now());
}

#[sqlx::test]
async fn test_create_view_uses_its_own_log(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    server
        .post("/clicks")
        .json(&json!({ "url": "test.url1" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/views")
        .json(&json!({ "url": "test.url1" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 1);
}

#[sqlx::test]
async fn test_create_ignores_client_assigned_fields(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/clicks")
        .json(&json!({ "url": "test.url1", "id": 42, "createdAt": "2000-01-01 00:00:00" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["id"], 1);
    assert_ne!(json["createdAt"], "2000-01-01 00:00:00");
}

#[sqlx::test]
async fn test_create_missing_url(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server.post("/clicks").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "decoding_error");
}

#[sqlx::test]
async fn test_create_malformed_body(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/views")
        .content_type("application/json")
        .text("{\"url\":")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "decoding_error");
}

#[sqlx::test]
async fn test_strict_validation_rejects_non_url(pool: SqlitePool) {
    let server = server(common::create_strict_test_state(pool));

    let response = server
        .post("/clicks")
        .json(&json!({ "url": "test.url1" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "decoding_error");
    assert!(json["error"]["details"].get("url").is_some());
}

#[sqlx::test]
async fn test_strict_validation_accepts_url(pool: SqlitePool) {
    let server = server(common::create_strict_test_state(pool));

    let response = server
        .post("/clicks")
        .json(&json!({ "url": "https://example.com/landing" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>()["url"],
        "https://example.com/landing"
    );
}

#[sqlx::test]
async fn test_filter_by_url(pool: SqlitePool) {
    common::seed_two_clicks(&pool).await;
    let server = server(common::create_test_state(pool));

    let response = server
        .get("/clicks")
        .add_query_param("url", "test.url1")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([
        {
            "id": 1,
            "url": "test.url1",
            "createdAt": format_timestamp(&common::utc(2024, 1, 2)),
        }
    ]));
}

#[sqlx::test]
async fn test_filter_after(pool: SqlitePool) {
    common::seed_two_clicks(&pool).await;
    let server = server(common::create_test_state(pool));

    let response = server
        .get("/clicks")
        .add_query_param("after", "2024-04-01T00:00:00Z")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "test.url2");
}

#[sqlx::test]
async fn test_filter_before(pool: SqlitePool) {
    common::seed_two_clicks(&pool).await;
    let server = server(common::create_test_state(pool));

    let response = server
        .get("/clicks")
        .add_query_param("before", "2024-01-03T00:00:00Z")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "test.url1");
}

#[sqlx::test]
async fn test_filter_accepts_display_format(pool: SqlitePool) {
    common::seed_two_clicks(&pool).await;
    let server = server(common::create_test_state(pool));

    // The createdAt of the first record, fed back as an exclusive lower bound.
    let first = format_timestamp(&common::utc(2024, 1, 2));

    let response = server.get("/clicks").add_query_param("after", &first).await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "test.url2");
}

#[sqlx::test]
async fn test_filter_empty_parameters_are_ignored(pool: SqlitePool) {
    common::seed_two_clicks(&pool).await;
    let server = server(common::create_test_state(pool));

    let response = server
        .get("/clicks")
        .add_query_param("url", "")
        .add_query_param("after", "")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_filter_no_match_returns_empty_array(pool: SqlitePool) {
    common::seed_two_clicks(&pool).await;
    let server = server(common::create_test_state(pool));

    let response = server
        .get("/clicks")
        .add_query_param("url", "missing.url")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_filter_kinds_are_isolated(pool: SqlitePool) {
    common::seed_two_clicks(&pool).await;
    common::create_test_event(&pool, EventKind::View, "view.url", common::utc(2024, 2, 1)).await;
    let server = server(common::create_test_state(pool));

    let views = server.get("/views").await.json::<Value>();
    let clicks = server.get("/clicks").await.json::<Value>();

    assert_eq!(views.as_array().unwrap().len(), 1);
    assert_eq!(views[0]["url"], "view.url");
    assert_eq!(clicks.as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_filter_invalid_timestamp(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .get("/views")
        .add_query_param("before", "next tuesday")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "decoding_error");
}

#[sqlx::test]
async fn test_created_event_is_visible_to_filter(pool: SqlitePool) {
    let server = server(common::create_test_state(pool));

    let created = server
        .post("/views")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<Value>();

    let response = server
        .get("/views")
        .add_query_param("url", "https://example.com/a")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([created]));
}

#[sqlx::test]
async fn test_storage_failure_is_server_error(pool: SqlitePool) {
    let server = server(common::create_test_state(pool.clone()));
    pool.close().await;

    let response = server.get("/clicks").expect_failure().await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["code"], "storage_error");
}
