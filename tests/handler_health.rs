mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use clicks_and_views::api::routes::api_routes;
use serde_json::Value;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let server = TestServer::new(api_routes(common::create_test_state(pool))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json["checks"]["database"].get("message").is_none());
}

#[sqlx::test]
async fn test_health_endpoint_degraded(pool: SqlitePool) {
    let server = TestServer::new(api_routes(common::create_test_state(pool.clone()))).unwrap();
    pool.close().await;

    let response = server.get("/health").expect_failure().await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(json["checks"]["database"]["message"].is_string());
}
