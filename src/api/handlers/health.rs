//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::time::Instant;

use crate::api::dto::health::{
    ComponentCheck, ComponentStatus, HealthChecks, HealthResponse, ServiceStatus,
};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database query failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "latency_ms": 0 }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = check_database(&state).await;

    let (code, status) = if database.is_ok() {
        (StatusCode::OK, ServiceStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded)
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database },
    };

    (code, Json(response))
}

/// Checks database connectivity with a trivial query.
async fn check_database(state: &AppState) -> ComponentCheck {
    let started = Instant::now();
    let result = sqlx::query("SELECT 1").execute(&state.pool).await;
    let latency_ms = started.elapsed().as_millis();

    match result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Ok,
            latency_ms,
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unavailable");
            ComponentCheck {
                status: ComponentStatus::Error,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
            }
        }
    }
}
