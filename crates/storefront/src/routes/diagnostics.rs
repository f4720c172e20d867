//! Liveness and connectivity probes.

use axum::Json;
use serde::Serialize;

/// Fixed payload returned by `GET /api/test`.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: &'static str,
}

/// Confirms the API is reachable (and, from a browser, that CORS admits the caller).
pub async fn api_test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "API is working!",
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}
