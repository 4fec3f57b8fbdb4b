//! Liveness and readiness probes for the student store.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

/// Process is up; does not touch storage.
async fn live() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 200 when the student store answers, 503 with the failure message otherwise.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.students.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok", "students": "ok" }))),
        Err(e) => {
            tracing::warn!(error = %e, "student store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "students": e.to_string() })),
            )
        }
    }
}

/// GET /health, GET /ready.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .with_state(state)
}
