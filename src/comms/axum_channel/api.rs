//! Axum handlers for `/api/*` routes.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::AxumState;

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct QueryRequest {
    query: String,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a JSON error response body.
fn json_error(code: &str, msg: impl std::fmt::Display) -> Json<serde_json::Value> {
    Json(json!({ "error": code, "message": format!("{msg}") }))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /api/health
pub(super) async fn health(State(state): State<AxumState>) -> Response {
    let store = state.pipeline.store();
    let body = json!({
        "status": "ok",
        "reasons": store.reason_count(),
        "issues": store.issue_count(),
        "provider": state.pipeline.provider().name(),
    });
    (StatusCode::OK, Json(body)).into_response()
}

/// POST /api/query
pub(super) async fn query(
    State(state): State<AxumState>,
    Json(req): Json<QueryRequest>,
) -> Response {
    match state.pipeline.handle(&req.query).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            warn!(channel_id = %state.channel_id, "query failed: {e}");
            (StatusCode::BAD_GATEWAY, json_error("service_unavailable", e)).into_response()
        }
    }
}
