//! Axum-based HTTP channel — the web form plus a small JSON API.
//!
//! `run()` drives the axum event loop; the shared [`CancellationToken`] is
//! wired to axum's graceful shutdown.
//!
//! ## URL layout
//!
//! ```text
//! GET  /              → query form
//! POST /              → form submit, reply rendered into the page
//! POST /api/query     → { "query": … } → { "reply": …, "match_count": n }
//! GET  /api/health
//! GET  /favicon.ico   → 204
//! ```

mod api;
mod ui;

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::AppError;
use crate::pipeline::QueryPipeline;

// ── Shared request state ──────────────────────────────────────────────────────

/// Axum router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone — all fields are reference-counted.
#[derive(Clone)]
pub struct AxumState {
    /// Channel identifier used in log fields.
    pub channel_id: Arc<str>,
    pub pipeline: Arc<QueryPipeline>,
}

impl AxumState {
    pub fn new(channel_id: &str, pipeline: Arc<QueryPipeline>) -> Self {
        Self { channel_id: Arc::from(channel_id), pipeline }
    }
}

// ── AxumChannel ───────────────────────────────────────────────────────────────

pub struct AxumChannel {
    channel_id: String,
    bind_addr: String,
    pipeline: Arc<QueryPipeline>,
}

impl AxumChannel {
    pub fn new(
        channel_id: impl Into<String>,
        bind_addr: impl Into<String>,
        pipeline: Arc<QueryPipeline>,
    ) -> Self {
        Self { channel_id: channel_id.into(), bind_addr: bind_addr.into(), pipeline }
    }

    /// Serve until `shutdown` is cancelled.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), AppError> {
        let Self { channel_id, bind_addr, pipeline } = self;
        let router = build_router(AxumState::new(&channel_id, pipeline));

        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| AppError::Comms(format!("axum bind failed on {bind_addr}: {e}")))?;

        info!(%channel_id, %bind_addr, "axum channel listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(|e| AppError::Comms(format!("axum server error: {e}")))?;

        info!(%channel_id, "axum channel shut down");
        Ok(())
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: AxumState) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/query",  post(api::query))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
        .route("/",            get(ui::form).post(ui::submit))
        .with_state(state)
}
