//! Status routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | / | GET | Plain-text "up and running" banner |
//! | /health | GET | JSON health check including the store |
//!
//! # Response example
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "database": "ok" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Status router - public routes
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// ok | error
    database: &'static str,
}

async fn root(State(state): State<ServerState>) -> String {
    format!(
        "Server is up and running! Go to localhost:{}/record to see employee data.",
        state.config.http_port
    )
}

async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, status, database) = match state.records.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!("Health check: store unreachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "error")
        }
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}
