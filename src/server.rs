//! Always-on hosting adapter — axum HTTP server.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::relay::Relay;
use crate::response::{self, ApiResponse};

/// Shared state for the waitlist routes.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// Build the router: waitlist intake plus health check. CORS stays open
/// so the marketing page can POST from any origin.
pub fn waitlist_routes(relay: Arc<Relay>) -> Router {
    Router::new()
        .route("/api/waitlist", post(submit_waitlist))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(AppState { relay })
}

/// GET /api/health
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Server is running"
    }))
}

/// POST /api/waitlist
///
/// The body is taken raw so parse failures get the same mapping as in
/// the on-demand model instead of axum's default extractor rejection.
async fn submit_waitlist(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse>) {
    let raw = match response::parse_submission(&body) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable submission body");
            return response::invalid_body_response();
        }
    };

    response::respond(state.relay.process(raw).await)
}
