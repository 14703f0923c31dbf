//! On-demand hosting adapter — one function invocation per request.
//!
//! Function-style platforms route before the process runs, so this entry
//! point receives the method and raw body directly and performs its own
//! method check.

use axum::Json;
use axum::http::{Method, StatusCode};

use crate::relay::Relay;
use crate::response::{self, ApiResponse};

/// Handle a single waitlist request.
pub async fn handle(
    relay: &Relay,
    method: Method,
    body: &[u8],
) -> (StatusCode, Json<ApiResponse>) {
    if method != Method::POST {
        return response::method_not_allowed_response();
    }

    let raw = match response::parse_submission(body) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable submission body");
            return response::invalid_body_response();
        }
    };

    response::respond(relay.process(raw).await)
}
