//! Shared HTTP mapping for both hosting adapters.
//!
//! Every response the relay can produce is built here, so the on-demand
//! handler and the always-on server cannot drift apart.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::relay::{RelayOutcome, SubmissionRequest};

/// JSON body returned to the caller for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Parse a raw request body into a submission.
pub fn parse_submission(body: &[u8]) -> Result<SubmissionRequest, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Response for a body that is not a JSON object.
pub fn invalid_body_response() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("Invalid JSON body")),
    )
}

/// Response for a non-POST request in the on-demand model.
pub fn method_not_allowed_response() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiResponse::error("Method not allowed. Use POST.")),
    )
}

/// Map a relay outcome to its HTTP representation.
///
/// Transport and timeout details stay server-side; the caller only ever
/// sees a generic message for those.
pub fn respond(outcome: RelayOutcome) -> (StatusCode, Json<ApiResponse>) {
    match outcome {
        RelayOutcome::Delivered => (StatusCode::OK, Json(ApiResponse::ok())),
        RelayOutcome::Rejected(e) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(e.to_string())),
        ),
        RelayOutcome::Unconfigured => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Bot credentials not configured")),
        ),
        RelayOutcome::UpstreamFailed(description) => {
            (StatusCode::BAD_GATEWAY, Json(ApiResponse::error(description)))
        }
        RelayOutcome::TimedOut => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Request timeout. Please try again.")),
        ),
        RelayOutcome::TransportError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(
                "An error occurred while processing your request",
            )),
        ),
    }
}
