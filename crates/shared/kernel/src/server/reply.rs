use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// The uniform failure envelope.
///
/// Every request-level failure is reported as `{"error": "..."}` with HTTP
/// 200; clients branch on the presence of the `error` key, not on status
/// codes. Feature-slice error enums convert into this at the handler edge.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorReply {
    /// Human-readable failure description.
    pub error: String,
}

impl ErrorReply {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Positive acknowledgement for mutating endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusReply {
    /// Outcome description, e.g. "Color updated".
    pub status: String,
}

impl StatusReply {
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into() }
    }
}

impl IntoResponse for StatusReply {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
