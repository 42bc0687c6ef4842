//! Outer error boundary: any panic in a request path becomes a generic 500 plus an error log line.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Body text of the generic server error.
pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";

pub type ErrorBoundaryLayer = CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response>;

/// `500 {"error": "Internal Server Error"}`. The cause is never sent to the client.
pub fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": INTERNAL_SERVER_ERROR_BODY })),
    )
        .into_response()
}

/// Logs the panic payload and renders the generic 500.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "Unhandled error in request handler");
    internal_server_error()
}

pub fn error_boundary_layer() -> ErrorBoundaryLayer {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}
