//! # HTTP middleware
//!
//! Layers wrapped around every route of the article API: the panic-to-500 error boundary,
//! per-request logging, and single-origin CORS.

mod cors;
mod error_boundary;
mod request_logging;

#[cfg(test)]
mod test;

pub use cors::cors_layer;
pub use error_boundary::{
    error_boundary_layer, handle_panic, internal_server_error, ErrorBoundaryLayer,
    INTERNAL_SERVER_ERROR_BODY,
};
pub use request_logging::log_requests;
