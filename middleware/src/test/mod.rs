//! Unit test module
//!
//! Middleware unit tests live here, separate from source files.
//! Tests drive the layers through a small axum Router with `tower::ServiceExt::oneshot`.

mod request_logging_test;
