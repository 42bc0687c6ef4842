//! Unit tests for request logging.
//!
//! Events are captured by a thread-local fmt subscriber writing into a shared buffer;
//! `#[tokio::test]` runs on the current thread, so the default guard covers the whole request.

use std::io;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;

use crate::log_requests;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn app() -> Router {
    Router::new()
        .route("/ok", get(|| async { "fine" }))
        .route("/fail", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .layer(axum::middleware::from_fn(log_requests))
}

async fn request_and_capture(uri: &str) -> (StatusCode, Vec<String>) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    (response.status(), logs.lines())
}

#[tokio::test]
async fn test_successful_request_is_logged_at_info() {
    let (status, lines) = request_and_capture("/ok").await;
    assert_eq!(status, StatusCode::OK);

    let line = lines
        .iter()
        .find(|l| l.contains("Request handled"))
        .expect("no request log line");
    assert!(line.contains("INFO"), "{}", line);
    assert!(line.contains("method=GET"), "{}", line);
    assert!(line.contains("path=/ok"), "{}", line);
    assert!(line.contains("status=200"), "{}", line);
    assert!(line.contains("latency_ms="), "{}", line);
}

#[tokio::test]
async fn test_server_error_is_logged_at_error() {
    let (status, lines) = request_and_capture("/fail").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let line = lines
        .iter()
        .find(|l| l.contains("Request failed"))
        .expect("no request log line");
    assert!(line.contains("ERROR"), "{}", line);
    assert!(line.contains("path=/fail"), "{}", line);
    assert!(line.contains("status=500"), "{}", line);
    assert!(!lines.iter().any(|l| l.contains("Request handled")));
}
