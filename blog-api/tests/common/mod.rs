//! Test doubles for the article store and helpers to drive the router without a socket.
//!
//! - [`CountingStore`] wraps [`InMemoryArticleStore`] and counts every store call, so tests can
//!   assert that rejected requests never touched the store.
//! - [`FailingStore`] fails every operation, as an unreachable database would.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use blog_api::{build_app, ApiConfig};
use serde_json::Value;
use storage::{ArticleDocument, ArticleStore, InMemoryArticleStore, ObjectId, StorageError};
use tower::ServiceExt;

#[derive(Clone, Default)]
pub struct CountingStore {
    pub inner: InMemoryArticleStore,
    calls: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleStore for CountingStore {
    async fn find_all(&self, limit: usize) -> Result<Vec<ArticleDocument>, StorageError> {
        self.hit();
        self.inner.find_all(limit).await
    }
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<ArticleDocument>, StorageError> {
        self.hit();
        self.inner.find_by_id(id).await
    }
    async fn insert(&self, document: &ArticleDocument) -> Result<ObjectId, StorageError> {
        self.hit();
        self.inner.insert(document).await
    }
    async fn set_fields(
        &self,
        id: ObjectId,
        document: &ArticleDocument,
    ) -> Result<u64, StorageError> {
        self.hit();
        self.inner.set_fields(id, document).await
    }
    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StorageError> {
        self.hit();
        self.inner.delete_by_id(id).await
    }
}

pub struct FailingStore;

fn down() -> StorageError {
    StorageError::Database("connection refused".to_string())
}

#[async_trait]
impl ArticleStore for FailingStore {
    async fn find_all(&self, _limit: usize) -> Result<Vec<ArticleDocument>, StorageError> {
        Err(down())
    }
    async fn find_by_id(&self, _id: ObjectId) -> Result<Option<ArticleDocument>, StorageError> {
        Err(down())
    }
    async fn insert(&self, _document: &ArticleDocument) -> Result<ObjectId, StorageError> {
        Err(down())
    }
    async fn set_fields(
        &self,
        _id: ObjectId,
        _document: &ArticleDocument,
    ) -> Result<u64, StorageError> {
        Err(down())
    }
    async fn delete_by_id(&self, _id: ObjectId) -> Result<u64, StorageError> {
        Err(down())
    }
}

pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

pub fn test_config() -> ApiConfig {
    ApiConfig {
        mongo_uri: "mongodb://unused".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        cors_allowed_origin: Some(FRONTEND_ORIGIN.to_string()),
        log_file: "logs/test.log".to_string(),
    }
}

pub fn app_with(store: Arc<dyn ArticleStore>) -> Router {
    build_app(&test_config(), store).expect("app should build")
}

/// Sends one request and returns status plus parsed JSON body (`Value::Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
