//! Base config: document store, listener, CORS, logging. Loaded from env.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
/// React development server.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_LOG_FILE: &str = "logs/blog-api.log";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// MONGO_URI (required)
    pub mongo_uri: String,
    /// BIND_ADDR, or the --bind override
    pub bind_addr: String,
    /// CORS_ALLOWED_ORIGIN; `None` (set to empty) disables CORS
    pub cors_allowed_origin: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl ApiConfig {
    /// Load from environment variables. `bind` overrides BIND_ADDR if provided.
    /// Fails when MONGO_URI is unset or blank.
    pub fn load(bind: Option<String>) -> Result<Self> {
        let mongo_uri = env::var("MONGO_URI")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .context("MONGO_URI is not set. Check your .env file.")?;
        let bind_addr = bind
            .or_else(|| env::var("BIND_ADDR").ok())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let cors_allowed_origin = match env::var("CORS_ALLOWED_ORIGIN") {
            Ok(origin) if origin.trim().is_empty() => None,
            Ok(origin) => Some(origin),
            Err(_) => Some(DEFAULT_CORS_ALLOWED_ORIGIN.to_string()),
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            mongo_uri,
            bind_addr,
            cors_allowed_origin,
            log_file,
        })
    }

    /// Validate config. Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        self.cors_origin()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a valid socket address: {}", self.bind_addr))
    }

    pub fn cors_origin(&self) -> Result<Option<HeaderValue>> {
        self.cors_allowed_origin
            .as_deref()
            .map(|origin| {
                HeaderValue::from_str(origin).with_context(|| {
                    format!("CORS_ALLOWED_ORIGIN is not a valid header value: {}", origin)
                })
            })
            .transpose()
    }
}
