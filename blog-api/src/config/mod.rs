//! Service configuration, loaded from env.

mod base;


pub use base::{
    ApiConfig, DEFAULT_BIND_ADDR, DEFAULT_CORS_ALLOWED_ORIGIN, DEFAULT_LOG_FILE,
};
