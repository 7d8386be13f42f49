//! HTTP client module
//!
//! Provides the shared client used by every endpoint check.

mod client;

pub use client::{ApiClient, HttpError, HttpResponse, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
