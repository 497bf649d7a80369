// src/api/mod.rs
//! Transport seam and endpoints.
//!
//! The query and rich text subsystems are pure value computations; this
//! module is where they meet the network. `Transport` is the injected
//! capability — endpoints depend on it, not on a concrete HTTP client,
//! so tests run against an in-memory transport. Retries, timeouts, and
//! request concurrency belong to the transport implementation, never to
//! the endpoints.

mod data_source;
mod transport;

pub use data_source::{DataSource, QueryResponse};
pub use transport::HttpTransport;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// The "send request" capability endpoints are built on.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET an endpoint path (relative to the API base) and return the
    /// parsed JSON body.
    async fn get(&self, endpoint: &str) -> Result<Value>;

    /// POST a JSON payload to an endpoint path and return the parsed
    /// JSON body.
    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value>;
}
