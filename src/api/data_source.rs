// src/api/data_source.rs
//! Data source query endpoint.
//!
//! Wraps a [`QueryRequest`] and an injected [`Transport`] into the
//! `data_sources/{id}/query` call. One request per `query()` invocation;
//! the response surfaces the raw pagination fields so the caller drives
//! cursor iteration.

use crate::api::Transport;
use crate::error::{Error, Result};
use crate::query::{Filter, FilterBag, QueryRequest, Sort};
use crate::types::StartCursor;
use serde_json::Value;
use std::sync::Arc;

/// One page of query results.
///
/// Results are raw page objects; decode the properties you need with
/// [`crate::model::PropertyValue::from_raw`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub results: Vec<Value>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl QueryResponse {
    /// Decode a query response body.
    pub fn from_raw(value: &Value) -> Result<Self> {
        let results = value
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                Error::MalformedResponse("Missing 'results' array in query response".to_string())
            })?
            .clone();

        Ok(Self {
            results,
            next_cursor: value
                .get("next_cursor")
                .and_then(Value::as_str)
                .map(str::to_string),
            has_more: value.get("has_more").and_then(Value::as_bool).unwrap_or(false),
        })
    }
}

/// Query endpoint for one data source.
pub struct DataSource {
    transport: Arc<dyn Transport>,
    data_source_id: String,
    request: QueryRequest,
}

impl DataSource {
    pub fn new(transport: Arc<dyn Transport>, data_source_id: impl Into<String>) -> Self {
        Self {
            transport,
            data_source_id: data_source_id.into(),
            request: QueryRequest::new(),
        }
    }

    /// Filter by a single condition.
    pub fn filter_by(mut self, filter: Filter) -> Self {
        self.request = self.request.filter(filter);
        self
    }

    /// Filter by a composed filter tree.
    pub fn filter_by_bag(mut self, bag: FilterBag) -> Self {
        self.request = self.request.filter_bag(bag);
        self
    }

    /// Append a sort entry.
    pub fn sort(mut self, sort: Sort) -> Self {
        self.request = self.request.sort(sort);
        self
    }

    /// Resume from a pagination cursor.
    pub fn start_at(mut self, cursor: StartCursor) -> Self {
        self.request = self.request.start_at(cursor);
        self
    }

    /// Request a specific page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.request = self.request.page_size(size);
        self
    }

    /// The data source this endpoint queries.
    pub fn data_source_id(&self) -> &str {
        &self.data_source_id
    }

    /// Run the query: build the payload (failing fast on conflicting
    /// filters) and post it.
    pub async fn query(&self) -> Result<QueryResponse> {
        let payload = self.request.build()?;
        let endpoint = format!("data_sources/{}/query", self.data_source_id);
        log::debug!("Querying data source {}", self.data_source_id);
        let response = self.transport.post(&endpoint, &payload).await?;
        QueryResponse::from_raw(&response)
    }
}
