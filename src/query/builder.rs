// src/query/builder.rs
//! Assembly of the final query request payload.
//!
//! `QueryRequest` collects an optional filter (single or bag), an
//! ordered sort sequence, a pagination cursor, and a page size, then
//! `build()` assembles them into the JSON body for a data-source query.
//!
//! The payload is always a JSON object, even when every field is unset —
//! the API rejects an empty array where it expects an object.

use crate::error::{Error, Result};
use crate::query::{sort_query, Filter, FilterBag, Sort};
use crate::types::StartCursor;
use serde_json::{json, Map, Value};

/// Builder for a data-source query payload.
///
/// Fluent by value: each setter consumes and returns the builder, and
/// `build()` borrows, so a configured request can be built repeatedly
/// (e.g. across pagination cursors via [`QueryRequest::start_at`]).
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    filter: Option<Filter>,
    filter_bag: Option<FilterBag>,
    sorts: Vec<Sort>,
    start_cursor: Option<StartCursor>,
    page_size: Option<u32>,
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single filter condition.
    ///
    /// Mutually exclusive with [`QueryRequest::filter_bag`]; setting both
    /// fails at `build()`.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set a composed filter tree.
    pub fn filter_bag(mut self, bag: FilterBag) -> Self {
        self.filter_bag = Some(bag);
        self
    }

    /// Append one sort entry. Call order is sort precedence.
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Resume from a pagination cursor.
    pub fn start_at(mut self, cursor: StartCursor) -> Self {
        self.start_cursor = Some(cursor);
        self
    }

    /// Request a specific page size.
    ///
    /// The server default (100) is suppressed from the payload.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Assemble the request payload.
    ///
    /// Fields are emitted in build order — sorts, filter, start_cursor,
    /// page_size — omitting any that are unset or empty. Fails with
    /// `ConflictingFilterSpecification` when both a single filter and a
    /// filter bag are set.
    pub fn build(&self) -> Result<Value> {
        let mut payload = Map::new();

        if !self.sorts.is_empty() {
            payload.insert("sorts".to_string(), Value::Array(sort_query(&self.sorts)));
        }

        match (&self.filter, &self.filter_bag) {
            (Some(_), Some(_)) => return Err(Error::ConflictingFilterSpecification),
            (Some(filter), None) => {
                // A single filter is wrapped in a one-element `or`, the
                // shape the API expects for a lone condition.
                payload.insert(
                    "filter".to_string(),
                    json!({"or": [filter.to_query()]}),
                );
            }
            (None, Some(bag)) => {
                payload.insert("filter".to_string(), bag.to_query());
            }
            (None, None) => {}
        }

        if let Some(cursor) = &self.start_cursor {
            payload.insert("start_cursor".to_string(), json!(cursor.as_str()));
        }

        if let Some(size) = self.page_size {
            if size != crate::constants::DEFAULT_PAGE_SIZE {
                payload.insert("page_size".to_string(), json!(size));
            }
        }

        Ok(Value::Object(payload))
    }
}
