// src/lib.rs
//! notion-query — typed query building and rich text decoding for the
//! Notion API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `Error`, `ApiErrorCode`, `ValidationError`
//! - **Query DSL** — `Filter`, `FilterBag`, `Sort`, `QueryRequest`,
//!   `Operator`, `PropertyType`
//! - **Rich text** — `RichText`, `RichTextItem`, `Mention`, `Annotations`
//! - **Domain model** — `PropertyValue`, `SelectOption`, `DateValue`
//! - **Transport** — `Transport`, `HttpTransport`, `DataSource`
//!
//! Filters validate their operators at construction time, so an invalid
//! operator/property-type combination fails before a request exists:
//!
//! ```
//! use notion_query::{Filter, Operator, QueryRequest};
//!
//! let payload = QueryRequest::new()
//!     .filter(Filter::date("Due", Operator::NextWeek, None)?)
//!     .page_size(25)
//!     .build()?;
//! assert!(payload.is_object());
//! # Ok::<(), notion_query::Error>(())
//! ```

mod api;
mod constants;
mod error;
mod model;
mod query;
mod rich_text;
mod types;

// --- Error Handling ---
pub use crate::error::{ApiErrorCode, Error, Result, ValidationError};

// --- Query DSL ---
pub use crate::query::{
    is_valid, sort_query, valid_operators, Filter, FilterBag, Operator, PropertyType,
    QueryRequest, Sort, SortDirection, SortKey, Timestamp,
};

// --- Rich Text ---
pub use crate::rich_text::{
    Annotations, Link, Mention, RichText, RichTextContent, RichTextItem, RichTextKind,
    TemplateMention,
};

// --- Domain Model ---
pub use crate::model::{DateValue, PropertyValue, SelectOption, UserRef};

// --- Domain Types ---
pub use crate::types::{ApiKey, Color, StartCursor};

// --- Transport & Endpoints ---
pub use crate::api::{DataSource, HttpTransport, QueryResponse, Transport};

// --- Constants ---
pub use crate::constants::DEFAULT_PAGE_SIZE;
