// src/query/mod.rs
//! The query DSL: filters, sorts, and request payload assembly.
//!
//! Everything here is a pure value computation — operator validation and
//! payload construction happen entirely in memory, before any request is
//! sent. The wire shapes produced are bit-exact contracts with the
//! Notion API and must not be normalized for internal consistency.

mod builder;
mod filter;
mod filter_bag;
pub mod operators;
mod sort;

pub use builder::QueryRequest;
pub use filter::Filter;
pub use filter_bag::FilterBag;
pub use operators::{is_valid, valid_operators, Operator, PropertyType};
pub use sort::{sort_query, Sort, SortDirection, SortKey, Timestamp};
