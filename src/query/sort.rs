// src/query/sort.rs
//! Sort specifications for query results.
//!
//! A query carries an ordered sequence of sorts; sequence position is
//! sort precedence. The sequence is passed through exactly as given —
//! no deduplication, no reordering. Duplicate or conflicting sorts are
//! the caller's responsibility.

use serde_json::{json, Value};
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The page timestamps the API can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    CreatedTime,
    LastEditedTime,
}

impl Timestamp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timestamp::CreatedTime => "created_time",
            Timestamp::LastEditedTime => "last_edited_time",
        }
    }
}

/// What a sort entry keys on: a named property or a page timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Property(String),
    Timestamp(Timestamp),
}

/// One (key, direction) sort entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    key: SortKey,
    direction: SortDirection,
}

impl Sort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sort a property ascending.
    pub fn ascending(property: &str) -> Self {
        Self::new(SortKey::Property(property.to_string()), SortDirection::Ascending)
    }

    /// Sort a property descending.
    pub fn descending(property: &str) -> Self {
        Self::new(SortKey::Property(property.to_string()), SortDirection::Descending)
    }

    /// Sort on a page timestamp.
    pub fn by_timestamp(timestamp: Timestamp, direction: SortDirection) -> Self {
        Self::new(SortKey::Timestamp(timestamp), direction)
    }

    /// Serialize into one sort-array entry.
    pub fn to_query(&self) -> Value {
        match &self.key {
            SortKey::Property(property) => json!({
                "property": property,
                "direction": self.direction.as_str(),
            }),
            SortKey::Timestamp(timestamp) => json!({
                "timestamp": timestamp.as_str(),
                "direction": self.direction.as_str(),
            }),
        }
    }
}

/// Serialize a sort sequence into the payload's sort array, one entry
/// per sort in input order.
pub fn sort_query(sorts: &[Sort]) -> Vec<Value> {
    sorts.iter().map(Sort::to_query).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_property_sort_shape() {
        assert_eq!(
            Sort::ascending("Name").to_query(),
            json!({"property": "Name", "direction": "ascending"})
        );
    }

    #[test]
    fn test_timestamp_sort_shape() {
        assert_eq!(
            Sort::by_timestamp(Timestamp::LastEditedTime, SortDirection::Descending).to_query(),
            json!({"timestamp": "last_edited_time", "direction": "descending"})
        );
    }

    #[test]
    fn test_sequence_is_passed_through_verbatim() {
        // Duplicates and conflicts are not our problem to resolve
        let sorts = vec![
            Sort::descending("Due"),
            Sort::ascending("Due"),
            Sort::descending("Due"),
        ];
        let query = sort_query(&sorts);
        assert_eq!(query.len(), 3);
        assert_eq!(query[0], json!({"property": "Due", "direction": "descending"}));
        assert_eq!(query[1], json!({"property": "Due", "direction": "ascending"}));
        assert_eq!(query[2], json!({"property": "Due", "direction": "descending"}));
    }
}
