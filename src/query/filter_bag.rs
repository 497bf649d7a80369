// src/query/filter_bag.rs
//! Logical composition of filters under `and`/`or`.
//!
//! A `FilterBag` is a tree: leaves are single `Filter` conditions, inner
//! nodes combine children under one logical connective. The tree owns
//! its children by value, so bags clone and move like any other value.
//! Child order is caller-supplied and preserved verbatim in the payload.

use crate::query::Filter;
use serde_json::{json, Value};

/// A filter tree combining conditions under logical AND/OR.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterBag {
    /// A single leaf condition.
    Filter(Filter),
    /// All children must match.
    And(Vec<FilterBag>),
    /// At least one child must match.
    Or(Vec<FilterBag>),
}

impl FilterBag {
    /// Combine filters (or nested bags) under `and`.
    pub fn and(children: Vec<FilterBag>) -> Self {
        FilterBag::And(children)
    }

    /// Combine filters (or nested bags) under `or`.
    pub fn or(children: Vec<FilterBag>) -> Self {
        FilterBag::Or(children)
    }

    /// Serialize the tree into the API's compound-filter shape, with
    /// children in their original order.
    pub fn to_query(&self) -> Value {
        match self {
            FilterBag::Filter(filter) => filter.to_query(),
            FilterBag::And(children) => {
                json!({"and": children.iter().map(FilterBag::to_query).collect::<Vec<_>>()})
            }
            FilterBag::Or(children) => {
                json!({"or": children.iter().map(FilterBag::to_query).collect::<Vec<_>>()})
            }
        }
    }
}

impl From<Filter> for FilterBag {
    fn from(filter: Filter) -> Self {
        FilterBag::Filter(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Operator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_serializes_as_plain_filter() {
        let bag: FilterBag = Filter::checkbox("Done", Operator::Equals, true)
            .unwrap()
            .into();
        assert_eq!(
            bag.to_query(),
            json!({"property": "Done", "checkbox": {"equals": true}})
        );
    }

    #[test]
    fn test_nested_composition_preserves_order() {
        let bag = FilterBag::and(vec![
            Filter::select("Stage", Operator::Equals, Some("Active"))
                .unwrap()
                .into(),
            FilterBag::or(vec![
                Filter::number("Score", Operator::GreaterThan, 5.0)
                    .unwrap()
                    .into(),
                Filter::checkbox("Pinned", Operator::Equals, true)
                    .unwrap()
                    .into(),
            ]),
        ]);

        assert_eq!(
            bag.to_query(),
            json!({
                "and": [
                    {"property": "Stage", "select": {"equals": "Active"}},
                    {"or": [
                        {"property": "Score", "number": {"greater_than": 5.0}},
                        {"property": "Pinned", "checkbox": {"equals": true}}
                    ]}
                ]
            })
        );
    }
}
