//! End-to-end payload shapes for the query DSL.
//!
//! These tests pin the exact wire shapes the Notion API expects:
//! per-type operator validation, sentinel values, single-filter
//! wrapping, and page-size default suppression.

use notion_query::{
    Error, Filter, FilterBag, Operator, QueryRequest, Sort, SortDirection, StartCursor, Timestamp,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn invalid_operator_fails_before_any_payload_exists() {
    // contains is a text operator, not a number operator
    let err = Filter::number("Score", Operator::Contains, 1.0).unwrap_err();
    match err {
        Error::InvalidOperator {
            operator,
            property_type,
        } => {
            assert_eq!(operator, "contains");
            assert_eq!(property_type, "number");
        }
        other => panic!("expected InvalidOperator, got {:?}", other),
    }
}

#[test]
fn relative_date_filter_serializes_with_empty_object_sentinel() {
    let filter = Filter::date("d", Operator::NextWeek, None).unwrap();
    assert_eq!(
        filter.to_query(),
        json!({"property": "d", "date": {"next_week": {}}})
    );
}

#[test]
fn select_presence_filter_serializes_with_true_sentinel() {
    let filter = Filter::select("s", Operator::IsEmpty, None).unwrap();
    assert_eq!(
        filter.to_query(),
        json!({"property": "s", "select": {"is_empty": true}})
    );
}

#[test]
fn both_filter_kinds_set_fails_at_build() {
    let request = QueryRequest::new()
        .filter(Filter::text("Name", Operator::Equals, "x").unwrap())
        .filter_bag(FilterBag::or(vec![Filter::text("Name", Operator::Equals, "y")
            .unwrap()
            .into()]));

    assert!(matches!(
        request.build(),
        Err(Error::ConflictingFilterSpecification)
    ));
}

#[test]
fn default_page_size_is_omitted_and_explicit_sizes_are_kept() {
    let with_default = QueryRequest::new().page_size(100).build().unwrap();
    assert_eq!(with_default, json!({}));

    let with_explicit = QueryRequest::new().page_size(50).build().unwrap();
    assert_eq!(with_explicit, json!({"page_size": 50}));
}

#[test]
fn empty_request_is_an_object() {
    let payload = QueryRequest::new().build().unwrap();
    assert!(payload.is_object());
    assert!(!payload.is_array());
}

#[test]
fn filter_bag_nesting_matches_the_compound_filter_shape() {
    let bag = FilterBag::or(vec![
        Filter::status("Stage", Operator::Equals, Some("Done")).unwrap().into(),
        FilterBag::and(vec![
            Filter::people("Owner", Operator::Contains, Some("user-uuid"))
                .unwrap()
                .into(),
            Filter::date("Due", Operator::Before, Some("2026-09-01"))
                .unwrap()
                .into(),
        ]),
    ]);

    let payload = QueryRequest::new().filter_bag(bag).build().unwrap();
    assert_eq!(
        payload,
        json!({
            "filter": {"or": [
                {"property": "Stage", "status": {"equals": "Done"}},
                {"and": [
                    {"property": "Owner", "people": {"contains": "user-uuid"}},
                    {"property": "Due", "date": {"before": "2026-09-01"}}
                ]}
            ]}
        })
    );
}

#[test]
fn full_query_carries_sorts_filter_cursor_and_page_size() {
    let payload = QueryRequest::new()
        .sort(Sort::descending("Priority"))
        .sort(Sort::by_timestamp(Timestamp::LastEditedTime, SortDirection::Ascending))
        .filter(Filter::email("Contact", Operator::EndsWith, Some("@example.com")).unwrap())
        .start_at(StartCursor::new("cursor-1").unwrap())
        .page_size(10)
        .build()
        .unwrap();

    assert_eq!(
        payload,
        json!({
            "sorts": [
                {"property": "Priority", "direction": "descending"},
                {"timestamp": "last_edited_time", "direction": "ascending"}
            ],
            "filter": {"or": [
                {"property": "Contact", "email": {"ends_with": "@example.com"}}
            ]},
            "start_cursor": "cursor-1",
            "page_size": 10
        })
    );
}

#[test]
fn sort_sequence_order_is_preserved_verbatim() {
    let payload = QueryRequest::new()
        .sort(Sort::ascending("B"))
        .sort(Sort::ascending("A"))
        .sort(Sort::descending("B"))
        .build()
        .unwrap();

    assert_eq!(
        payload["sorts"],
        json!([
            {"property": "B", "direction": "ascending"},
            {"property": "A", "direction": "ascending"},
            {"property": "B", "direction": "descending"}
        ])
    );
}
