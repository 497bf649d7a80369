// src/query/filter.rs
//! Single-property filter conditions.
//!
//! A `Filter` is one leaf condition on one property. Every factory
//! validates its operator against the operator table at construction
//! time, so an invalid combination can never reach the network.
//!
//! Sentinel policy (an upstream wire contract, preserved exactly):
//! presence operators (`is_empty`, `is_not_empty`) carry the boolean
//! `true` as their condition value; relative-date operators carry the
//! empty object `{}`; every other operator carries the caller value.

use crate::error::{Error, Result};
use crate::query::operators::{self, Operator, PropertyType};
use serde_json::{json, Map, Value};

/// How a filter's condition is defined.
///
/// The "exactly one of typed-conditions or raw-definition" invariant is
/// unrepresentable-by-construction: a filter is either typed or raw.
#[derive(Debug, Clone, PartialEq)]
enum FilterDefinition {
    /// A validated `{operator: value}` condition for a known property type.
    Typed {
        property_type: PropertyType,
        conditions: Map<String, Value>,
    },
    /// An escape hatch for filter shapes this crate doesn't model yet.
    /// The definition is spliced into the query fragment verbatim.
    Raw(Map<String, Value>),
}

/// One filter condition on a single property.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    property: String,
    definition: FilterDefinition,
}

impl Filter {
    fn new(property: &str, definition: FilterDefinition) -> Result<Self> {
        if property.is_empty() {
            return Err(Error::InvalidFilterDefinition {
                property: property.to_string(),
                reason: "property name must not be empty".to_string(),
            });
        }
        Ok(Self {
            property: property.to_string(),
            definition,
        })
    }

    fn typed(property: &str, property_type: PropertyType, operator: Operator, value: Value) -> Result<Self> {
        if !operators::is_valid(property_type, operator) {
            return Err(Error::InvalidOperator {
                operator: operator.as_str().to_string(),
                property_type: property_type.as_str().to_string(),
            });
        }

        // Presence and relative-date operators replace the caller value
        // with the per-class sentinel the API expects.
        let condition_value = if operator.is_presence() {
            json!(true)
        } else if operator.is_relative_date() {
            json!({})
        } else {
            value
        };

        let mut conditions = Map::new();
        conditions.insert(operator.as_str().to_string(), condition_value);

        Self::new(
            property,
            FilterDefinition::Typed {
                property_type,
                conditions,
            },
        )
    }

    /// Filter a text property. Text properties use the `rich_text` filter
    /// type on the wire.
    pub fn text(property: &str, operator: Operator, value: &str) -> Result<Self> {
        Self::typed(property, PropertyType::RichText, operator, json!(value))
    }

    /// Filter a number property.
    ///
    /// Rejects non-finite values (`NaN`, ±inf): they have no JSON
    /// representation and the API would reject them anyway.
    pub fn number(property: &str, operator: Operator, value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NotNumeric {
                property: property.to_string(),
                value,
            });
        }
        Self::typed(property, PropertyType::Number, operator, json!(value))
    }

    /// Filter a checkbox property.
    pub fn checkbox(property: &str, operator: Operator, value: bool) -> Result<Self> {
        Self::typed(property, PropertyType::Checkbox, operator, json!(value))
    }

    /// Filter a date property.
    ///
    /// `value` is an ISO 8601 date for the comparison operators; pass
    /// `None` for presence checks and relative ranges, where the value
    /// is replaced by a sentinel regardless.
    pub fn date(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::Date, operator, json!(value))
    }

    /// Filter a files property. Only presence operators apply, so no
    /// value is taken.
    pub fn files(property: &str, operator: Operator) -> Result<Self> {
        Self::typed(property, PropertyType::Files, operator, Value::Null)
    }

    /// Filter a multi-select property.
    pub fn multi_select(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::MultiSelect, operator, json!(value))
    }

    /// Filter a select property.
    pub fn select(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::Select, operator, json!(value))
    }

    /// Filter a status property.
    pub fn status(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::Status, operator, json!(value))
    }

    /// Filter a people property (people, created_by, last_edited_by).
    /// `value` is a user UUID.
    pub fn people(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::People, operator, json!(value))
    }

    /// Filter a relation property. `value` is a page UUID.
    pub fn relation(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::Relation, operator, json!(value))
    }

    /// Filter a phone number property.
    pub fn phone_number(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::PhoneNumber, operator, json!(value))
    }

    /// Filter an email property.
    pub fn email(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::Email, operator, json!(value))
    }

    /// Filter a URL property.
    pub fn url(property: &str, operator: Operator, value: Option<&str>) -> Result<Self> {
        Self::typed(property, PropertyType::Url, operator, json!(value))
    }

    /// Filter a unique_id (ID) property.
    pub fn unique_id(property: &str, operator: Operator, value: i64) -> Result<Self> {
        Self::typed(property, PropertyType::UniqueId, operator, json!(value))
    }

    /// Filter a verification property.
    ///
    /// Verification conditions are keyed on `status` rather than a
    /// comparison operator; `status` must be one of verified, expired,
    /// or none.
    pub fn verification(property: &str, status: &str) -> Result<Self> {
        if !crate::constants::VERIFICATION_STATUSES.contains(&status) {
            return Err(Error::InvalidVerificationStatus(status.to_string()));
        }

        let mut conditions = Map::new();
        conditions.insert("status".to_string(), json!(status));

        Self::new(
            property,
            FilterDefinition::Typed {
                property_type: PropertyType::Verification,
                conditions,
            },
        )
    }

    /// Escape hatch for filter shapes not implemented here yet. The
    /// definition is passed through verbatim, so the caller owns its
    /// validity against the Notion docs.
    pub fn raw(property: &str, definition: Map<String, Value>) -> Result<Self> {
        if definition.is_empty() {
            return Err(Error::InvalidFilterDefinition {
                property: property.to_string(),
                reason: "raw filter definition must not be empty".to_string(),
            });
        }
        Self::new(property, FilterDefinition::Raw(definition))
    }

    /// The property this filter applies to.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Serialize into the query-fragment shape the API expects:
    /// `{property, <type-tag>: conditions}` for typed filters, or
    /// `{property, ...definition}` for raw ones.
    pub fn to_query(&self) -> Value {
        let mut fragment = Map::new();
        fragment.insert("property".to_string(), json!(self.property));

        match &self.definition {
            FilterDefinition::Typed {
                property_type,
                conditions,
            } => {
                fragment.insert(
                    property_type.as_str().to_string(),
                    Value::Object(conditions.clone()),
                );
            }
            FilterDefinition::Raw(definition) => {
                for (key, value) in definition {
                    fragment.insert(key.clone(), value.clone());
                }
            }
        }

        Value::Object(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_filter_serializes_as_rich_text() {
        let filter = Filter::text("Name", Operator::Contains, "report").unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "Name", "rich_text": {"contains": "report"}})
        );
    }

    #[test]
    fn test_invalid_operator_is_rejected_at_construction() {
        let err = Filter::checkbox("Done", Operator::Contains, true).unwrap_err();
        match err {
            Error::InvalidOperator {
                operator,
                property_type,
            } => {
                assert_eq!(operator, "contains");
                assert_eq!(property_type, "checkbox");
            }
            other => panic!("expected InvalidOperator, got {:?}", other),
        }
    }

    #[test]
    fn test_number_filter_rejects_non_finite() {
        assert!(matches!(
            Filter::number("Score", Operator::Equals, f64::NAN),
            Err(Error::NotNumeric { .. })
        ));
        assert!(matches!(
            Filter::number("Score", Operator::Equals, f64::INFINITY),
            Err(Error::NotNumeric { .. })
        ));
        assert!(Filter::number("Score", Operator::Equals, 42.0).is_ok());
    }

    #[test]
    fn test_relative_date_uses_empty_object_sentinel() {
        let filter = Filter::date("Due", Operator::NextWeek, None).unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "Due", "date": {"next_week": {}}})
        );

        // A supplied value is ignored for relative ranges
        let filter = Filter::date("Due", Operator::PastMonth, Some("2026-01-01")).unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "Due", "date": {"past_month": {}}})
        );
    }

    #[test]
    fn test_presence_uses_true_sentinel() {
        let filter = Filter::select("Stage", Operator::IsEmpty, None).unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "Stage", "select": {"is_empty": true}})
        );

        let filter = Filter::multi_select("Tags", Operator::IsNotEmpty, Some("ignored")).unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "Tags", "multi_select": {"is_not_empty": true}})
        );
    }

    #[test]
    fn test_date_comparison_carries_value() {
        let filter = Filter::date("Due", Operator::OnOrAfter, Some("2026-08-01")).unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "Due", "date": {"on_or_after": "2026-08-01"}})
        );
    }

    #[test]
    fn test_unique_id_filter() {
        let filter = Filter::unique_id("ID", Operator::GreaterThan, 17).unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "ID", "unique_id": {"greater_than": 17}})
        );
    }

    #[test]
    fn test_verification_filter_validates_status() {
        let filter = Filter::verification("Verified", "expired").unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "Verified", "verification": {"status": "expired"}})
        );

        assert!(matches!(
            Filter::verification("Verified", "maybe"),
            Err(Error::InvalidVerificationStatus(_))
        ));
    }

    #[test]
    fn test_raw_filter_passes_through() {
        let mut definition = Map::new();
        definition.insert("formula".to_string(), json!({"number": {"equals": 2}}));
        let filter = Filter::raw("Computed", definition).unwrap();
        assert_eq!(
            filter.to_query(),
            json!({"property": "Computed", "formula": {"number": {"equals": 2}}})
        );
    }

    #[test]
    fn test_raw_filter_rejects_empty_definition() {
        assert!(matches!(
            Filter::raw("Computed", Map::new()),
            Err(Error::InvalidFilterDefinition { .. })
        ));
    }

    #[test]
    fn test_empty_property_name_is_rejected() {
        assert!(matches!(
            Filter::text("", Operator::Equals, "x"),
            Err(Error::InvalidFilterDefinition { .. })
        ));
    }

    #[test]
    fn test_every_invalid_pair_is_rejected() {
        use crate::query::operators::valid_operators;

        const ALL_OPERATORS: &[Operator] = &[
            Operator::Equals,
            Operator::DoesNotEqual,
            Operator::Contains,
            Operator::DoesNotContain,
            Operator::StartsWith,
            Operator::EndsWith,
            Operator::IsEmpty,
            Operator::IsNotEmpty,
            Operator::GreaterThan,
            Operator::LessThan,
            Operator::GreaterThanOrEqualTo,
            Operator::LessThanOrEqualTo,
            Operator::Before,
            Operator::After,
            Operator::OnOrBefore,
            Operator::OnOrAfter,
            Operator::PastWeek,
            Operator::PastMonth,
            Operator::PastYear,
            Operator::NextWeek,
            Operator::NextMonth,
            Operator::NextYear,
            Operator::ThisWeek,
        ];

        for &op in ALL_OPERATORS {
            let results = [
                (PropertyType::RichText, Filter::text("p", op, "v").is_ok()),
                (PropertyType::Number, Filter::number("p", op, 1.0).is_ok()),
                (PropertyType::Checkbox, Filter::checkbox("p", op, true).is_ok()),
                (PropertyType::Date, Filter::date("p", op, None).is_ok()),
                (PropertyType::Files, Filter::files("p", op).is_ok()),
                (PropertyType::People, Filter::people("p", op, None).is_ok()),
                (PropertyType::UniqueId, Filter::unique_id("p", op, 1).is_ok()),
            ];
            for (property_type, constructed) in results {
                assert_eq!(
                    constructed,
                    valid_operators(property_type).contains(&op),
                    "{} x {} disagreed with the operator table",
                    property_type,
                    op
                );
            }
        }
    }
}
