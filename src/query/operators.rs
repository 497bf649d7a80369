// src/query/operators.rs
//! The operator table: which comparison operators are legal for which
//! property type.
//!
//! This is the rule engine that rejects invalid filter combinations
//! before a request is ever built. The per-type sets mirror the Notion
//! filter-condition reference exactly; they are a wire contract, not an
//! internal convention.

use crate::error::Error;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Comparison operators as a typed vocabulary.
///
/// Each variant serializes to the exact condition key the Notion API
/// expects (`equals`, `is_not_empty`, `past_week`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    DoesNotEqual,
    Contains,
    DoesNotContain,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
    GreaterThan,
    LessThan,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
    Before,
    After,
    OnOrBefore,
    OnOrAfter,
    PastWeek,
    PastMonth,
    PastYear,
    NextWeek,
    NextMonth,
    NextYear,
    ThisWeek,
}

impl Operator {
    /// The condition key this operator uses on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::DoesNotEqual => "does_not_equal",
            Operator::Contains => "contains",
            Operator::DoesNotContain => "does_not_contain",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::GreaterThanOrEqualTo => "greater_than_or_equal_to",
            Operator::LessThanOrEqualTo => "less_than_or_equal_to",
            Operator::Before => "before",
            Operator::After => "after",
            Operator::OnOrBefore => "on_or_before",
            Operator::OnOrAfter => "on_or_after",
            Operator::PastWeek => "past_week",
            Operator::PastMonth => "past_month",
            Operator::PastYear => "past_year",
            Operator::NextWeek => "next_week",
            Operator::NextMonth => "next_month",
            Operator::NextYear => "next_year",
            Operator::ThisWeek => "this_week",
        }
    }

    /// Presence operators test emptiness instead of comparing a value.
    ///
    /// Their condition value is the sentinel `true`, never a caller value.
    pub fn is_presence(&self) -> bool {
        matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
    }

    /// Relative date-range operators (past_week, next_month, ...).
    ///
    /// Their condition value is the sentinel `{}`, never a caller value.
    pub fn is_relative_date(&self) -> bool {
        matches!(
            self,
            Operator::PastWeek
                | Operator::PastMonth
                | Operator::PastYear
                | Operator::NextWeek
                | Operator::NextMonth
                | Operator::NextYear
                | Operator::ThisWeek
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Property types that can appear in a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    RichText,
    Number,
    Checkbox,
    Date,
    Files,
    MultiSelect,
    Select,
    Status,
    People,
    Relation,
    PhoneNumber,
    Email,
    Url,
    UniqueId,
    Verification,
}

impl PropertyType {
    /// The filter-type key this property type uses on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::RichText => "rich_text",
            PropertyType::Number => "number",
            PropertyType::Checkbox => "checkbox",
            PropertyType::Date => "date",
            PropertyType::Files => "files",
            PropertyType::MultiSelect => "multi_select",
            PropertyType::Select => "select",
            PropertyType::Status => "status",
            PropertyType::People => "people",
            PropertyType::Relation => "relation",
            PropertyType::PhoneNumber => "phone_number",
            PropertyType::Email => "email",
            PropertyType::Url => "url",
            PropertyType::UniqueId => "unique_id",
            PropertyType::Verification => "verification",
        }
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // Text properties filter as rich_text since API version 2025-09-03.
            "text" | "rich_text" => Ok(PropertyType::RichText),
            "number" => Ok(PropertyType::Number),
            "checkbox" => Ok(PropertyType::Checkbox),
            "date" => Ok(PropertyType::Date),
            "files" => Ok(PropertyType::Files),
            "multi_select" => Ok(PropertyType::MultiSelect),
            "select" => Ok(PropertyType::Select),
            "status" => Ok(PropertyType::Status),
            "people" => Ok(PropertyType::People),
            "relation" => Ok(PropertyType::Relation),
            "phone_number" => Ok(PropertyType::PhoneNumber),
            "email" => Ok(PropertyType::Email),
            "url" => Ok(PropertyType::Url),
            "unique_id" => Ok(PropertyType::UniqueId),
            "verification" => Ok(PropertyType::Verification),
            other => Err(Error::UnknownPropertyType(other.to_string())),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use Operator::*;

const TEXT_OPERATORS: &[Operator] = &[
    Equals,
    DoesNotEqual,
    Contains,
    DoesNotContain,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
];

const NUMBER_OPERATORS: &[Operator] = &[
    Equals,
    DoesNotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
    IsEmpty,
    IsNotEmpty,
];

const CHECKBOX_OPERATORS: &[Operator] = &[Equals, DoesNotEqual];

const DATE_OPERATORS: &[Operator] = &[
    After,
    Before,
    Equals,
    OnOrBefore,
    OnOrAfter,
    NextWeek,
    NextMonth,
    NextYear,
    PastWeek,
    PastMonth,
    PastYear,
    ThisWeek,
    IsEmpty,
    IsNotEmpty,
];

const FILES_OPERATORS: &[Operator] = &[IsEmpty, IsNotEmpty];

const CONTAINMENT_OPERATORS: &[Operator] = &[Contains, DoesNotContain, IsEmpty, IsNotEmpty];

const EQUALITY_OPERATORS: &[Operator] = &[Equals, DoesNotEqual, IsEmpty, IsNotEmpty];

const UNIQUE_ID_OPERATORS: &[Operator] = &[
    Equals,
    DoesNotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
];

// Verification filters are keyed on `status`, not a comparison operator.
const VERIFICATION_OPERATORS: &[Operator] = &[];

/// The process-wide operator table.
static OPERATOR_TABLE: Lazy<HashMap<PropertyType, &'static [Operator]>> = Lazy::new(|| {
    HashMap::from([
        (PropertyType::RichText, TEXT_OPERATORS),
        (PropertyType::Number, NUMBER_OPERATORS),
        (PropertyType::Checkbox, CHECKBOX_OPERATORS),
        (PropertyType::Date, DATE_OPERATORS),
        (PropertyType::Files, FILES_OPERATORS),
        (PropertyType::MultiSelect, CONTAINMENT_OPERATORS),
        (PropertyType::Select, EQUALITY_OPERATORS),
        (PropertyType::Status, EQUALITY_OPERATORS),
        (PropertyType::People, CONTAINMENT_OPERATORS),
        (PropertyType::Relation, CONTAINMENT_OPERATORS),
        (PropertyType::PhoneNumber, TEXT_OPERATORS),
        (PropertyType::Email, TEXT_OPERATORS),
        (PropertyType::Url, TEXT_OPERATORS),
        (PropertyType::UniqueId, UNIQUE_ID_OPERATORS),
        (PropertyType::Verification, VERIFICATION_OPERATORS),
    ])
});

/// The comparison operators the given property type accepts.
pub fn valid_operators(property_type: PropertyType) -> &'static [Operator] {
    // The table is exhaustive over PropertyType, so the lookup can't miss.
    OPERATOR_TABLE
        .get(&property_type)
        .copied()
        .unwrap_or_default()
}

/// Whether `operator` is legal for `property_type`.
pub fn is_valid(property_type: PropertyType, operator: Operator) -> bool {
    valid_operators(property_type).contains(&operator)
}
