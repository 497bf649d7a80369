// src/model/property_value.rs
//! Decoding of page property payloads into typed values.
//!
//! A page's `properties` map carries one object per property, keyed on a
//! `type` tag. This module decodes the common tags into a sum type;
//! anything else decodes to `Unsupported` with the tag preserved, the
//! same forward-compatible policy the rich text decoder follows.

use crate::rich_text::RichText;
use crate::types::Color;
use chrono::NaiveDate;
use serde_json::Value;

/// A select / multi-select / status option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: Option<String>,
    pub name: Option<String>,
    pub color: Color,
}

impl SelectOption {
    fn from_raw(value: &Value) -> Self {
        Self {
            id: string_field(value, "id"),
            name: string_field(value, "name"),
            color: value
                .get("color")
                .and_then(Value::as_str)
                .map(Color::from_tag)
                .unwrap_or_default(),
        }
    }
}

/// A user reference as it appears in people properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserRef {
    fn from_raw(value: &Value) -> Self {
        Self {
            id: string_field(value, "id"),
            name: string_field(value, "name"),
            avatar_url: string_field(value, "avatar_url"),
        }
    }
}

/// A date property value: raw ISO 8601 strings plus parsed accessors.
///
/// The raw strings are kept because the API emits both date-only and
/// datetime forms; parsing is offered, not forced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValue {
    pub start: Option<String>,
    pub end: Option<String>,
    pub time_zone: Option<String>,
}

impl DateValue {
    fn from_raw(value: &Value) -> Self {
        Self {
            start: string_field(value, "start"),
            end: string_field(value, "end"),
            time_zone: string_field(value, "time_zone"),
        }
    }

    /// The calendar date of `start`, when it parses.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start.as_deref().and_then(parse_iso_date)
    }

    /// The calendar date of `end`, when it parses.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end.as_deref().and_then(parse_iso_date)
    }

    /// Whether this value spans a range.
    pub fn is_range(&self) -> bool {
        self.end.is_some()
    }
}

/// Accepts both date-only ("2026-08-23") and datetime
/// ("2026-08-23T10:00:00.000Z") forms.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| s.parse::<chrono::DateTime<chrono::Utc>>().ok().map(|dt| dt.date_naive()))
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// A decoded page property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(RichText),
    Text(RichText),
    Number(Option<f64>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Status(Option<SelectOption>),
    Checkbox(bool),
    Date(Option<DateValue>),
    People(Vec<UserRef>),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    /// Related page IDs.
    Relation(Vec<String>),
    UniqueId {
        prefix: Option<String>,
        number: Option<i64>,
    },
    /// A property type this crate doesn't decode; the tag is preserved.
    Unsupported {
        property_type: String,
    },
}

impl PropertyValue {
    /// Decode one property object, dispatching on its `type` tag.
    pub fn from_raw(value: &Value) -> Self {
        let property_type = value.get("type").and_then(Value::as_str).unwrap_or("");
        let payload = value.get(property_type).cloned().unwrap_or(Value::Null);

        match property_type {
            "title" => PropertyValue::Title(RichText::from_raw(&payload)),
            "rich_text" => PropertyValue::Text(RichText::from_raw(&payload)),
            "number" => PropertyValue::Number(payload.as_f64()),
            "select" => PropertyValue::Select(
                payload.is_object().then(|| SelectOption::from_raw(&payload)),
            ),
            "status" => PropertyValue::Status(
                payload.is_object().then(|| SelectOption::from_raw(&payload)),
            ),
            "multi_select" => PropertyValue::MultiSelect(
                object_entries(&payload).map(SelectOption::from_raw).collect(),
            ),
            "checkbox" => PropertyValue::Checkbox(payload.as_bool().unwrap_or(false)),
            "date" => PropertyValue::Date(
                payload.is_object().then(|| DateValue::from_raw(&payload)),
            ),
            "people" => PropertyValue::People(
                object_entries(&payload).map(UserRef::from_raw).collect(),
            ),
            "url" => PropertyValue::Url(payload.as_str().map(str::to_string)),
            "email" => PropertyValue::Email(payload.as_str().map(str::to_string)),
            "phone_number" => PropertyValue::PhoneNumber(payload.as_str().map(str::to_string)),
            "relation" => PropertyValue::Relation(
                object_entries(&payload)
                    .filter_map(|entry| string_field(entry, "id"))
                    .collect(),
            ),
            "unique_id" => PropertyValue::UniqueId {
                prefix: string_field(&payload, "prefix"),
                number: payload.get("number").and_then(Value::as_i64),
            },
            other => {
                log::debug!("Unsupported property type '{}', decoding as opaque", other);
                PropertyValue::Unsupported {
                    property_type: other.to_string(),
                }
            }
        }
    }

    /// The wire tag of this value's property type.
    pub fn property_type(&self) -> &str {
        match self {
            PropertyValue::Title(_) => "title",
            PropertyValue::Text(_) => "rich_text",
            PropertyValue::Number(_) => "number",
            PropertyValue::Select(_) => "select",
            PropertyValue::MultiSelect(_) => "multi_select",
            PropertyValue::Status(_) => "status",
            PropertyValue::Checkbox(_) => "checkbox",
            PropertyValue::Date(_) => "date",
            PropertyValue::People(_) => "people",
            PropertyValue::Url(_) => "url",
            PropertyValue::Email(_) => "email",
            PropertyValue::PhoneNumber(_) => "phone_number",
            PropertyValue::Relation(_) => "relation",
            PropertyValue::UniqueId { .. } => "unique_id",
            PropertyValue::Unsupported { property_type } => property_type,
        }
    }

    /// The plain-text rendering, for text-bearing values.
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Title(rich_text) | PropertyValue::Text(rich_text) => {
                Some(rich_text.plain_text())
            }
            _ => None,
        }
    }
}

/// Iterates the elements of an array payload, skipping non-objects.
fn object_entries(payload: &Value) -> impl Iterator<Item = &Value> {
    payload
        .as_array()
        .map(|entries| entries.as_slice())
        .unwrap_or_default()
        .iter()
        .filter(|entry| entry.is_object())
}
