// src/rich_text/annotations.rs
//! Styling annotations attached to a rich text item.

use crate::types::Color;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The flat style record every rich text item carries.
///
/// Plain value semantics: two annotation sets are equal when their
/// fields are equal. Absent fields in source JSON decode to the
/// all-false/"default" state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

impl Annotations {
    /// Decode from a raw annotations object, defaulting missing fields.
    pub fn from_raw(value: &Value) -> Self {
        let get_flag = |key: &str| value.get(key).and_then(Value::as_bool).unwrap_or(false);

        Self {
            bold: get_flag("bold"),
            italic: get_flag("italic"),
            strikethrough: get_flag("strikethrough"),
            underline: get_flag("underline"),
            code: get_flag("code"),
            color: value
                .get("color")
                .and_then(Value::as_str)
                .map(Color::from_tag)
                .unwrap_or_default(),
        }
    }

    /// The full raw annotations object, all six fields present.
    pub fn to_raw(&self) -> Value {
        json!({
            "bold": self.bold,
            "italic": self.italic,
            "strikethrough": self.strikethrough,
            "underline": self.underline,
            "code": self.code,
            "color": self.color.as_str(),
        })
    }

    /// Whether any styling is applied at all.
    pub fn has_any(&self) -> bool {
        self.bold
            || self.italic
            || self.strikethrough
            || self.underline
            || self.code
            || self.color != Color::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_annotation() {
        assert!(!Annotations::default().has_any());
    }

    #[test]
    fn test_color_alone_counts_as_annotation() {
        let annotations = Annotations {
            color: Color::Red,
            ..Default::default()
        };
        assert!(annotations.has_any());
    }

    #[test]
    fn test_missing_fields_default() {
        let annotations = Annotations::from_raw(&json!({"bold": true}));
        assert!(annotations.bold);
        assert!(!annotations.italic);
        assert_eq!(annotations.color, Color::Default);
        assert!(annotations.has_any());
    }

    #[test]
    fn test_raw_round_trip() {
        let raw = json!({
            "bold": true,
            "italic": false,
            "strikethrough": true,
            "underline": false,
            "code": true,
            "color": "blue_background",
        });
        assert_eq!(Annotations::from_raw(&raw).to_raw(), raw);
    }
}
