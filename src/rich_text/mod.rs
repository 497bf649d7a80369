// src/rich_text/mod.rs
//! Rich text decoding and aggregation.
//!
//! The Notion API represents any styled text — page titles, rich_text
//! properties, block content — as an array of polymorphic rich text
//! objects. `RichText` decodes that array into an ordered sequence of
//! [`RichTextItem`]s and derives aggregate views over it: concatenated
//! plain text, type sets, link and mention queries.

mod annotations;
mod item;
mod mention;

pub use annotations::Annotations;
pub use item::{Link, RichTextContent, RichTextItem, RichTextKind};
pub use mention::{Mention, TemplateMention};

use indexmap::IndexSet;
use serde_json::Value;
use std::fmt;

/// An ordered sequence of rich text items with a cached plain-text view.
///
/// Sequence order is document order and is significant. The plain-text
/// cache is kept consistent with the sequence on every mutation:
/// `add_text` appends incrementally, `set_plain_text` rebuilds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    items: Vec<RichTextItem>,
    plain_text: String,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw rich text array in one pass.
    ///
    /// Non-object entries are skipped defensively; a non-array input
    /// decodes to an empty sequence.
    pub fn from_raw(value: &Value) -> Self {
        let mut items = Vec::new();

        if let Some(entries) = value.as_array() {
            for entry in entries {
                if entry.is_object() {
                    items.push(RichTextItem::from_raw(entry));
                } else {
                    log::debug!("Skipping non-object rich text entry: {}", entry);
                }
            }
        }

        Self::from_items(items)
    }

    /// Build from already-decoded items, computing the plain-text cache.
    pub fn from_items(items: Vec<RichTextItem>) -> Self {
        let plain_text = items.iter().map(RichTextItem::plain_text).collect();
        Self { items, plain_text }
    }

    /// Build a single unstyled text item from a plain string.
    pub fn from_plain_text(text: &str) -> Self {
        let mut rich_text = Self::new();
        rich_text.set_plain_text(text);
        rich_text
    }

    /// Replace the whole sequence with one synthetic text item.
    pub fn set_plain_text(&mut self, text: &str) {
        self.items = vec![RichTextItem::text(text, Annotations::default(), None)];
        self.plain_text = text.to_string();
    }

    /// Append a text item with optional annotations and link.
    ///
    /// The plain-text cache is extended incrementally; the result is
    /// identical to a full recompute over the sequence.
    pub fn add_text(&mut self, content: &str, annotations: Annotations, link: Option<&str>) -> &mut Self {
        self.items.push(RichTextItem::text(content, annotations, link));
        self.plain_text.push_str(content);
        self
    }

    /// All items, in document order.
    pub fn items(&self) -> &[RichTextItem] {
        &self.items
    }

    /// A single item by index.
    pub fn item(&self, index: usize) -> Option<&RichTextItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The concatenated plain text of the whole sequence.
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// Export the raw rich text array, order preserved.
    ///
    /// For a sequence decoded via [`RichText::from_raw`], this is
    /// value-equal to the input.
    pub fn to_raw(&self) -> Value {
        Value::Array(self.items.iter().map(RichTextItem::to_raw).collect())
    }

    /// The distinct item kinds, in first-occurrence order.
    pub fn types(&self) -> Vec<RichTextKind> {
        self.items
            .iter()
            .map(|item| item.kind().clone())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether any item carries styling.
    pub fn has_annotations(&self) -> bool {
        self.items.iter().any(|item| item.annotations().has_any())
    }

    /// Whether any item links somewhere.
    pub fn has_links(&self) -> bool {
        self.items.iter().any(RichTextItem::has_link)
    }

    /// The items with a non-null href, in document order.
    pub fn linked_items(&self) -> Vec<&RichTextItem> {
        self.items.iter().filter(|item| item.has_link()).collect()
    }

    /// The items of one kind, in document order.
    pub fn items_by_type(&self, kind: &RichTextKind) -> Vec<&RichTextItem> {
        self.items.iter().filter(|item| item.kind() == kind).collect()
    }

    pub fn text_items(&self) -> Vec<&RichTextItem> {
        self.items_by_type(&RichTextKind::Text)
    }

    pub fn mention_items(&self) -> Vec<&RichTextItem> {
        self.items_by_type(&RichTextKind::Mention)
    }

    pub fn equation_items(&self) -> Vec<&RichTextItem> {
        self.items_by_type(&RichTextKind::Equation)
    }

    pub fn has_mentions(&self) -> bool {
        self.items.iter().any(RichTextItem::is_mention)
    }

    pub fn has_equations(&self) -> bool {
        self.items.iter().any(RichTextItem::is_equation)
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plain_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_node(content: &str, bold: bool) -> Value {
        json!({
            "type": "text",
            "text": {"content": content, "link": null},
            "annotations": {
                "bold": bold, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            },
            "plain_text": content,
            "href": null,
        })
    }

    #[test]
    fn test_plain_text_concatenation() {
        let rich_text = RichText::from_raw(&json!([
            text_node("Hello ", false),
            text_node("world", true),
        ]));
        assert_eq!(rich_text.plain_text(), "Hello world");
        assert_eq!(rich_text.len(), 2);
        assert!(rich_text.item(1).unwrap().annotations().bold);
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let rich_text = RichText::from_raw(&json!([
            text_node("ok", false),
            "stray string",
            42,
        ]));
        assert_eq!(rich_text.len(), 1);
        assert_eq!(rich_text.plain_text(), "ok");
    }

    #[test]
    fn test_set_plain_text_replaces_sequence() {
        let mut rich_text = RichText::from_raw(&json!([
            text_node("one", false),
            text_node("two", false),
        ]));
        rich_text.set_plain_text("New text");
        assert_eq!(rich_text.len(), 1);
        assert_eq!(rich_text.plain_text(), "New text");
    }

    #[test]
    fn test_add_text_keeps_cache_consistent() {
        let mut rich_text = RichText::from_plain_text("a");
        rich_text
            .add_text("b", Annotations::default(), None)
            .add_text("c", Annotations { bold: true, ..Default::default() }, Some("https://x.dev"));

        // Incremental cache must equal a full recompute
        let recomputed: String = rich_text.items().iter().map(|i| i.plain_text()).collect();
        assert_eq!(rich_text.plain_text(), recomputed);
        assert_eq!(rich_text.plain_text(), "abc");
        assert!(rich_text.has_links());
        assert!(rich_text.has_annotations());
    }

    #[test]
    fn test_types_in_first_occurrence_order() {
        let rich_text = RichText::from_raw(&json!([
            text_node("a", false),
            {"type": "mention", "mention": {"type": "user", "user": {"id": "u1"}}, "plain_text": "@u", "href": null},
            {"type": "equation", "equation": {"expression": "x"}, "plain_text": "x", "href": null},
            text_node("b", false),
        ]));
        assert_eq!(
            rich_text.types(),
            vec![RichTextKind::Text, RichTextKind::Mention, RichTextKind::Equation]
        );
    }

    #[test]
    fn test_type_filters_preserve_order() {
        let rich_text = RichText::from_raw(&json!([
            {"type": "mention", "mention": {"type": "user", "user": {"id": "abc"}}, "plain_text": "@a", "href": null},
            text_node("plain", false),
        ]));
        assert!(rich_text.has_mentions());
        assert!(!rich_text.has_equations());
        assert_eq!(rich_text.mention_items().len(), 1);
        assert_eq!(rich_text.text_items().len(), 1);
        assert_eq!(
            rich_text.mention_items()[0].mention().unwrap().user_id(),
            Some("abc")
        );
    }

    #[test]
    fn test_linked_items_filter() {
        let rich_text = RichText::from_raw(&json!([
            text_node("no link", false),
            {"type": "text", "text": {"content": "l1", "link": {"url": "https://a"}}, "plain_text": "l1", "href": "https://a"},
            {"type": "text", "text": {"content": "l2", "link": {"url": "https://b"}}, "plain_text": "l2", "href": "https://b"},
        ]));
        let linked = rich_text.linked_items();
        assert_eq!(linked.len(), 2);
        assert_eq!(linked[0].href(), Some("https://a"));
        assert_eq!(linked[1].href(), Some("https://b"));
    }

    #[test]
    fn test_decode_to_raw_round_trip() {
        let raw = json!([
            text_node("Hello ", false),
            {"type": "mention", "mention": {"type": "date", "date": {"start": "2026-08-23", "end": null}}, "plain_text": "2026-08-23", "href": null},
        ]);
        assert_eq!(RichText::from_raw(&raw).to_raw(), raw);
    }

    #[test]
    fn test_display_is_plain_text() {
        let rich_text = RichText::from_plain_text("hello");
        assert_eq!(rich_text.to_string(), "hello");
    }
}
