// src/rich_text/item.rs
//! A single rich text segment — text, mention, or equation.
//!
//! Each item retains the raw JSON node it was decoded from, so
//! `to_raw()` reproduces the source structure exactly, including fields
//! this crate doesn't model. Decoding is forward-compatible: an
//! unrecognized `type` tag keeps the common fields (plain text, href,
//! annotations) and leaves the type-specific content unset.

use crate::rich_text::{Annotations, Mention};
use serde_json::{json, Map, Value};
use std::fmt;

/// The kind of a rich text item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RichTextKind {
    Text,
    Mention,
    Equation,
    /// A type tag this crate doesn't recognize yet.
    Other(String),
}

impl RichTextKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => RichTextKind::Text,
            "mention" => RichTextKind::Mention,
            "equation" => RichTextKind::Equation,
            other => RichTextKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RichTextKind::Text => "text",
            RichTextKind::Mention => "mention",
            RichTextKind::Equation => "equation",
            RichTextKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for RichTextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An inline link on a text segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
}

/// The type-specific content of a rich text item.
///
/// One variant per `type` tag keeps dispatch total: every accessor is a
/// `match` the compiler checks for exhaustiveness.
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextContent {
    Text {
        content: String,
        link: Option<Link>,
    },
    Mention(Mention),
    Equation {
        expression: String,
    },
    /// Unrecognized `type`: common fields only.
    Unrecognized,
}

/// One polymorphic segment of rich text.
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextItem {
    raw: Map<String, Value>,
    kind: RichTextKind,
    plain_text: String,
    href: Option<String>,
    annotations: Annotations,
    content: RichTextContent,
}

impl RichTextItem {
    /// Decode one raw rich text node.
    ///
    /// Never fails: missing fields default and unrecognized type tags
    /// decode to an item with common fields only.
    pub fn from_raw(value: &Value) -> Self {
        let raw = value.as_object().cloned().unwrap_or_default();

        let kind = RichTextKind::from_tag(
            raw.get("type").and_then(Value::as_str).unwrap_or(""),
        );
        let plain_text = raw
            .get("plain_text")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let href = raw
            .get("href")
            .and_then(Value::as_str)
            .map(str::to_string);
        let annotations = raw
            .get("annotations")
            .map(Annotations::from_raw)
            .unwrap_or_default();

        let content = match kind {
            RichTextKind::Text => {
                let text = raw.get("text").cloned().unwrap_or(Value::Null);
                RichTextContent::Text {
                    content: text
                        .get("content")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                    link: text
                        .get("link")
                        .and_then(|link| link.get("url"))
                        .and_then(Value::as_str)
                        .map(|url| Link {
                            url: url.to_string(),
                        }),
                }
            }
            RichTextKind::Mention => match raw.get("mention") {
                Some(mention) => RichTextContent::Mention(Mention::from_raw(mention)),
                None => RichTextContent::Unrecognized,
            },
            RichTextKind::Equation => RichTextContent::Equation {
                expression: raw
                    .get("equation")
                    .and_then(|eq| eq.get("expression"))
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
            },
            RichTextKind::Other(ref tag) => {
                if !tag.is_empty() {
                    log::debug!("Unrecognized rich text type '{}', keeping common fields", tag);
                }
                RichTextContent::Unrecognized
            }
        };

        Self {
            raw,
            kind,
            plain_text,
            href,
            annotations,
            content,
        }
    }

    /// Create a text-type item.
    ///
    /// The raw node is synthesized with explicit defaults, so a built
    /// item serializes the same way a decoded one does.
    pub fn text(content: &str, annotations: Annotations, link: Option<&str>) -> Self {
        let raw = json!({
            "type": "text",
            "text": {
                "content": content,
                "link": link.map(|url| json!({"url": url})).unwrap_or(Value::Null),
            },
            "annotations": annotations.to_raw(),
            "plain_text": content,
            "href": link,
        });
        Self::from_raw(&raw)
    }

    pub fn kind(&self) -> &RichTextKind {
        &self.kind
    }

    pub fn is_text(&self) -> bool {
        self.kind == RichTextKind::Text
    }

    pub fn is_mention(&self) -> bool {
        self.kind == RichTextKind::Mention
    }

    pub fn is_equation(&self) -> bool {
        self.kind == RichTextKind::Equation
    }

    /// The plain text without any formatting.
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// The href, when this item links or mentions somewhere.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn has_link(&self) -> bool {
        self.href.is_some()
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn content(&self) -> &RichTextContent {
        &self.content
    }

    /// Text content, for text-type items.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            RichTextContent::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Inline link, for text-type items that carry one.
    pub fn text_link(&self) -> Option<&Link> {
        match &self.content {
            RichTextContent::Text { link, .. } => link.as_ref(),
            _ => None,
        }
    }

    /// URL of the inline link, when present.
    pub fn text_link_url(&self) -> Option<&str> {
        self.text_link().map(|link| link.url.as_str())
    }

    /// Mention payload, for mention-type items.
    pub fn mention(&self) -> Option<&Mention> {
        match &self.content {
            RichTextContent::Mention(mention) => Some(mention),
            _ => None,
        }
    }

    /// LaTeX expression, for equation-type items.
    pub fn equation_expression(&self) -> Option<&str> {
        match &self.content {
            RichTextContent::Equation { expression } => Some(expression),
            _ => None,
        }
    }

    /// The raw node in Notion API format.
    ///
    /// For decoded items this is the exact source structure; for items
    /// built via [`RichTextItem::text`] it is the synthesized node with
    /// defaults applied.
    pub fn to_raw(&self) -> Value {
        Value::Object(self.raw.clone())
    }
}

impl fmt::Display for RichTextItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plain_text)
    }
}
