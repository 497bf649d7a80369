// src/rich_text/mention.rs
//! Mention payloads — rich text items that reference another entity.
//!
//! A mention nests a second tagged union inside the rich text item:
//! `mention.type` selects one of user, page, database, date,
//! link_preview, or template_mention. Unrecognized tags decode to
//! `Unrecognized` instead of failing, so new mention kinds from the API
//! degrade gracefully.

use serde_json::Value;

/// The decoded payload of a mention-type rich text item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mention {
    User {
        id: Option<String>,
        /// The `object` tag of the referenced user record ("user").
        object: Option<String>,
    },
    Page {
        id: Option<String>,
    },
    Database {
        id: Option<String>,
    },
    Date {
        start: Option<String>,
        end: Option<String>,
    },
    LinkPreview {
        url: Option<String>,
    },
    TemplateMention(TemplateMention),
    /// A mention kind this crate doesn't recognize yet.
    Unrecognized,
}

/// Template mention placeholders, resolved by Notion when a template is
/// instantiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateMention {
    /// A date placeholder: "today" or "now".
    Date(String),
    /// A user placeholder: "me".
    User(String),
    Unrecognized,
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

impl Mention {
    /// Decode a raw `mention` object, dispatching on its `type` tag.
    pub fn from_raw(value: &Value) -> Self {
        let mention_type = value.get("type").and_then(Value::as_str).unwrap_or("");

        match mention_type {
            "user" => {
                let user = value.get("user").cloned().unwrap_or(Value::Null);
                Mention::User {
                    id: string_field(&user, "id"),
                    object: string_field(&user, "object"),
                }
            }
            "page" => {
                let page = value.get("page").cloned().unwrap_or(Value::Null);
                Mention::Page {
                    id: string_field(&page, "id"),
                }
            }
            "database" => {
                let database = value.get("database").cloned().unwrap_or(Value::Null);
                Mention::Database {
                    id: string_field(&database, "id"),
                }
            }
            "date" => {
                let date = value.get("date").cloned().unwrap_or(Value::Null);
                Mention::Date {
                    start: string_field(&date, "start"),
                    end: string_field(&date, "end"),
                }
            }
            "link_preview" => {
                let preview = value.get("link_preview").cloned().unwrap_or(Value::Null);
                Mention::LinkPreview {
                    url: string_field(&preview, "url"),
                }
            }
            "template_mention" => {
                let template = value.get("template_mention").cloned().unwrap_or(Value::Null);
                Mention::TemplateMention(TemplateMention::from_raw(&template))
            }
            other => {
                log::debug!("Unrecognized mention type '{}', decoding as opaque", other);
                Mention::Unrecognized
            }
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Mention::User { .. })
    }

    pub fn is_page(&self) -> bool {
        matches!(self, Mention::Page { .. })
    }

    pub fn is_database(&self) -> bool {
        matches!(self, Mention::Database { .. })
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Mention::Date { .. })
    }

    pub fn is_link_preview(&self) -> bool {
        matches!(self, Mention::LinkPreview { .. })
    }

    pub fn is_template_mention(&self) -> bool {
        matches!(self, Mention::TemplateMention(_))
    }

    /// User ID if this is a user mention.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Mention::User { id, .. } => id.as_deref(),
            _ => None,
        }
    }

    /// The `object` tag of the mentioned user record.
    pub fn user_object_type(&self) -> Option<&str> {
        match self {
            Mention::User { object, .. } => object.as_deref(),
            _ => None,
        }
    }

    /// Page ID if this is a page mention.
    pub fn page_id(&self) -> Option<&str> {
        match self {
            Mention::Page { id } => id.as_deref(),
            _ => None,
        }
    }

    /// Database ID if this is a database mention.
    pub fn database_id(&self) -> Option<&str> {
        match self {
            Mention::Database { id } => id.as_deref(),
            _ => None,
        }
    }

    /// Start of a date mention.
    pub fn date_start(&self) -> Option<&str> {
        match self {
            Mention::Date { start, .. } => start.as_deref(),
            _ => None,
        }
    }

    /// End of a date mention, when it is a range.
    pub fn date_end(&self) -> Option<&str> {
        match self {
            Mention::Date { end, .. } => end.as_deref(),
            _ => None,
        }
    }

    /// URL of a link preview mention.
    pub fn link_preview_url(&self) -> Option<&str> {
        match self {
            Mention::LinkPreview { url } => url.as_deref(),
            _ => None,
        }
    }

    /// The template mention sub-type tag
    /// (`template_mention_date` or `template_mention_user`).
    pub fn template_mention_type(&self) -> Option<&'static str> {
        match self {
            Mention::TemplateMention(TemplateMention::Date(_)) => Some("template_mention_date"),
            Mention::TemplateMention(TemplateMention::User(_)) => Some("template_mention_user"),
            _ => None,
        }
    }

    /// The date literal of a template date mention ("today" or "now").
    pub fn template_mention_date(&self) -> Option<&str> {
        match self {
            Mention::TemplateMention(TemplateMention::Date(value)) => Some(value),
            _ => None,
        }
    }

    /// The user literal of a template user mention ("me").
    pub fn template_mention_user(&self) -> Option<&str> {
        match self {
            Mention::TemplateMention(TemplateMention::User(value)) => Some(value),
            _ => None,
        }
    }
}

impl TemplateMention {
    fn from_raw(value: &Value) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("template_mention_date") => TemplateMention::Date(
                string_field(value, "template_mention_date").unwrap_or_default(),
            ),
            Some("template_mention_user") => TemplateMention::User(
                string_field(value, "template_mention_user").unwrap_or_default(),
            ),
            _ => TemplateMention::Unrecognized,
        }
    }
}
