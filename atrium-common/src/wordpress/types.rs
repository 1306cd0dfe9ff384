//! WordPress REST item types and field accessors

use crate::normalize::{decode_html_entities, parse_newline_list};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rendered rich-text field (`{"rendered": "..."}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WpRendered {
    #[serde(default)]
    pub rendered: String,
}

/// One item of a WordPress collection response.
///
/// Custom post types share this shape: identity, optional slug, a rendered
/// title, and an editor-defined ACF field map. Fields beyond the `_fields`
/// selection simply deserialize to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WpItem {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<WpRendered>,
    #[serde(default)]
    pub content: Option<WpRendered>,
    #[serde(default)]
    pub excerpt: Option<WpRendered>,
    #[serde(default)]
    pub acf: serde_json::Map<String, Value>,
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Value>,
}

impl WpItem {
    /// Entity-decoded title text.
    pub fn title_text(&self) -> String {
        match &self.title {
            Some(title) => decode_html_entities(&title.rendered),
            None => String::new(),
        }
    }

    pub fn slug_str(&self) -> &str {
        self.slug.as_deref().unwrap_or("")
    }

    /// Raw ACF field value.
    pub fn acf_value(&self, key: &str) -> Option<&Value> {
        self.acf.get(key)
    }

    /// ACF string field, raw.
    pub fn acf_str(&self, key: &str) -> Option<&str> {
        self.acf.get(key).and_then(Value::as_str)
    }

    /// ACF string field, entity-decoded, absent/empty resolving to `None`.
    pub fn acf_text(&self, key: &str) -> Option<String> {
        let raw = self.acf_str(key)?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(decode_html_entities(raw))
    }

    /// ACF newline-delimited list field.
    pub fn acf_lines(&self, key: &str) -> Vec<String> {
        parse_newline_list(self.acf_str(key))
    }

    /// Editor-controlled ordering key. Missing or malformed reads as 0.
    /// ACF number fields arrive as JSON numbers or as numeric strings
    /// depending on field configuration; accept both.
    pub fn display_order(&self) -> i64 {
        match self.acf.get("display_order") {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Name of the first embedded taxonomy term (`_embedded["wp:term"][0][0]`),
    /// entity-decoded. Used to resolve a post's category without a second
    /// request.
    pub fn embedded_term_name(&self) -> Option<String> {
        let name = self
            .embedded
            .as_ref()?
            .get("wp:term")?
            .get(0)?
            .get(0)?
            .get("name")?
            .as_str()?;
        Some(decode_html_entities(name))
    }
}

/// Sort a collection ascending by `display_order`.
///
/// `sort_by_key` is stable, so items with equal order keys retain the order
/// the CMS returned them in.
pub fn sort_by_display_order(items: &mut [WpItem]) {
    items.sort_by_key(WpItem::display_order);
}
