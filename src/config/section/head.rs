//! `head` configuration: HTML tags injected into the document `<head>`.
//!
//! The generator schema encodes each tag as a 2- or 3-element array:
//! `["meta", { property = "og:title", content = "..." }]` with an optional
//! trailing string for inline content (scripts, styles). List order is
//! `<head>` emission order and is preserved, as is attribute order.

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Tag names that are valid inside `<head>`.
const HEAD_TAG_NAMES: &[&str] = &[
    "base", "link", "meta", "noscript", "script", "style", "title",
];

pub struct HeadFields {
    pub entry: FieldPath,
}

// ============================================================================
// HeadTag
// ============================================================================

/// A single tag injected into the document `<head>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadTag {
    /// Tag name (e.g. "meta", "link").
    pub name: String,
    /// Attributes in declaration order.
    pub attrs: HeadAttrs,
    /// Inline content (third array element), e.g. script body.
    pub content: Option<String>,
}

impl HeadTag {
    pub const FIELDS: HeadFields = HeadFields {
        entry: FieldPath::new("head"),
    };

    pub fn new(name: impl Into<String>, attrs: impl Into<HeadAttrs>) -> Self {
        Self {
            name: name.into(),
            attrs: attrs.into(),
            content: None,
        }
    }

    /// Uniqueness key for meta tags: the `property` attribute (Open Graph)
    /// or the `name` attribute (plain meta).
    pub fn meta_key(&self) -> Option<&str> {
        if self.name != "meta" {
            return None;
        }
        self.attrs.get("property").or_else(|| self.attrs.get("name"))
    }
}

/// Validate head entries: known tag names, unique meta keys.
pub fn validate(head: &[HeadTag], diag: &mut ConfigDiagnostics) {
    let mut seen_keys = FxHashSet::default();

    for (index, tag) in head.iter().enumerate() {
        if !HEAD_TAG_NAMES.contains(&tag.name.as_str()) {
            diag.error_with_hint(
                HeadTag::FIELDS.entry,
                format!("head[{index}]: '{}' is not a head element", tag.name),
                format!("expected one of: {}", HEAD_TAG_NAMES.join(", ")),
            );
        }

        // Meta tags keyed by property/name must be unique (one og:title etc.)
        if let Some(key) = tag.meta_key()
            && !seen_keys.insert(key.to_string())
        {
            diag.error(
                HeadTag::FIELDS.entry,
                format!("head[{index}]: duplicate meta tag for '{key}'"),
            );
        }
    }
}

// ============================================================================
// HeadAttrs (ordered attribute map)
// ============================================================================

/// Attribute mapping that preserves declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadAttrs(Vec<(String, String)>);

impl HeadAttrs {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for HeadAttrs {
    fn from(pairs: [(K, V); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Serialize for HeadAttrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HeadAttrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttrsVisitor;

        impl<'de> Visitor<'de> for AttrsVisitor {
            type Value = HeadAttrs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    pairs.push((key, value));
                }
                Ok(HeadAttrs(pairs))
            }
        }

        deserializer.deserialize_map(AttrsVisitor)
    }
}

// ============================================================================
// HeadTag serde (array form)
// ============================================================================

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.name)?;
        seq.serialize_element(&self.attrs)?;
        if let Some(content) = &self.content {
            seq.serialize_element(content)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for HeadTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor;

        impl<'de> Visitor<'de> for TagVisitor {
            type Value = HeadTag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [tagName, attributes] or [tagName, attributes, content] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let name: String = access
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let attrs: HeadAttrs = access.next_element()?.unwrap_or_default();
                let content: Option<String> = access.next_element()?;

                // Reject trailing garbage beyond the triple
                if access.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }

                Ok(HeadTag {
                    name,
                    attrs,
                    content,
                })
            }
        }

        deserializer.deserialize_seq(TagVisitor)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn favicon() -> HeadTag {
        HeadTag::new("link", [("rel", "icon"), ("href", "/homelab-docs/favicon.ico")])
    }

    #[test]
    fn test_attrs_preserve_order() {
        let tag = favicon();
        let keys: Vec<_> = tag.attrs.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["rel", "href"]);
        assert_eq!(tag.attrs.get("rel"), Some("icon"));
        assert_eq!(tag.attrs.get("missing"), None);
    }

    #[test]
    fn test_json_array_form() {
        let json = serde_json::to_string(&favicon()).unwrap();
        assert_eq!(
            json,
            r#"["link",{"rel":"icon","href":"/homelab-docs/favicon.ico"}]"#
        );

        let parsed: HeadTag = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, favicon());
    }

    #[test]
    fn test_json_triple_with_content() {
        let json = r#"["script",{"type":"module"},"console.log(1)"]"#;
        let tag: HeadTag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.name, "script");
        assert_eq!(tag.content.as_deref(), Some("console.log(1)"));

        // Content survives re-serialization
        assert_eq!(serde_json::to_string(&tag).unwrap(), json);
    }

    #[test]
    fn test_rejects_four_elements() {
        let json = r#"["meta",{},"x","y"]"#;
        assert!(serde_json::from_str::<HeadTag>(json).is_err());
    }

    #[test]
    fn test_meta_key() {
        let og = HeadTag::new("meta", [("property", "og:title"), ("content", "Docs")]);
        assert_eq!(og.meta_key(), Some("og:title"));

        let named = HeadTag::new("meta", [("name", "theme-color"), ("content", "#3c8772")]);
        assert_eq!(named.meta_key(), Some("theme-color"));

        assert_eq!(favicon().meta_key(), None);
    }

    #[test]
    fn test_validate_accepts_unique_meta() {
        let head = vec![
            favicon(),
            HeadTag::new("meta", [("property", "og:title"), ("content", "a")]),
            HeadTag::new("meta", [("name", "twitter:card"), ("content", "b")]),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate(&head, &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_duplicate_og_title() {
        let head = vec![
            HeadTag::new("meta", [("property", "og:title"), ("content", "a")]),
            HeadTag::new("meta", [("property", "og:title"), ("content", "b")]),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate(&head, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("og:title"));
    }

    #[test]
    fn test_validate_rejects_unknown_tag() {
        let head = vec![HeadTag::new("div", [("class", "x")])];
        let mut diag = ConfigDiagnostics::new();
        validate(&head, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("div"));
    }

    #[test]
    fn test_toml_mixed_array() {
        // TOML carries the same array form as the generator schema
        #[derive(serde::Deserialize)]
        struct Doc {
            head: Vec<HeadTag>,
        }

        let doc: Doc = toml::from_str(
            r##"head = [
    ["link", { rel = "icon", href = "/favicon.ico" }],
    ["meta", { name = "theme-color", content = "#3c8772" }],
]"##,
        )
        .unwrap();

        assert_eq!(doc.head.len(), 2);
        assert_eq!(doc.head[0].name, "link");
        assert_eq!(doc.head[1].attrs.get("content"), Some("#3c8772"));
    }
}
