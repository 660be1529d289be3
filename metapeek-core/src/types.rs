//! Domain types for metapeek.
//!
//! The service returns one structure per page: the text of the `<title>`
//! element plus the attribute set of every `<meta>` element in the document
//! head. [`PageMetadata`] is that structure, serialized verbatim as the HTTP
//! response body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute map of a single `<meta>` element (attribute name -> value).
///
/// A `BTreeMap` keeps serialization deterministic; the *sequence* of metas in
/// [`PageMetadata::metas`] preserves document order.
pub type MetaAttrs = BTreeMap<String, String>;

/// Extracted metadata of one rendered page.
///
/// Wire shape: `{"title": "...", "metas": [{"name": "...", "content": "..."}, ...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Text content of `html head title`; empty when the page has no title.
    pub title: String,
    /// One attribute map per `<meta>` element in `html head`, in document order.
    pub metas: Vec<MetaAttrs>,
}

impl PageMetadata {
    /// Creates metadata with a title and no meta tags.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            metas: Vec::new(),
        }
    }

    /// Looks up the `content` of the first meta whose `name` or `property`
    /// attribute equals `key` (covers both classic and Open Graph metas).
    pub fn meta_content(&self, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|attrs| {
                attrs.get("name").map(String::as_str) == Some(key)
                    || attrs.get("property").map(String::as_str) == Some(key)
            })
            .and_then(|attrs| attrs.get("content"))
            .map(String::as_str)
    }

    /// Returns true if neither a title nor any meta tag was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.metas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> MetaAttrs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_serialized_wire_shape() {
        let page = PageMetadata {
            title: "Example".into(),
            metas: vec![attrs(&[("charset", "utf-8")])],
        };
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"title":"Example","metas":[{"charset":"utf-8"}]}"#);
    }

    #[test]
    fn test_roundtrip() {
        let page = PageMetadata {
            title: "Example".into(),
            metas: vec![
                attrs(&[("name", "description"), ("content", "a page")]),
                attrs(&[("property", "og:title"), ("content", "Example")]),
            ],
        };
        let json = serde_json::to_string(&page).unwrap();
        let back: PageMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn test_meta_content_by_name_and_property() {
        let page = PageMetadata {
            title: String::new(),
            metas: vec![
                attrs(&[("name", "description"), ("content", "a page")]),
                attrs(&[("property", "og:title"), ("content", "Example")]),
            ],
        };
        assert_eq!(page.meta_content("description"), Some("a page"));
        assert_eq!(page.meta_content("og:title"), Some("Example"));
        assert_eq!(page.meta_content("og:image"), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(PageMetadata::default().is_empty());
        assert!(!PageMetadata::with_title("x").is_empty());
    }
}
