//! HTML attribute maps for `<meta>` and `<link>` elements

use std::collections::btree_map::{BTreeMap, Iter};
use std::fmt::Write;

/// Attribute name/value map for one `<meta>` or `<link>` element.
///
/// Attributes are kept in sorted name order so that rendered output is
/// deterministic regardless of insertion order.
///
/// ## Example
///
/// ```
/// use page_meta::TagAttrs;
///
/// let attrs = TagAttrs::new().with("name", "description").with("content", "A site");
/// assert_eq!(attrs.to_meta_html(), r#"<meta content="A site" name="description">"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TagAttrs {
    attrs: BTreeMap<String, String>,
}

impl TagAttrs {
    /// Create an empty attribute map
    #[inline]
    #[must_use = "creates an empty attribute map"]
    pub const fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Attribute map with a single `name`/`content` pair, the common meta tag shape
    #[inline]
    #[must_use]
    pub fn named(name: &str, content: &str) -> Self {
        Self::new().with("name", name).with("content", content)
    }

    /// Attribute map with a single `property`/`content` pair (OpenGraph shape)
    #[inline]
    #[must_use]
    pub fn property(property: &str, content: &str) -> Self {
        Self::new().with("property", property).with("content", content)
    }

    /// Add or replace an attribute, returning the map for chaining
    #[inline]
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Add or replace an attribute in place
    #[inline]
    pub fn set(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Look up an attribute value
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whether an attribute is present
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Number of attributes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the map has no attributes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate attributes in sorted name order
    #[inline]
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.attrs.iter()
    }

    /// Render as a `<meta>` element
    #[inline]
    #[must_use]
    pub fn to_meta_html(&self) -> String {
        self.to_element("meta")
    }

    /// Render as a `<link>` element
    #[inline]
    #[must_use]
    pub fn to_link_html(&self) -> String {
        self.to_element("link")
    }

    fn to_element(&self, tag: &str) -> String {
        let mut html = String::new();
        let _ = write!(html, "<{tag}");
        for (name, value) in &self.attrs {
            let _ = write!(html, " {name}=\"{}\"", escape_attr(value));
        }
        html.push('>');
        html
    }
}

impl<const N: usize> From<[(&str, &str); N]> for TagAttrs {
    #[inline]
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut attrs = Self::new();
        for (name, value) in pairs {
            attrs.set(name, value);
        }
        attrs
    }
}

/// Escape a string for use inside a double-quoted HTML attribute value
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
