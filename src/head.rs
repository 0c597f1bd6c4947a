//! Per-render page head registry
//!
//! [`PageHead`] is the store a [`MetaManager`](crate::MetaManager) writes
//! into during one page render. The host layout reads it back afterwards,
//! either field by field or through the HTML rendering methods.

use crate::tag::{escape_attr, TagAttrs};
use std::collections::BTreeMap;
use std::fmt::Write;

/// One breadcrumb entry: a label with an optional target URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Breadcrumb {
    /// Text shown in the breadcrumb trail
    pub label: String,

    /// Link target; plain-text crumbs (the current page) have none
    pub url: Option<String>,
}

impl From<&str> for Breadcrumb {
    #[inline]
    fn from(label: &str) -> Self {
        Self {
            label: label.to_string(),
            url: None,
        }
    }
}

impl From<String> for Breadcrumb {
    #[inline]
    fn from(label: String) -> Self {
        Self { label, url: None }
    }
}

impl From<(&str, &str)> for Breadcrumb {
    #[inline]
    fn from((label, url): (&str, &str)) -> Self {
        Self {
            label: label.to_string(),
            url: Some(url.to_string()),
        }
    }
}

/// Tag collections, title and breadcrumbs for one page render.
///
/// Keyed tags live in maps sorted by key, so same-key registration replaces
/// the earlier entry and output order is deterministic without re-sorting.
/// Keyless tags accumulate in insertion order and render after the keyed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageHead {
    /// Page title, rendered into `<title>` by the host layout
    pub title: Option<String>,

    meta_keyed: BTreeMap<String, TagAttrs>,
    meta_plain: Vec<TagAttrs>,
    link_keyed: BTreeMap<String, TagAttrs>,
    link_plain: Vec<TagAttrs>,

    /// Breadcrumb trail, oldest first
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl PageHead {
    /// Create an empty head
    #[inline]
    #[must_use = "creates an empty page head"]
    pub const fn new() -> Self {
        Self {
            title: None,
            meta_keyed: BTreeMap::new(),
            meta_plain: Vec::new(),
            link_keyed: BTreeMap::new(),
            link_plain: Vec::new(),
            breadcrumbs: Vec::new(),
        }
    }

    /// Insert a meta tag; a key replaces any earlier entry under that key
    #[inline]
    pub fn insert_meta(&mut self, attrs: TagAttrs, key: Option<&str>) {
        match key {
            Some(key) => {
                self.meta_keyed.insert(key.to_string(), attrs);
            }
            None => self.meta_plain.push(attrs),
        }
    }

    /// Remove the meta tag registered under `key`; no-op when absent
    #[inline]
    pub fn remove_meta(&mut self, key: &str) {
        self.meta_keyed.remove(key);
    }

    /// Insert a link tag; a key replaces any earlier entry under that key
    #[inline]
    pub fn insert_link(&mut self, attrs: TagAttrs, key: Option<&str>) {
        match key {
            Some(key) => {
                self.link_keyed.insert(key.to_string(), attrs);
            }
            None => self.link_plain.push(attrs),
        }
    }

    /// Remove the link tag registered under `key`; no-op when absent
    #[inline]
    pub fn remove_link(&mut self, key: &str) {
        self.link_keyed.remove(key);
    }

    /// Look up a keyed meta tag
    #[inline]
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&TagAttrs> {
        self.meta_keyed.get(key)
    }

    /// Look up a keyed link tag
    #[inline]
    #[must_use]
    pub fn link(&self, key: &str) -> Option<&TagAttrs> {
        self.link_keyed.get(key)
    }

    /// All meta tags in output order: keyed (key-sorted) then keyless
    pub fn meta_tags(&self) -> impl Iterator<Item = &TagAttrs> {
        self.meta_keyed.values().chain(self.meta_plain.iter())
    }

    /// All link tags in output order: keyed (key-sorted) then keyless
    pub fn link_tags(&self) -> impl Iterator<Item = &TagAttrs> {
        self.link_keyed.values().chain(self.link_plain.iter())
    }

    /// Number of meta tags, keyed and keyless
    #[inline]
    #[must_use]
    pub fn meta_count(&self) -> usize {
        self.meta_keyed.len() + self.meta_plain.len()
    }

    /// Number of link tags, keyed and keyless
    #[inline]
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.link_keyed.len() + self.link_plain.len()
    }

    /// Render all meta tags, one `<meta>` element per line
    #[must_use]
    pub fn meta_html(&self) -> String {
        let mut html = String::new();
        for attrs in self.meta_tags() {
            let _ = writeln!(html, "{}", attrs.to_meta_html());
        }
        html
    }

    /// Render all link tags, one `<link>` element per line
    #[must_use]
    pub fn link_html(&self) -> String {
        let mut html = String::new();
        for attrs in self.link_tags() {
            let _ = writeln!(html, "{}", attrs.to_link_html());
        }
        html
    }

    /// Render the `<title>` element, empty string when no title is set
    #[must_use]
    pub fn title_html(&self) -> String {
        match &self.title {
            Some(title) => format!("<title>{}</title>", escape_attr(title)),
            None => String::new(),
        }
    }
}
