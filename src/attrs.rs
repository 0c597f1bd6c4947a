//! Attribute configuration: which model attributes feed which meta tags
//!
//! A [`MetaAttributes`] value maps model kinds (or any model, via the
//! wildcard selector) to ordered sets of `logical tag name → extractor`
//! pairs. It is immutable once built; [`MetaAttributes::extend`] returns a
//! new value instead of mutating shared state, so one configuration can be
//! assembled at startup and shared across request handlers.
//!
//! ## Example
//!
//! ```
//! use page_meta::{AttributeSet, Extractor, MetaAttributes};
//!
//! let attributes = MetaAttributes::builder()
//!     .for_kind(
//!         "Blog",
//!         AttributeSet::new()
//!             .tag("title", Extractor::attr("headline"))
//!             .tag("description", Extractor::attr("summary")),
//!     )
//!     .for_any(AttributeSet::new().tag("title", Extractor::attr("name")))
//!     .build();
//! assert_eq!(attributes.len(), 2);
//! ```

use crate::manager::MetaManager;
use crate::source::MetaSource;
use crate::value::MetaValue;
use std::fmt;
use std::sync::Arc;

/// Zero-argument value supplier
pub type SupplierFn = dyn Fn() -> Option<MetaValue> + Send + Sync;

/// Model-and-manager callback; may register further tags before returning a value
pub type CallbackFn = dyn Fn(&dyn MetaSource, &mut MetaManager) -> Option<MetaValue> + Send + Sync;

/// How one logical tag obtains its value from a model.
///
/// Each variant is dispatched explicitly during
/// [`register_model`](crate::MetaManager::register_model); there is no
/// name-based reflection involved.
#[derive(Clone)]
pub enum Extractor {
    /// Fixed value, used as-is
    Constant(MetaValue),

    /// Zero-argument function evaluated at resolution time
    Supplier(Arc<SupplierFn>),

    /// Named lookup through [`MetaSource::attribute`]; an unanswered name is
    /// a hard error
    Attr(String),

    /// Callback receiving the model and the manager; may register additional
    /// tags, and its return value feeds the handler like any other
    Callback(Arc<CallbackFn>),
}

impl Extractor {
    /// Fixed value extractor
    #[inline]
    #[must_use]
    pub fn constant(value: impl Into<MetaValue>) -> Self {
        Self::Constant(value.into())
    }

    /// Zero-argument supplier extractor
    #[inline]
    #[must_use]
    pub fn supplier<F>(supplier: F) -> Self
    where
        F: Fn() -> Option<MetaValue> + Send + Sync + 'static,
    {
        Self::Supplier(Arc::new(supplier))
    }

    /// Named attribute extractor
    #[inline]
    #[must_use]
    pub fn attr(name: &str) -> Self {
        Self::Attr(name.to_string())
    }

    /// Callback extractor
    #[inline]
    #[must_use]
    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(&dyn MetaSource, &mut MetaManager) -> Option<MetaValue> + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(callback))
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Supplier(_) => f.write_str("Supplier(..)"),
            Self::Attr(name) => f.debug_tuple("Attr").field(name).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Which models an [`AttributeSet`] applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Applies to every model (the wildcard entry)
    Any,

    /// Applies to models whose [`MetaSource::kind`] equals this name
    Kind(String),
}

/// Ordered `logical tag name → extractor` pairs for one selector
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
    entries: Vec<(String, Extractor)>,
}

impl AttributeSet {
    /// Create an empty set
    #[inline]
    #[must_use = "creates an empty attribute set"]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a `logical tag name → extractor` pair
    #[inline]
    #[must_use]
    pub fn tag(mut self, logical: &str, extractor: Extractor) -> Self {
        self.entries.push((logical.to_string(), extractor));
        self
    }

    /// Iterate the pairs in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Extractor)> {
        self.entries
            .iter()
            .map(|(logical, extractor)| (logical.as_str(), extractor))
    }

    /// Whether the set holds no pairs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable attribute configuration: ordered `(selector, set)` entries.
///
/// Resolution scans the entries in insertion order. A kind-matching entry
/// stops the scan and wins outright; otherwise the last wildcard entry seen
/// applies; otherwise resolution falls back to the model's convention getters.
#[derive(Debug, Clone, Default)]
pub struct MetaAttributes {
    entries: Vec<(Selector, AttributeSet)>,
}

impl MetaAttributes {
    /// Empty configuration; every model falls back to its convention getters
    #[inline]
    #[must_use = "creates an empty attribute configuration"]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Start building a configuration
    #[inline]
    #[must_use = "creates a configuration builder"]
    pub const fn builder() -> MetaAttributesBuilder {
        MetaAttributesBuilder {
            attributes: Self::new(),
        }
    }

    /// New configuration with `other`'s entries appended after this one's.
    ///
    /// The replacement for in-place merging: both inputs stay usable.
    #[must_use = "returns the extended configuration without mutating self"]
    pub fn extend(&self, other: &Self) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().cloned());
        Self { entries }
    }

    /// Number of `(selector, set)` entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the attribute set applying to a model of `kind`.
    ///
    /// First entry whose selector names `kind` wins and ends the scan;
    /// wildcard entries overwrite each other as the scan passes them.
    #[must_use]
    pub(crate) fn resolve(&self, kind: &str) -> Option<&AttributeSet> {
        let mut wildcard = None;
        for (selector, set) in &self.entries {
            match selector {
                Selector::Any => wildcard = Some(set),
                Selector::Kind(name) if name == kind => return Some(set),
                Selector::Kind(_) => {}
            }
        }
        wildcard
    }
}

/// Builder for [`MetaAttributes`]
#[derive(Debug, Default)]
pub struct MetaAttributesBuilder {
    attributes: MetaAttributes,
}

impl MetaAttributesBuilder {
    /// Append a kind-specific entry
    #[inline]
    #[must_use]
    pub fn for_kind(mut self, kind: &str, set: AttributeSet) -> Self {
        self.attributes
            .entries
            .push((Selector::Kind(kind.to_string()), set));
        self
    }

    /// Append a wildcard entry applying to every model
    #[inline]
    #[must_use]
    pub fn for_any(mut self, set: AttributeSet) -> Self {
        self.attributes.entries.push((Selector::Any, set));
        self
    }

    /// Finish building
    #[inline]
    #[must_use]
    pub fn build(self) -> MetaAttributes {
        self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_match_stops_scan() {
        let attributes = MetaAttributes::builder()
            .for_kind("Blog", AttributeSet::new().tag("title", Extractor::attr("a")))
            .for_kind("Blog", AttributeSet::new().tag("title", Extractor::attr("b")))
            .build();
        let set = attributes.resolve("Blog").expect("Blog entry should match");
        let (_, extractor) = set.iter().next().expect("set has one pair");
        match extractor {
            Extractor::Attr(name) => assert_eq!(name, "a"),
            other => panic!("expected Attr extractor, got {other:?}"),
        }
    }

    #[test]
    fn test_last_wildcard_wins() {
        let attributes = MetaAttributes::builder()
            .for_any(AttributeSet::new().tag("title", Extractor::attr("a")))
            .for_any(AttributeSet::new().tag("title", Extractor::attr("b")))
            .build();
        let set = attributes.resolve("Page").expect("wildcard should match");
        let (_, extractor) = set.iter().next().expect("set has one pair");
        match extractor {
            Extractor::Attr(name) => assert_eq!(name, "b"),
            other => panic!("expected Attr extractor, got {other:?}"),
        }
    }

    #[test]
    fn test_no_match_resolves_to_none() {
        let attributes = MetaAttributes::builder()
            .for_kind("Blog", AttributeSet::new())
            .build();
        assert!(attributes.resolve("Product").is_none());
    }

    #[test]
    fn test_extend_appends_without_mutating() {
        let base = MetaAttributes::builder()
            .for_any(AttributeSet::new())
            .build();
        let extra = MetaAttributes::builder()
            .for_kind("Blog", AttributeSet::new())
            .build();
        let merged = base.extend(&extra);
        assert_eq!(base.len(), 1);
        assert_eq!(merged.len(), 2);
    }
}
