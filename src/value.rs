//! Values produced by attribute extractors and accepted by the keyword helper

/// A resolved meta value: a single string or an ordered list of strings.
///
/// Lists are joined with commas where a flat string is needed (keywords).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Single text value
    Text(String),

    /// Ordered list of text values
    List(Vec<String>),
}

impl MetaValue {
    /// Whether the value carries no usable content.
    ///
    /// An empty string, an empty list, and a list of empty strings all count
    /// as empty; resolvers skip empty values instead of emitting blank tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.iter().all(String::is_empty),
        }
    }

    /// Flatten to a single string, joining list items with commas
    #[must_use]
    pub fn join(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<String> for MetaValue {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for MetaValue {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for MetaValue {
    #[inline]
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for MetaValue {
    #[inline]
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for MetaValue {
    #[inline]
    fn from(items: &[&str]) -> Self {
        Self::List(items.iter().map(|item| (*item).to_string()).collect())
    }
}
