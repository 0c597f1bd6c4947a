//! Manager configuration

use crate::tag::TagAttrs;

/// Description length applied when no explicit limit is given
pub const DEFAULT_DESCRIPTION_LENGTH: usize = 150;

/// Configuration for a [`MetaManager`](crate::MetaManager).
///
/// All vocabularies are enabled and AJAX/partial suppression is on by default.
/// The struct deserializes with `serde`, so a host application can carry it
/// inside its own configuration file:
///
/// ```
/// use page_meta::MetaConfig;
///
/// let config: MetaConfig = serde_json::from_str(
///     r#"{ "twitter": false, "suppress_on_ajax": false }"#,
/// )?;
/// assert!(!config.twitter);
/// assert!(config.og);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    /// Emit OpenGraph (`og:*`) tags
    pub og: bool,

    /// Emit Twitter Card (`twitter:*`) tags
    pub twitter: bool,

    /// Emit Dublin Core (`DC.*`) tags
    pub dublin_core: bool,

    /// Emit the `keywords` meta tag
    pub keywords: bool,

    /// Drop registrations on AJAX requests
    pub suppress_on_ajax: bool,

    /// Drop registrations on partial-page requests
    pub suppress_on_partial: bool,

    /// Character limit used by `register_description`
    pub description_length: usize,

    /// Tags registered once at construction, in order.
    ///
    /// Entries whose key names a helper (`title`, `description`, `keywords`,
    /// case-insensitive) are routed through that helper using the entry's
    /// `content` attribute; everything else becomes a plain meta tag.
    pub default_tags: Vec<DefaultTag>,
}

impl Default for MetaConfig {
    #[inline]
    fn default() -> Self {
        Self {
            og: true,
            twitter: true,
            dublin_core: true,
            keywords: true,
            suppress_on_ajax: true,
            suppress_on_partial: true,
            description_length: DEFAULT_DESCRIPTION_LENGTH,
            default_tags: Vec::new(),
        }
    }
}

/// One entry of [`MetaConfig::default_tags`]
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefaultTag {
    /// Registration key; keyless entries accumulate instead of replacing
    #[serde(default)]
    pub key: Option<String>,

    /// Attributes of the tag, or just `content` for helper-routed entries
    #[serde(default)]
    pub attrs: TagAttrs,
}

impl DefaultTag {
    /// Keyed entry
    #[inline]
    #[must_use]
    pub fn keyed(key: &str, attrs: TagAttrs) -> Self {
        Self {
            key: Some(key.to_string()),
            attrs,
        }
    }

    /// Keyless entry
    #[inline]
    #[must_use]
    pub fn plain(attrs: TagAttrs) -> Self {
        Self { key: None, attrs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let config = MetaConfig::default();
        assert!(config.og && config.twitter && config.dublin_core && config.keywords);
        assert!(config.suppress_on_ajax && config.suppress_on_partial);
        assert_eq!(config.description_length, DEFAULT_DESCRIPTION_LENGTH);
        assert!(config.default_tags.is_empty());
    }
}
