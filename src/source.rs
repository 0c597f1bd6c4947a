//! Capability trait for meta data models
//!
//! A "model" is whatever domain value the page is about: a blog post, a
//! product, a user profile. Instead of probing it by method name, the manager
//! asks through this trait. Every getter is optional; the default impls
//! answer `None` and the corresponding tag is simply not emitted.
//!
//! ## Example
//!
//! ```
//! use page_meta::{MetaSource, MetaValue};
//!
//! struct Blog {
//!     headline: String,
//!     summary: String,
//! }
//!
//! impl MetaSource for Blog {
//!     fn kind(&self) -> &str {
//!         "Blog"
//!     }
//!
//!     fn meta_title(&self) -> Option<String> {
//!         Some(self.headline.clone())
//!     }
//!
//!     fn meta_description(&self) -> Option<String> {
//!         Some(self.summary.clone())
//!     }
//!
//!     fn attribute(&self, name: &str) -> Option<MetaValue> {
//!         match name {
//!             "headline" => Some(self.headline.as_str().into()),
//!             "summary" => Some(self.summary.as_str().into()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use crate::value::MetaValue;

/// Optional meta data capabilities of a model object.
///
/// [`register_model`](crate::MetaManager::register_model) consumes this trait
/// two ways: the `meta_*` getters feed the convention-based fallback, and
/// [`attribute`](Self::attribute) answers the named lookups of an explicit
/// attribute configuration (an [`Extractor::Attr`](crate::Extractor::Attr)
/// entry). A model that should match a kind-specific configuration entry
/// advertises that name through [`kind`](Self::kind).
pub trait MetaSource {
    /// Type name matched against [`Selector::Kind`](crate::Selector::Kind)
    /// entries of the attribute configuration
    fn kind(&self) -> &str {
        ""
    }

    /// Named attribute lookup for configured extractors.
    ///
    /// `None` under an explicit configuration is a misconfiguration and makes
    /// `register_model` fail; implement this as a `match` over the attribute
    /// names the configuration may name.
    fn attribute(&self, name: &str) -> Option<MetaValue> {
        let _ = name;
        None
    }

    /// Title used for the page and its OG/Twitter/DC mirrors
    fn meta_title(&self) -> Option<String> {
        None
    }

    /// Description, shortened and mirrored by the manager
    fn meta_description(&self) -> Option<String> {
        None
    }

    /// Keywords for the `keywords` meta tag
    fn meta_keywords(&self) -> Option<MetaValue> {
        None
    }

    /// Image URL (or framework alias) for the OG/Twitter image tags
    fn meta_image(&self) -> Option<String> {
        None
    }

    /// Alt text for the meta image; absent alt falls back to the page title
    fn meta_image_alt(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl MetaSource for Bare {}

    #[test]
    fn test_defaults_answer_nothing() {
        let bare = Bare;
        assert_eq!(bare.kind(), "");
        assert!(bare.attribute("anything").is_none());
        assert!(bare.meta_title().is_none());
        assert!(bare.meta_description().is_none());
        assert!(bare.meta_keywords().is_none());
        assert!(bare.meta_image().is_none());
        assert!(bare.meta_image_alt().is_none());
    }
}
