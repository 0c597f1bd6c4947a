//! # page-meta
//!
//! SEO meta, link and social tag registry for server-rendered HTML pages.
//!
//! This crate fills a per-render [`PageHead`] with `<meta>`/`<link>` tags,
//! the page title and a breadcrumb trail, mirroring titles and descriptions
//! into the OpenGraph, Twitter Card and Dublin Core vocabularies. Values come
//! from explicit calls, from a per-model attribute configuration, or from the
//! [`MetaSource`] capability trait a model implements.
//!
//! ## Vocabularies
//!
//! | Vocabulary | Prefix | HTML attribute |
//! |------------|--------|----------------|
//! | OpenGraph | `og:` | `property` |
//! | Twitter Card | `twitter:` | `name` |
//! | Dublin Core | `DC.` | `name` |
//!
//! ## Quick Start
//!
//! ```
//! use page_meta::{MetaConfig, MetaManager};
//!
//! let mut manager = MetaManager::builder(MetaConfig::default()).build();
//! manager.register_title(Some("Getting Started"), true);
//! manager.register_description("Everything you need to know to get going.");
//! manager.register_keywords(vec!["guide", "intro"]);
//!
//! let head = manager.into_head();
//! assert!(head.meta_html().contains(r#"name="keywords""#));
//! assert_eq!(head.breadcrumbs.len(), 1);
//! ```
//!
//! ## Registering a model
//!
//! ```
//! use page_meta::{MetaManager, MetaSource};
//!
//! struct Article {
//!     title: String,
//! }
//!
//! impl MetaSource for Article {
//!     fn meta_title(&self) -> Option<String> {
//!         Some(self.title.clone())
//!     }
//! }
//!
//! let mut manager = MetaManager::new();
//! let article = Article { title: "Hello".to_string() };
//! manager.register_model(&article)?;
//! assert_eq!(manager.head().title.as_deref(), Some("Hello"));
//! # Ok::<(), page_meta::MetaError>(())
//! ```
//!
//! Tag collections live for one page render. Keyed registrations replace
//! earlier tags under the same key, keyless ones accumulate, and the host
//! layout reads the result back through [`MetaManager::into_head`] or the
//! `PageHead` HTML rendering methods.

pub mod assets;
pub mod attrs;
pub mod config;
pub mod error;
pub mod head;
pub mod manager;
pub mod request;
pub mod source;
pub mod tag;
pub mod text;
pub mod value;

// Re-export main types
pub use assets::{probe_dimensions, AssetResolver, StaticAssets};
pub use attrs::{AttributeSet, Extractor, MetaAttributes, MetaAttributesBuilder, Selector};
pub use config::{DefaultTag, MetaConfig, DEFAULT_DESCRIPTION_LENGTH};
pub use error::{MetaError, Result};
pub use head::{Breadcrumb, PageHead};
pub use manager::{MetaManager, MetaManagerBuilder};
pub use request::{RequestFlags, RequestProbe};
pub use source::MetaSource;
pub use tag::{escape_attr, TagAttrs};
pub use value::MetaValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut manager = MetaManager::new();
        manager.register_title(Some("Test"), false);
        assert_eq!(manager.head().meta_count(), 3);
    }
}
