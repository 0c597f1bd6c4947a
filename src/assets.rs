//! Asset resolution seam for meta images
//!
//! `register_image` accepts either a site-local path (`/img/cover.png`) or a
//! full URL. An [`AssetResolver`] translates site-local paths to filesystem
//! paths (so pixel dimensions can be read) and to absolute URLs (so social
//! crawlers can fetch them). [`StaticAssets`] covers the common static-files
//! setup: one web root directory served under one base URL.

use std::path::{Path, PathBuf};
use url::Url;

/// Translates logical asset URLs to filesystem paths and absolute URLs.
///
/// Implement this as an adapter over the host framework's alias/URL helpers.
pub trait AssetResolver {
    /// Local filesystem path for a logical URL, when it has one.
    ///
    /// `None` means the URL is external (or otherwise not a local file) and
    /// the caller should use it verbatim.
    fn local_path(&self, url: &str) -> Option<PathBuf>;

    /// Absolute URL under which the asset is served
    fn absolute_url(&self, url: &str) -> String;
}

/// Resolver for a static-files directory served under a base URL
///
/// ```
/// use page_meta::{AssetResolver, StaticAssets};
///
/// let assets = StaticAssets::new("https://example.com/", "/var/www/static")?;
/// assert_eq!(
///     assets.absolute_url("/img/cover.png"),
///     "https://example.com/img/cover.png"
/// );
/// # Ok::<(), url::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssets {
    base_url: Url,
    web_root: PathBuf,
}

impl StaticAssets {
    /// Create a resolver from a base URL and the directory it serves
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` when `base_url` is not an absolute URL.
    pub fn new(base_url: &str, web_root: impl Into<PathBuf>) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            web_root: web_root.into(),
        })
    }
}

impl AssetResolver for StaticAssets {
    fn local_path(&self, url: &str) -> Option<PathBuf> {
        // Only root-relative references live under the web root; anything
        // with a scheme is external.
        let relative = url.strip_prefix('/')?;
        Some(self.web_root.join(relative))
    }

    fn absolute_url(&self, url: &str) -> String {
        match self.base_url.join(url) {
            Ok(joined) => joined.to_string(),
            Err(_) => url.to_string(),
        }
    }
}

/// Pixel width/height of an image file, `None` when unreadable.
///
/// Reads header metadata only, not the full pixel data.
#[must_use]
pub fn probe_dimensions(path: &Path) -> Option<(u32, u32)> {
    match image::image_dimensions(path) {
        Ok(dimensions) => Some(dimensions),
        Err(err) => {
            log::warn!("cannot read image dimensions from {}: {err}", path.display());
            None
        }
    }
}
