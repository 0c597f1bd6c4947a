//! The meta tag manager facade
//!
//! One [`MetaManager`] lives for one page render. It owns the [`PageHead`]
//! being filled, applies the configured default tags at construction, guards
//! every registration against AJAX/partial suppression, and resolves models
//! through the attribute configuration or their convention getters.

use crate::assets::{probe_dimensions, AssetResolver};
use crate::attrs::{AttributeSet, Extractor, MetaAttributes};
use crate::config::MetaConfig;
use crate::error::{MetaError, Result};
use crate::head::{Breadcrumb, PageHead};
use crate::request::RequestProbe;
use crate::source::MetaSource;
use crate::tag::TagAttrs;
use crate::text;
use crate::value::MetaValue;
use std::fmt;

/// Registers meta, link and social tags for one page render.
///
/// ## Example
///
/// ```
/// use page_meta::{MetaConfig, MetaManager};
///
/// let mut manager = MetaManager::builder(MetaConfig::default()).build();
/// manager.register_title(Some("Blog"), true);
/// manager.register_description("A place for long-form writing about Rust.");
///
/// let head = manager.into_head();
/// assert_eq!(head.title.as_deref(), Some("Blog"));
/// assert!(head.meta_html().contains(r#"property="og:title""#));
/// ```
pub struct MetaManager {
    config: MetaConfig,
    attributes: MetaAttributes,
    head: PageHead,
    request: Option<Box<dyn RequestProbe>>,
    assets: Option<Box<dyn AssetResolver>>,
    last_title: Option<String>,
}

impl MetaManager {
    /// Manager with default configuration and no collaborators
    #[inline]
    #[must_use = "creates a manager"]
    pub fn new() -> Self {
        Self::builder(MetaConfig::default()).build()
    }

    /// Start building a manager; `build` applies the configured default tags
    #[inline]
    #[must_use = "creates a manager builder"]
    pub fn builder(config: MetaConfig) -> MetaManagerBuilder {
        MetaManagerBuilder {
            config,
            attributes: MetaAttributes::new(),
            request: None,
            assets: None,
        }
    }

    /// The configuration this manager was built with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &MetaConfig {
        &self.config
    }

    /// The head being filled by this render
    #[inline]
    #[must_use]
    pub fn head(&self) -> &PageHead {
        &self.head
    }

    /// Consume the manager, handing the filled head to the host layout
    #[inline]
    #[must_use = "returns the filled page head"]
    pub fn into_head(self) -> PageHead {
        self.head
    }

    /// Whether registrations are currently dropped (AJAX/partial request)
    fn suppressed(&self) -> bool {
        let Some(request) = &self.request else {
            return false;
        };
        (self.config.suppress_on_ajax && request.is_ajax())
            || (self.config.suppress_on_partial && request.is_partial())
    }

    /// Register a single meta tag, keyed (replacing) or keyless (accumulating)
    pub fn register_meta_tag(&mut self, attrs: TagAttrs, key: Option<&str>) {
        if self.suppressed() {
            log::debug!("meta tag registration suppressed on partial request");
            return;
        }
        self.head.insert_meta(attrs, key);
    }

    /// Remove the meta tag registered under `key`; no-op when absent.
    ///
    /// Never suppressed: a partial request may still retract tags.
    #[inline]
    pub fn clear_meta_tag(&mut self, key: &str) {
        self.head.remove_meta(key);
    }

    /// Register several meta tags; `None` keys register keyless
    pub fn register_meta_tags<'a, I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = (Option<&'a str>, TagAttrs)>,
    {
        for (key, attrs) in tags {
            self.register_meta_tag(attrs, key);
        }
    }

    /// Register a single link tag, keyed (replacing) or keyless (accumulating)
    pub fn register_link_tag(&mut self, attrs: TagAttrs, key: Option<&str>) {
        if self.suppressed() {
            log::debug!("link tag registration suppressed on partial request");
            return;
        }
        self.head.insert_link(attrs, key);
    }

    /// Remove the link tag registered under `key`; no-op when absent
    #[inline]
    pub fn clear_link_tag(&mut self, key: &str) {
        self.head.remove_link(key);
    }

    /// Register several link tags; `None` keys register keyless
    pub fn register_link_tags<'a, I>(&mut self, links: I)
    where
        I: IntoIterator<Item = (Option<&'a str>, TagAttrs)>,
    {
        for (key, attrs) in links {
            self.register_link_tag(attrs, key);
        }
    }

    /// Set the page title and mirror it to `og:title`, `twitter:title` and
    /// `DC.title`; `None` clears all three mirrors.
    ///
    /// With `add_breadcrumb`, the title is also appended to the breadcrumb
    /// trail. The title is remembered as the fallback alt text for meta
    /// images registered later.
    pub fn register_title(&mut self, title: Option<&str>, add_breadcrumb: bool) {
        // An empty title clears like a missing one.
        let title = title.filter(|title| !title.is_empty());
        self.head.title = title.map(str::to_string);
        self.register_og("title", title);
        self.register_twitter("title", title);
        self.register_dc("title", title);

        if add_breadcrumb {
            if let Some(title) = title {
                self.add_breadcrumb(title);
            }
        }

        self.last_title = title.map(str::to_string);
    }

    /// Register the description with the configured length limit
    #[inline]
    pub fn register_description(&mut self, description: &str) {
        self.register_description_with_limit(description, self.config.description_length);
    }

    /// Register the description, shortened to at most `length` characters.
    ///
    /// Whitespace runs collapse to single spaces; over-long text is cut at
    /// the last word boundary inside the limit with `"..."` appended. Empty
    /// input registers nothing. The result mirrors to the plain
    /// `description` tag and the OG/Twitter/DC equivalents.
    pub fn register_description_with_limit(&mut self, description: &str, length: usize) {
        let description = text::collapse_whitespace(description);
        if description.is_empty() {
            return;
        }
        let description = text::shorten(&description, length);

        self.register_meta_tag(
            TagAttrs::named("description", &description),
            Some("description"),
        );
        self.register_og("description", Some(&description));
        self.register_twitter("description", Some(&description));
        self.register_dc("description", Some(&description));
    }

    /// Register the `keywords` meta tag; lists join with commas.
    ///
    /// No-op when the keywords flag is off or the value is empty.
    pub fn register_keywords(&mut self, keywords: impl Into<MetaValue>) {
        if !self.config.keywords {
            return;
        }
        let keywords = keywords.into();
        if keywords.is_empty() {
            return;
        }
        self.register_meta_tag(TagAttrs::named("keywords", &keywords.join()), Some("keywords"));
    }

    /// Register one OpenGraph tag (`og:` prefix, `property` attribute).
    ///
    /// `None` content clears the tag instead of setting an empty one.
    /// `og:locale:alternate` registers keyless, so a page can carry one tag
    /// per alternate locale; every other property is keyed and deduplicated.
    pub fn register_og(&mut self, property: &str, content: Option<&str>) {
        if !self.config.og {
            return;
        }
        let key = format!("og:{property}");
        match content {
            None => self.clear_meta_tag(&key),
            Some(content) => {
                let attrs = TagAttrs::property(&key, content);
                if key == "og:locale:alternate" {
                    self.register_meta_tag(attrs, None);
                } else {
                    self.register_meta_tag(attrs, Some(&key));
                }
            }
        }
    }

    /// Register several OpenGraph tags
    pub fn register_ogs<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        for (property, content) in entries {
            self.register_og(property, content);
        }
    }

    /// Register one Twitter Card tag (`twitter:` prefix, `name` attribute);
    /// `None` content clears the tag
    pub fn register_twitter(&mut self, name: &str, content: Option<&str>) {
        if !self.config.twitter {
            return;
        }
        let key = format!("twitter:{name}");
        match content {
            None => self.clear_meta_tag(&key),
            Some(content) => self.register_meta_tag(TagAttrs::named(&key, content), Some(&key)),
        }
    }

    /// Register several Twitter Card tags
    pub fn register_twitters<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        for (name, content) in entries {
            self.register_twitter(name, content);
        }
    }

    /// Register one Dublin Core tag (`DC.` prefix, `name` attribute);
    /// `None` content clears the tag
    pub fn register_dc(&mut self, name: &str, content: Option<&str>) {
        if !self.config.dublin_core {
            return;
        }
        let key = format!("DC.{name}");
        match content {
            None => self.clear_meta_tag(&key),
            Some(content) => self.register_meta_tag(TagAttrs::named(&key, content), Some(&key)),
        }
    }

    /// Register several Dublin Core tags
    pub fn register_dcs<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        for (name, content) in entries {
            self.register_dc(name, content);
        }
    }

    /// Register the OG/Twitter image tags for `url`, probing local files.
    ///
    /// When the attached [`AssetResolver`] maps `url` to an existing file,
    /// the tags carry the resolver's absolute URL and the file's pixel
    /// dimensions. Otherwise `url` is used verbatim with unknown dimensions;
    /// a file that exists but cannot be read as an image degrades the same
    /// way (logged at `warn`).
    pub fn register_image(&mut self, url: &str, alt: Option<&str>) {
        let resolved = self.assets.as_ref().and_then(|assets| {
            let path = assets.local_path(url)?;
            if !path.is_file() {
                return None;
            }
            let dimensions = probe_dimensions(&path)?;
            Some((assets.absolute_url(url), dimensions))
        });

        match resolved {
            Some((absolute, (width, height))) => {
                self.register_image_url(&absolute, alt, Some(width), Some(height));
            }
            None => self.register_image_url(url, alt, None, None),
        }
    }

    /// Register the OG/Twitter image tags with caller-supplied dimensions.
    ///
    /// Unknown dimensions clear the `og:image:width`/`og:image:height` slots
    /// instead of emitting empty tags; an absent alt clears the alt slots.
    pub fn register_image_url(
        &mut self,
        url: &str,
        alt: Option<&str>,
        width: Option<u32>,
        height: Option<u32>,
    ) {
        let width = width.map(|width| width.to_string());
        let height = height.map(|height| height.to_string());

        self.register_ogs([
            ("image", Some(url)),
            ("image:secure_url", Some(url)),
            ("image:width", width.as_deref()),
            ("image:height", height.as_deref()),
            ("image:alt", alt),
        ]);

        self.register_twitters([("image", Some(url)), ("image:alt", alt)]);
    }

    /// Append one breadcrumb entry
    #[inline]
    pub fn add_breadcrumb(&mut self, crumb: impl Into<Breadcrumb>) {
        self.head.breadcrumbs.push(crumb.into());
    }

    /// Register every tag a model provides.
    ///
    /// A kind-specific attribute configuration entry wins over the wildcard
    /// entry; whichever applies is resolved extractor by extractor. Without
    /// an applicable entry the model's convention getters are used instead,
    /// skipping whatever the model does not provide.
    ///
    /// # Errors
    ///
    /// Under an explicit configuration, [`MetaError::UnknownAttribute`] when
    /// the model does not answer a configured attribute name, and
    /// [`MetaError::UnknownTag`] when a configured logical tag has no
    /// handler. The convention path never fails.
    pub fn register_model(&mut self, model: &dyn MetaSource) -> Result<()> {
        let set = self.attributes.resolve(model.kind()).cloned();
        match set {
            Some(set) if !set.is_empty() => self.resolve_set(model, &set),
            _ => {
                self.register_conventions(model);
                Ok(())
            }
        }
    }

    /// Resolve one attribute set against a model, dispatching each value
    fn resolve_set(&mut self, model: &dyn MetaSource, set: &AttributeSet) -> Result<()> {
        for (logical, extractor) in set.iter() {
            let value = match extractor {
                Extractor::Constant(value) => Some(value.clone()),
                Extractor::Supplier(supplier) => supplier(),
                Extractor::Attr(name) => {
                    Some(model.attribute(name).ok_or_else(|| {
                        MetaError::UnknownAttribute {
                            attribute: name.clone(),
                            kind: model.kind().to_string(),
                        }
                    })?)
                }
                Extractor::Callback(callback) => callback(model, self),
            };

            let Some(value) = value else { continue };
            if value.is_empty() {
                continue;
            }
            self.dispatch(logical, &value)?;
        }
        Ok(())
    }

    /// Route a resolved value to the handler named by the logical tag
    fn dispatch(&mut self, logical: &str, value: &MetaValue) -> Result<()> {
        match logical.to_ascii_lowercase().as_str() {
            "title" => self.register_title(Some(&value.join()), true),
            "description" => self.register_description(&value.join()),
            "keywords" => self.register_keywords(value.clone()),
            "image" | "imageurl" => {
                let alt = self.last_title.clone();
                self.register_image(&value.join(), alt.as_deref());
            }
            _ => {
                return Err(MetaError::UnknownTag {
                    name: logical.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Convention fallback: use whatever capability getters the model answers
    fn register_conventions(&mut self, model: &dyn MetaSource) {
        if let Some(title) = model.meta_title() {
            self.register_title(Some(&title), true);
        }
        if let Some(description) = model.meta_description() {
            self.register_description(&description);
        }
        if let Some(keywords) = model.meta_keywords() {
            self.register_keywords(keywords);
        }
        if let Some(image) = model.meta_image() {
            if !image.is_empty() {
                let alt = model.meta_image_alt().or_else(|| self.last_title.clone());
                self.register_image(&image, alt.as_deref());
            }
        }
    }

    /// Apply `MetaConfig::default_tags`, routing helper-named entries
    fn apply_default_tags(&mut self) {
        let defaults = std::mem::take(&mut self.config.default_tags);
        for entry in &defaults {
            let helper = entry.key.as_deref().map(str::to_ascii_lowercase);
            match helper.as_deref() {
                Some("title") => {
                    if let Some(content) = entry.attrs.get("content") {
                        let content = content.to_string();
                        self.register_title(Some(&content), true);
                    }
                }
                Some("description") => {
                    if let Some(content) = entry.attrs.get("content") {
                        let content = content.to_string();
                        self.register_description(&content);
                    }
                }
                Some("keywords") => {
                    if let Some(content) = entry.attrs.get("content") {
                        let content = content.to_string();
                        self.register_keywords(content);
                    }
                }
                _ => {
                    let mut attrs = entry.attrs.clone();
                    if let Some(key) = &entry.key {
                        if !attrs.contains("name") {
                            attrs.set("name", key);
                        }
                    }
                    self.register_meta_tag(attrs, None);
                }
            }
        }
        self.config.default_tags = defaults;
    }
}

impl Default for MetaManager {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MetaManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaManager")
            .field("config", &self.config)
            .field("attributes", &self.attributes)
            .field("head", &self.head)
            .field("request", &self.request.as_ref().map(|_| ".."))
            .field("assets", &self.assets.as_ref().map(|_| ".."))
            .field("last_title", &self.last_title)
            .finish()
    }
}

/// Builder for [`MetaManager`]
pub struct MetaManagerBuilder {
    config: MetaConfig,
    attributes: MetaAttributes,
    request: Option<Box<dyn RequestProbe>>,
    assets: Option<Box<dyn AssetResolver>>,
}

impl MetaManagerBuilder {
    /// Attach the request probe used for AJAX/partial suppression
    #[inline]
    #[must_use]
    pub fn request(mut self, probe: impl RequestProbe + 'static) -> Self {
        self.request = Some(Box::new(probe));
        self
    }

    /// Attach the asset resolver used by `register_image`
    #[inline]
    #[must_use]
    pub fn assets(mut self, resolver: impl AssetResolver + 'static) -> Self {
        self.assets = Some(Box::new(resolver));
        self
    }

    /// Attach the attribute configuration used by `register_model`
    #[inline]
    #[must_use]
    pub fn attributes(mut self, attributes: MetaAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Build the manager and apply the configured default tags.
    ///
    /// Runs after the request probe is attached, so default tags honor
    /// suppression exactly like later registrations.
    #[must_use = "builds the manager"]
    pub fn build(self) -> MetaManager {
        let mut manager = MetaManager {
            config: self.config,
            attributes: self.attributes,
            head: PageHead::new(),
            request: self.request,
            assets: self.assets,
            last_title: None,
        };
        manager.apply_default_tags();
        manager
    }
}

impl fmt::Debug for MetaManagerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaManagerBuilder")
            .field("config", &self.config)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}
