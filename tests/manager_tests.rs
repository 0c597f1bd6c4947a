//! Integration tests for tag registration, helpers and rendering
//!
//! These exercise the manager through its public surface the way a host
//! layout would: register during the render, read the head back afterwards.

use page_meta::{
    DefaultTag, MetaConfig, MetaManager, RequestFlags, StaticAssets, TagAttrs,
};

/// Registering under the same key twice keeps only the later tag
#[test]
fn test_same_key_registration_replaces() {
    let mut manager = MetaManager::new();
    manager.register_meta_tag(TagAttrs::named("robots", "index"), Some("robots"));
    manager.register_meta_tag(TagAttrs::named("robots", "noindex"), Some("robots"));

    assert_eq!(manager.head().meta_count(), 1);
    assert_eq!(
        manager.head().meta("robots").and_then(|a| a.get("content")),
        Some("noindex")
    );
}

/// Keyless registrations accumulate instead of replacing
#[test]
fn test_keyless_registration_accumulates() {
    let mut manager = MetaManager::new();
    manager.register_meta_tag(TagAttrs::named("author", "A"), None);
    manager.register_meta_tag(TagAttrs::named("author", "B"), None);

    assert_eq!(manager.head().meta_count(), 2);
}

/// Bulk registration mixes keyed and keyless entries
#[test]
fn test_bulk_registration() {
    let mut manager = MetaManager::new();
    manager.register_meta_tags([
        (Some("robots"), TagAttrs::named("robots", "index")),
        (None, TagAttrs::named("generator", "page-meta")),
    ]);

    assert_eq!(manager.head().meta_count(), 2);
    assert!(manager.head().meta("robots").is_some());
}

/// The documented truncation example: word boundary within 30 chars plus "..."
#[test]
fn test_description_truncates_at_word_boundary() {
    let mut manager = MetaManager::new();
    manager.register_description_with_limit(
        "This   is   a   test    description that is definitely longer than thirty characters",
        30,
    );

    let content = manager
        .head()
        .meta("description")
        .and_then(|a| a.get("content"))
        .expect("description tag should be registered");
    assert_eq!(content, "This is a test description...");
    assert!(content.chars().count() <= 30);
}

/// The shortened description mirrors into all four vocabularies
#[test]
fn test_description_mirrors_to_social_tags() {
    let mut manager = MetaManager::new();
    manager.register_description("A short description.");

    let head = manager.head();
    for key in ["description", "og:description", "twitter:description", "DC.description"] {
        assert_eq!(
            head.meta(key).and_then(|a| a.get("content")),
            Some("A short description."),
            "missing mirror under key {key}"
        );
    }
}

/// Clearing via None removes a previously registered og tag
#[test]
fn test_og_none_clears_previous_tag() {
    let mut manager = MetaManager::new();
    manager.register_og("title", Some("First"));
    assert!(manager.head().meta("og:title").is_some());

    manager.register_og("title", None);
    assert!(manager.head().meta("og:title").is_none());
}

/// og:locale:alternate never deduplicates; other og tags do
#[test]
fn test_og_locale_alternate_accumulates() {
    let mut manager = MetaManager::new();
    manager.register_ogs([("locale:alternate", Some("fr_FR"))]);
    manager.register_ogs([("locale:alternate", Some("de_DE"))]);
    manager.register_ogs([("title", Some("A"))]);
    manager.register_ogs([("title", Some("B"))]);

    let head = manager.head();
    let alternates = head
        .meta_tags()
        .filter(|attrs| attrs.get("property") == Some("og:locale:alternate"))
        .count();
    assert_eq!(alternates, 2);
    assert_eq!(
        head.meta("og:title").and_then(|a| a.get("content")),
        Some("B")
    );
}

/// String keywords and list keywords produce the same tag content
#[test]
fn test_keywords_list_and_string_agree() {
    let mut from_list = MetaManager::new();
    from_list.register_keywords(vec!["a", "b", "c"]);

    let mut from_string = MetaManager::new();
    from_string.register_keywords("a,b,c");

    let list_content = from_list
        .head()
        .meta("keywords")
        .and_then(|a| a.get("content"))
        .expect("keywords registered from list");
    let string_content = from_string
        .head()
        .meta("keywords")
        .and_then(|a| a.get("content"))
        .expect("keywords registered from string");
    assert_eq!(list_content, "a,b,c");
    assert_eq!(list_content, string_content);
}

/// AJAX requests drop registrations but clears still apply
#[test]
fn test_ajax_suppression() {
    let mut manager = MetaManager::builder(MetaConfig::default())
        .request(RequestFlags {
            ajax: true,
            partial: false,
        })
        .build();

    manager.register_og("title", Some("Hidden"));
    assert!(manager.head().meta("og:title").is_none());

    // The title field itself is not a tag registration and still updates.
    manager.register_title(Some("Still set"), false);
    assert_eq!(manager.head().title.as_deref(), Some("Still set"));
    assert_eq!(manager.head().meta_count(), 0);
}

/// Suppression toggles are independent per request type
#[test]
fn test_partial_suppression_toggle() {
    let config = MetaConfig {
        suppress_on_partial: false,
        ..MetaConfig::default()
    };
    let mut manager = MetaManager::builder(config)
        .request(RequestFlags {
            ajax: false,
            partial: true,
        })
        .build();

    manager.register_og("title", Some("Kept"));
    assert!(manager.head().meta("og:title").is_some());
}

/// Default tags route helper-named keys through the helpers,
/// everything else becomes a plain meta tag with the key as name
#[test]
fn test_default_tags_at_construction() {
    let config = MetaConfig {
        default_tags: vec![
            DefaultTag::keyed("title", TagAttrs::new().with("content", "My Site")),
            DefaultTag::keyed("DC.rights", TagAttrs::new().with("content", "CC-BY")),
        ],
        ..MetaConfig::default()
    };
    let manager = MetaManager::builder(config).build();

    let head = manager.head();
    assert_eq!(head.title.as_deref(), Some("My Site"));
    assert_eq!(
        head.meta("og:title").and_then(|a| a.get("content")),
        Some("My Site")
    );
    let rights = head
        .meta_tags()
        .find(|attrs| attrs.get("name") == Some("DC.rights"))
        .expect("plain default tag should be registered");
    assert_eq!(rights.get("content"), Some("CC-BY"));
}

/// Link tags register, replace by key and clear
#[test]
fn test_link_tags() {
    let mut manager = MetaManager::new();
    manager.register_link_tag(
        TagAttrs::new()
            .with("rel", "canonical")
            .with("href", "https://example.com/a"),
        Some("canonical"),
    );
    manager.register_link_tag(
        TagAttrs::new()
            .with("rel", "canonical")
            .with("href", "https://example.com/b"),
        Some("canonical"),
    );
    assert_eq!(manager.head().link_count(), 1);
    assert_eq!(
        manager.head().link("canonical").and_then(|a| a.get("href")),
        Some("https://example.com/b")
    );

    manager.clear_link_tag("canonical");
    assert_eq!(manager.head().link_count(), 0);
}

/// A local image file contributes its pixel dimensions and absolute URL
#[test]
fn test_register_image_probes_local_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let img_dir = dir.path().join("img");
    std::fs::create_dir(&img_dir).expect("create img dir");
    image::RgbaImage::new(6, 4)
        .save(img_dir.join("cover.png"))
        .expect("write test image");

    let assets =
        StaticAssets::new("https://example.com/", dir.path()).expect("base URL parses");
    let mut manager = MetaManager::builder(MetaConfig::default())
        .assets(assets)
        .build();

    manager.register_image("/img/cover.png", Some("Cover art"));

    let head = manager.head();
    assert_eq!(
        head.meta("og:image").and_then(|a| a.get("content")),
        Some("https://example.com/img/cover.png")
    );
    assert_eq!(
        head.meta("og:image:width").and_then(|a| a.get("content")),
        Some("6")
    );
    assert_eq!(
        head.meta("og:image:height").and_then(|a| a.get("content")),
        Some("4")
    );
    assert_eq!(
        head.meta("twitter:image:alt").and_then(|a| a.get("content")),
        Some("Cover art")
    );
}

/// A URL with no local file behind it passes through with unknown dimensions
#[test]
fn test_register_image_falls_back_to_opaque_url() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let assets =
        StaticAssets::new("https://example.com/", dir.path()).expect("base URL parses");
    let mut manager = MetaManager::builder(MetaConfig::default())
        .assets(assets)
        .build();

    manager.register_image("https://cdn.example.com/remote.png", Some("Remote"));

    let head = manager.head();
    assert_eq!(
        head.meta("og:image").and_then(|a| a.get("content")),
        Some("https://cdn.example.com/remote.png")
    );
    assert!(head.meta("og:image:width").is_none());
    assert!(head.meta("og:image:height").is_none());
}

/// Breadcrumbs accept plain labels and (label, url) pairs
#[test]
fn test_breadcrumbs() {
    let mut manager = MetaManager::new();
    manager.add_breadcrumb(("Blog", "/blog"));
    manager.register_title(Some("A post"), true);

    let head = manager.head();
    assert_eq!(head.breadcrumbs.len(), 2);
    assert_eq!(head.breadcrumbs[0].label, "Blog");
    assert_eq!(head.breadcrumbs[0].url.as_deref(), Some("/blog"));
    assert_eq!(head.breadcrumbs[1].label, "A post");
    assert!(head.breadcrumbs[1].url.is_none());
}

/// Rendered HTML is escaped and deterministic
#[test]
fn test_rendered_html_is_escaped() {
    let mut manager = MetaManager::new();
    manager.register_title(Some(r#"Tom & "Jerry""#), false);

    let head = manager.into_head();
    assert_eq!(
        head.title_html(),
        "<title>Tom &amp; &quot;Jerry&quot;</title>"
    );
    assert!(head
        .meta_html()
        .contains(r#"content="Tom &amp; &quot;Jerry&quot;""#));
}

/// MetaConfig round-trips through serde
#[test]
fn test_config_serde_round_trip() {
    let config = MetaConfig {
        twitter: false,
        description_length: 100,
        default_tags: vec![DefaultTag::plain(TagAttrs::named("robots", "noindex"))],
        ..MetaConfig::default()
    };

    let json = serde_json::to_string(&config).expect("config serializes");
    let back: MetaConfig = serde_json::from_str(&json).expect("config deserializes");
    assert_eq!(config, back);
}
