//! Request introspection seam
//!
//! Meta tags only matter on full page loads. When a framework re-renders a
//! fragment (AJAX endpoint, pjax-style partial refresh) the `<head>` is not
//! rebuilt, so tag registration can be skipped entirely. The manager asks an
//! optional [`RequestProbe`] about the current request and drops registrations
//! accordingly (see [`MetaConfig`](crate::MetaConfig) for the toggles).

/// Answers whether the current request is an AJAX or partial-page request.
///
/// Implement this once per host framework, typically as a thin adapter over
/// its request extractor. [`RequestFlags`] is a ready-made value
/// implementation for frameworks that expose the two booleans directly.
pub trait RequestProbe {
    /// Whether the current request was made via `XMLHttpRequest`/`fetch`
    fn is_ajax(&self) -> bool;

    /// Whether the current request is a partial-page (pjax-style) refresh
    fn is_partial(&self) -> bool;
}

/// Plain value implementation of [`RequestProbe`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RequestFlags {
    /// The request was made via `XMLHttpRequest`/`fetch`
    pub ajax: bool,

    /// The request is a partial-page refresh
    pub partial: bool,
}

impl RequestFlags {
    /// A full page load: neither AJAX nor partial
    #[inline]
    #[must_use = "creates request flags"]
    pub const fn full_page() -> Self {
        Self {
            ajax: false,
            partial: false,
        }
    }
}

impl RequestProbe for RequestFlags {
    #[inline]
    fn is_ajax(&self) -> bool {
        self.ajax
    }

    #[inline]
    fn is_partial(&self) -> bool {
        self.partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_page_flags() {
        let flags = RequestFlags::full_page();
        assert!(!flags.is_ajax());
        assert!(!flags.is_partial());
    }
}
