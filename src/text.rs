//! Text shaping helpers for description tags

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapse every whitespace run to a single space and trim the ends
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Shorten a description to at most `length` characters at a word boundary.
///
/// Counts `char`s, not bytes, so multi-byte text is never split mid-codepoint.
/// When the first `length` characters contain a space, the text is cut at the
/// last such space and `"..."` is appended. When they do not (one long token),
/// falls back to [`truncate_words`] with `length` as the word limit.
#[must_use]
pub fn shorten(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let prefix: String = text.chars().take(length).collect();
    match prefix.rfind(' ') {
        Some(pos) => format!("{}...", &prefix[..pos]),
        None => truncate_words(text, length),
    }
}

/// Keep at most `limit` whitespace-separated words, appending `"..."` when cut.
///
/// Text with `limit` or fewer words is returned unchanged.
#[must_use]
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return text.to_string();
    }
    format!("{}...", words[..limit].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  a\t\tb \n c  "),
            "a b c"
        );
    }

    #[test]
    fn test_shorten_within_limit_is_unchanged() {
        assert_eq!(shorten("short text", 150), "short text");
    }

    #[test]
    fn test_shorten_cuts_at_word_boundary() {
        let text = "This is a test description that is definitely longer than thirty characters";
        let short = shorten(text, 30);
        assert!(short.chars().count() <= 30);
        assert!(short.ends_with("..."));
        assert_eq!(short, "This is a test description...");
    }

    #[test]
    fn test_shorten_counts_chars_not_bytes() {
        let text = "héllö wörld ünd ätt möre wörds thän thirty chärs für sürę";
        let short = shorten(text, 30);
        assert!(short.chars().count() <= 30);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn test_shorten_single_token_falls_back_to_words() {
        // One unbroken token longer than the limit: no space boundary in the
        // prefix, and a single word is under the word limit, so the text
        // passes through whole.
        let token = "a".repeat(64);
        assert_eq!(shorten(&token, 30), token);
    }

    #[test]
    fn test_truncate_words() {
        assert_eq!(truncate_words("one two three four", 2), "one two...");
        assert_eq!(truncate_words("one two", 5), "one two");
    }
}
