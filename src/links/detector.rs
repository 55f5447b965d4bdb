use regex::Regex;
use std::sync::LazyLock;

/// Scheme, optional userinfo, host, optional port, then a path tail.
///
/// Deliberately loose: `\S+` swallows trailing punctuation, and nothing here
/// validates the host. The fetcher rejects whatever does not parse.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:http|https)://(?:\w+:?\w*@)?\S+(?::[0-9]+)?(?:/|/[\w#!:.?+=&%@\-/])?")
        .expect("URL pattern is valid")
});

/// Detect HTTP/HTTPS URLs in text. Returns every match, in order of appearance.
pub fn detect_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
