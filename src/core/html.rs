// src/core/html.rs
use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static CSS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"url\(([^)]+)\)").expect("static regex")
});

/// All descendant text, joined as-is, trimmed at the ends.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Each text node trimmed, then joined with no separator.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}

/// Attribute value, `None` when missing or blank.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).filter(|v| !v.trim().is_empty())
}

/// First `url(...)` target in an inline style, without surrounding quotes.
pub fn css_url(style: &str) -> Option<String> {
    let raw = CSS_URL.captures(style)?.get(1)?.as_str().trim();
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')))
        .unwrap_or(raw)
        .trim();
    if unquoted.is_empty() { None } else { Some(s!(unquoted)) }
}
