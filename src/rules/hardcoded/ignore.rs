//! Ignore filter for candidate literals.
//!
//! The filter prefers precision over recall: anything that looks like a token
//! (URL, identifier, class name, tag name, ...) rather than prose is skipped.

use std::sync::LazyLock;

use regex::Regex;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 200;

/// Named exclusion patterns, checked in order against the trimmed literal.
pub const IGNORE_PATTERNS: &[(&str, &str)] = &[
    ("url", r"^https?://"),
    ("absolute-path", r"^/"),
    ("hex-color", r"^#[0-9a-fA-F]"),
    ("numeric", r"^[0-9]+(\.[0-9]+)?$"),
    ("camel-case-identifier", r"^[a-z][a-zA-Z]+$"),
    (
        "html-tag",
        r"(?i)^(div|span|p|h[1-6]|button|input|form|section|main|header|footer|nav|img|a|ul|li)$",
    ),
    (
        "dom-attribute",
        r"^(className|onClick|onChange|onSubmit|href|src|alt|id|key|ref|type|name|value|style|data-)$",
    ),
    ("http-verb", r"(?i)^(get|post|put|delete|patch)$"),
    ("literal-keyword", r"^(true|false|null|undefined)$"),
    ("whitespace", r"^\s*$"),
    ("punctuation", r"^[{}()\[\]<>,.:;]+$"),
    (
        "file-extension",
        r"\.(tsx?|jsx?|css|json|svg|png|jpg|webp|ico|woff)$",
    ),
    (
        "layout-keyword",
        r"^(flex|grid|block|none|auto|inherit|relative|absolute|fixed)$",
    ),
    ("breakpoint-prefix", r"^(sm|md|lg|xl|2xl):"),
    (
        "utility-class",
        r"^(text-|bg-|border-|rounded-|p-|m-|w-|h-|flex-)",
    ),
];

static COMPILED_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    IGNORE_PATTERNS
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).unwrap()))
        .collect()
});

/// Name of the first exclusion pattern matching the trimmed text, if any.
pub fn matching_pattern(text: &str) -> Option<&'static str> {
    let trimmed = text.trim();
    COMPILED_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(trimmed))
        .map(|(name, _)| *name)
}

/// Whether a literal should be skipped rather than reported.
pub fn should_ignore(text: &str) -> bool {
    let len = text.trim().chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return true;
    }
    matching_pattern(text).is_some()
}
