//! Slugs for product page file names.

use regex::Regex;
use std::sync::LazyLock;

/// `\s` plus the ASCII information separators U+001C..=U+001F, which
/// Python's `str.isspace` also counts as whitespace.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1C-\x1F_]+").expect("Invalid separator regex"));

static DISALLOWED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("Invalid slug charset regex"));

/// Convert a product name into a lowercase, ASCII-only slug.
///
/// Runs of whitespace and underscores become one hyphen, everything outside
/// `[a-z0-9-]` is dropped and leading/trailing hyphens are trimmed. Distinct
/// names can produce the same slug.
///
/// ```
/// use drive_catalog::slugify;
///
/// assert_eq!(slugify("Red Mug"), "red-mug");
/// assert_eq!(slugify("Blue_Mug!!"), "blue-mug");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.trim_matches(is_space).to_lowercase();
    let hyphenated = SEPARATOR_REGEX.replace_all(&lowered, "-");
    let cleaned = DISALLOWED_REGEX.replace_all(&hyphenated, "");
    cleaned.trim_matches('-').to_string()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
