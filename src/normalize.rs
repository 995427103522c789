//! Legacy format-token normalization
//!
//! Translation files written for printf-style formatters carry numeric
//! placeholders such as `%d`, `%.2f` or `%2$d`. Downstream formatting treats
//! every placeholder as a string substitution, so those tokens are rewritten
//! to `%s` (or `%<n>$s`), keeping any explicit argument index.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `%`, optional `<digits>$`, digits and dots, then `d` or `f`
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(\d+\$)?[\d.]*[df]").expect("token pattern is a valid regex")
});

/// Rewrite numeric/decimal format tokens into string tokens.
///
/// `%d` and `%.2f` become `%s`; `%2$d` and `%2$.3f` become `%2$s`.
/// Anything else, including tokens already ending in `s`, is left as is.
pub fn normalize(template: &str) -> String {
    normalize_cow(template).into_owned()
}

/// Like [`normalize`], borrowing the input when it holds no legacy tokens
pub fn normalize_cow(template: &str) -> Cow<'_, str> {
    TOKEN_PATTERN.replace_all(template, "%${1}s")
}

/// Check whether a template still contains legacy numeric tokens
pub fn has_legacy_tokens(template: &str) -> bool {
    TOKEN_PATTERN.is_match(template)
}
