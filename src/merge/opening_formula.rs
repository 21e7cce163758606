//! Stripping the opening formula from the first verse.
//!
//! Upstream editions prefix verse 1 of most chapters with the bismillah,
//! while translators may render it as a separate verse 0. Both functions
//! leave text they cannot safely shorten untouched.

use regex::Regex;
use std::sync::OnceLock;

/// Trim whitespace and byte-order marks from both ends
///
/// Upstream text occasionally starts with U+FEFF, which `str::trim` keeps.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Drop the leading `prefix_chars` characters from canonical verse text
///
/// Applies only when the trimmed text is strictly longer than the prefix, so a
/// verse consisting of the formula alone (chapter 1) is kept whole. Counting is
/// per `char`, matching the upstream script's code points.
pub fn strip_canonical(text: &str, prefix_chars: usize) -> String {
    let trimmed = trim_text(text);
    if trimmed.chars().count() <= prefix_chars {
        return text.to_string();
    }

    let rest: String = trimmed.chars().skip(prefix_chars).collect();
    trim_text(&rest).to_string()
}

/// Drop the transliterated formula and the dash that follows it
///
/// `"Bismillahir-Rahmanir-Rahim - Alhamdu lillahi"` becomes
/// `"Alhamdu lillahi"`. Text that does not start with `prefix`, or is no longer
/// than it, is returned unchanged.
pub fn strip_transliteration(text: &str, prefix: &str) -> String {
    static LEADING_DASH: OnceLock<Regex> = OnceLock::new();

    let trimmed = trim_text(text);
    if prefix.is_empty() || trimmed.len() <= prefix.len() || !trimmed.starts_with(prefix) {
        return text.to_string();
    }

    let rest = trim_text(&trimmed[prefix.len()..]);
    let dash = LEADING_DASH.get_or_init(|| {
        #[allow(clippy::expect_used)]
        Regex::new(r"^\s*-\s*").expect("static pattern is valid")
    });
    trim_text(&dash.replace(rest, "")).to_string()
}
