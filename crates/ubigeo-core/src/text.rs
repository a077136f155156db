// crates/ubigeo-core/src/text.rs

//! Text folding used by the search index.

use std::ops::RangeInclusive;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Convert a string into the canonical comparison form used by the index.
///
/// This performs:
/// 1\) Uppercasing
/// 2\) Canonical decomposition (NFD)
/// 3\) Removal of every combining mark in U+0300–U+036F
///
/// `Ñ` is kept as a letter of its own. Canonical decomposition would split it
/// into `N` + U+0303, so the input is composed first and `Ñ` bypasses the
/// decomposition step.
///
/// # Examples
///
/// ```rust
/// use ubigeo_core::text::normalize;
///
/// assert_eq!(normalize("Áncash"), "ANCASH");
/// assert_eq!(normalize("Cañaris"), "CAÑARIS");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfc().flat_map(char::to_uppercase) {
        if ch == 'Ñ' {
            out.push(ch);
            continue;
        }
        out.extend(std::iter::once(ch).nfd().filter(|c| !is_combining_mark(*c)));
    }
    out
}

#[inline]
fn is_combining_mark(c: char) -> bool {
    COMBINING_MARKS.contains(&c)
}

/// Splits a raw query into its normalized AND-terms.
///
/// `"  san   isidro "` becomes `["SAN", "ISIDRO"]`.
pub fn query_terms(query: &str) -> Vec<String> {
    normalize(query.trim())
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// `true` if `key` contains every term as a plain substring.
///
/// Matching is not word-bounded: `LIMA` is found inside `LIMATAMBO`.
#[inline]
pub fn contains_all<S: AsRef<str>>(key: &str, terms: &[S]) -> bool {
    terms.iter().all(|t| key.contains(t.as_ref()))
}
