//! Key normalization shared by the list loader, the scanner and the matcher.
//!
//! Titles from the list and file stems from disk are reduced to the same
//! canonical form so that a plain substring test can pair them up.
//!
//! CRITICAL: Any change here changes which files every title picks. Run tests after changes.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// REGEX PATTERNS
// ============================================================================

/// Matches a trailing year annotation like " (1991)" at the very end of the string.
pub static YEAR_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\d{4}\)\s*$").unwrap());

/// Matches every maximal run of characters outside `[a-z0-9]`.
pub static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

// ============================================================================
// NORMALIZATION FUNCTIONS
// ============================================================================

/// Normalize a title or file stem into a matching key.
///
/// Steps, in order:
/// 1. strip one trailing `(YYYY)` year annotation (with surrounding whitespace)
/// 2. lowercase
/// 3. collapse each run of non-`[a-z0-9]` characters to a single space
/// 4. trim and rejoin on single spaces
///
/// e.g., "Eye of the Beholder (2024)" → "eye of the beholder",
///       "  Zork!! II  " → "zork ii"
pub fn normalize(s: &str) -> String {
    let without_year = YEAR_SUFFIX.replace(s, "");
    let lowered = without_year.to_lowercase();
    let spaced = NON_ALNUM_RUN.replace_all(&lowered, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True if `key` occurs in `stem_key` as a contiguous substring.
/// An empty key never matches, even against an empty stem.
pub fn contains_key(stem_key: &str, key: &str) -> bool {
    !key.is_empty() && stem_key.contains(key)
}

// ============================================================================
// TESTS
// ============================================================================
