//! Accent-insensitive text normalization.
//!
//! Dutch and German titles mix accented and plain spellings ("Café",
//! "cafe", "Über", "uber"). Search and slugs both work on a folded form:
//! canonical decomposition with combining marks removed.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Decompose `s` (NFD) and drop every combining mark.
///
/// # Examples
///
/// ```
/// use lesmat_core::fold_diacritics;
///
/// assert_eq!(fold_diacritics("Café Über"), "Cafe Uber");
/// ```
pub fn fold_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Fold diacritics and lowercase.
///
/// Lowercasing can itself produce decomposable characters (e.g. `İ`
/// lowercases to `i` plus a combining dot), so the fold runs again on the
/// lowercased stream. The result is a fixed point:
/// `normalize_text(&normalize_text(s)) == normalize_text(s)`.
///
/// # Examples
///
/// ```
/// use lesmat_core::normalize_text;
///
/// assert_eq!(normalize_text("Reizen in DÜSSELDORF"), "reizen in dusseldorf");
/// assert_eq!(normalize_text("École"), "ecole");
/// ```
pub fn normalize_text(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
