//! URL slug generation.
//!
//! Slugs are derived from the Dutch title when an editor leaves the slug
//! field empty, so they must survive accents and the " - " separators the
//! CMS uses in combined titles ("Reizen - Reisen").

use std::sync::LazyLock;

use regex::Regex;

use super::text::fold_diacritics;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"[^A-Za-z0-9_-]+"));
static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| compile(r"_+"));
static DASHES: LazyLock<Regex> = LazyLock::new(|| compile(r"--+"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static slug pattern")
}

/// Convert a title into a URL slug.
///
/// 1. Strips diacritics
/// 2. Turns `" - "` into `-`
/// 3. Lowercases and trims
/// 4. Replaces whitespace runs with `_`
/// 5. Drops everything except ASCII letters, digits, `_` and `-`
/// 6. Collapses runs of `_` and of `-`
///
/// # Examples
///
/// ```
/// use lesmat_core::slugify;
///
/// assert_eq!(slugify("Reizen in Duitsland"), "reizen_in_duitsland");
/// assert_eq!(slugify("Reizen - Reisen"), "reizen-reisen");
/// assert_eq!(slugify("Café: één!"), "cafe_een");
/// ```
pub fn slugify(input: &str) -> String {
    let folded = fold_diacritics(input).replace(" - ", "-").to_lowercase();
    let spaced = WHITESPACE.replace_all(folded.trim(), "_");
    let cleaned = NON_WORD.replace_all(&spaced, "");
    let single_underscores = UNDERSCORES.replace_all(&cleaned, "_");
    DASHES.replace_all(&single_underscores, "-").into_owned()
}
