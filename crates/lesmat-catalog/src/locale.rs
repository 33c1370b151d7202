//! Supported interface locales.

use std::fmt;
use std::str::FromStr;

use lesmat_core::Error;
use serde::{Deserialize, Serialize};

/// Interface language of a catalog view.
///
/// Every localized field exists as a Dutch and a German variant; reading a
/// field in one locale falls back to the other when the preferred variant is
/// empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Dutch (the default).
    #[default]
    Nl,
    /// German.
    De,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::Nl, Locale::De];

    /// Two-letter code used in URLs (`nl`, `de`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Nl => "nl",
            Self::De => "de",
        }
    }

    /// The other locale, used for fallback.
    pub fn other(self) -> Self {
        match self {
            Self::Nl => Self::De,
            Self::De => Self::Nl,
        }
    }

    /// Lenient parse used for route segments: anything but `de` is Dutch.
    pub fn from_code_lossy(code: &str) -> Self {
        if code.eq_ignore_ascii_case("de") {
            Self::De
        } else {
            Self::Nl
        }
    }

    /// Pick the variant for this locale, falling back to the other one.
    ///
    /// Empty strings count as missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lesmat_catalog::Locale;
    ///
    /// assert_eq!(Locale::De.pick(Some("Reizen"), Some("Reisen")), Some("Reisen"));
    /// assert_eq!(Locale::De.pick(Some("Reizen"), Some("")), Some("Reizen"));
    /// assert_eq!(Locale::Nl.pick(None, None), None);
    /// ```
    pub fn pick<'a>(self, nl: Option<&'a str>, de: Option<&'a str>) -> Option<&'a str> {
        let (preferred, fallback) = match self {
            Self::Nl => (nl, de),
            Self::De => (de, nl),
        };
        preferred
            .filter(|s| !s.is_empty())
            .or_else(|| fallback.filter(|s| !s.is_empty()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nl" => Ok(Self::Nl),
            "de" => Ok(Self::De),
            other => Err(Error::validation_field(
                "locale",
                format!("unsupported locale '{other}', expected nl or de"),
            )),
        }
    }
}
