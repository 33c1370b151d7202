//! Course material records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lesmat_core::{Id, slugify};
use serde::{Deserialize, Deserializer, Serialize};

use crate::facet::Facet;
use crate::locale::Locale;
use crate::term::{TermRef, deserialize_refs};

/// Path segment under which material detail pages live.
pub const MATERIAL_ROUTE: &str = "lesmateriaal";

/// Prefix marking an identifier in place of a slug (`id:42`).
pub const ID_PREFIX: &str = "id:";

/// Editorial status of a material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStatus {
    /// Not visible to the public.
    Draft,
    /// Visible to the public.
    #[default]
    Published,
}

/// A course material ("lesmateriaal") as exported by the CMS.
///
/// Field names follow the CMS JSON. Taxonomy references may be bare ids or
/// populated terms; see [`TermRef`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMaterial {
    /// Record identifier.
    pub id: Id,

    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Dutch title.
    #[serde(default, rename = "title_nl", skip_serializing_if = "Option::is_none")]
    pub title_nl: Option<String>,
    /// German title.
    #[serde(default, rename = "title_de", skip_serializing_if = "Option::is_none")]
    pub title_de: Option<String>,
    /// Dutch description.
    #[serde(
        default,
        rename = "description_nl",
        skip_serializing_if = "Option::is_none"
    )]
    pub description_nl: Option<String>,
    /// German description.
    #[serde(
        default,
        rename = "description_de",
        skip_serializing_if = "Option::is_none"
    )]
    pub description_de: Option<String>,

    /// Material types.
    #[serde(default, deserialize_with = "deserialize_refs")]
    pub material_types: Vec<TermRef>,
    /// School types (older exports use a singular `schoolType`).
    #[serde(default, alias = "schoolType", deserialize_with = "deserialize_refs")]
    pub school_types: Vec<TermRef>,
    /// Competences.
    #[serde(default, deserialize_with = "deserialize_refs")]
    pub competences: Vec<TermRef>,
    /// Topics.
    #[serde(default, deserialize_with = "deserialize_refs")]
    pub topics: Vec<TermRef>,

    /// Content language tags (`nl`, `de`, `en`).
    #[serde(default, rename = "language", deserialize_with = "deserialize_tags")]
    pub languages: Vec<String>,
    /// CEFR level tags (`A1` … `C2`).
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub cefr: Vec<String>,

    /// Featured materials are listed first.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub featured: bool,

    /// Creation time, used for recency ordering.
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Editorial status; absent means published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MaterialStatus>,

    /// External website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// License text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Contact person, e-mail address or link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl CourseMaterial {
    /// Creates an empty record with the given id.
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Localized title, empty when neither variant is set.
    pub fn title(&self, locale: Locale) -> &str {
        locale
            .pick(self.title_nl.as_deref(), self.title_de.as_deref())
            .unwrap_or_default()
    }

    /// Localized description, empty when neither variant is set.
    pub fn description(&self, locale: Locale) -> &str {
        locale
            .pick(self.description_nl.as_deref(), self.description_de.as_deref())
            .unwrap_or_default()
    }

    /// Identifiers this record carries for `facet`.
    pub fn facet_ids(&self, facet: Facet) -> FacetIds<'_> {
        match facet {
            Facet::MaterialType => FacetIds::Refs(self.material_types.iter()),
            Facet::SchoolType => FacetIds::Refs(self.school_types.iter()),
            Facet::Competence => FacetIds::Refs(self.competences.iter()),
            Facet::Topic => FacetIds::Refs(self.topics.iter()),
            Facet::Language => FacetIds::Tags(self.languages.iter()),
            Facet::Cefr => FacetIds::Tags(self.cefr.iter()),
        }
    }

    /// Localized titles of populated topic references.
    ///
    /// Bare topic ids carry no title and are skipped.
    pub fn topic_titles(&self, locale: Locale) -> impl Iterator<Item = &str> + '_ {
        self.topics
            .iter()
            .filter_map(TermRef::term)
            .filter_map(move |term| term.localized_title(locale))
    }

    /// Whether the public may see this record.
    pub fn is_published(&self) -> bool {
        self.status != Some(MaterialStatus::Draft)
    }

    /// Creation time in milliseconds; missing timestamps sort as the epoch.
    pub fn created_millis(&self) -> i64 {
        self.created_at
            .map(|at| at.timestamp_millis())
            .unwrap_or_default()
    }

    /// The slug-or-id segment used in detail URLs.
    pub fn route_key(&self) -> String {
        match self.slug.as_deref().filter(|s| !s.is_empty()) {
            Some(slug) => slug.to_string(),
            None => format!("{ID_PREFIX}{}", self.id),
        }
    }

    /// Derive a slug from the Dutch title when none was exported. Returns
    /// whether a slug was filled in.
    pub fn fill_slug(&mut self) -> bool {
        if self.slug.as_deref().is_some_and(|s| !s.is_empty()) {
            return false;
        }
        let derived = self.title_nl.as_deref().map(slugify).unwrap_or_default();
        if derived.is_empty() {
            return false;
        }
        self.slug = Some(derived);
        true
    }

    /// Detail page path, e.g. `/nl/lesmateriaal/reizen`.
    pub fn path(&self, locale: Locale) -> String {
        format!("/{}/{MATERIAL_ROUTE}/{}", locale.code(), self.route_key())
    }

    /// Whether `key` (a slug or `id:<id>`) designates this record.
    pub fn matches_route_key(&self, key: &str) -> bool {
        match key.strip_prefix(ID_PREFIX) {
            Some(id) => self.id == id,
            None => self.slug.as_deref() == Some(key),
        }
    }
}

/// Iterator over the identifiers of one facet of a record.
#[derive(Clone, Debug)]
pub enum FacetIds<'a> {
    /// Taxonomy references.
    Refs(std::slice::Iter<'a, TermRef>),
    /// Plain tags (languages, CEFR levels).
    Tags(std::slice::Iter<'a, String>),
}

impl<'a> Iterator for FacetIds<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Refs(refs) => refs.next().map(|r| r.id().as_str()),
            Self::Tags(tags) => tags.next().map(String::as_str),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Refs(refs) => refs.size_hint(),
            Self::Tags(tags) => tags.size_hint(),
        }
    }
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(tags.into_iter().flatten().flatten().collect())
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| {
        let parsed = parse_timestamp(s);
        if parsed.is_none() {
            log::warn!("Ignoring unparseable createdAt '{s}'");
        }
        parsed
    }))
}

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS`, or a bare
/// date (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
