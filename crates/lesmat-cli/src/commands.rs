//! Catalog commands: `search`, `facets`, `show` and `url`.

use std::io::Write;
use std::path::PathBuf;

use lesmat_catalog::{Catalog, CourseMaterial, Dictionary, Facet, Locale};
use lesmat_core::Error as CoreError;
use lesmat_search::{
    FacetOption, FacetedSearch, FilterState, Neighbors, apply_to_url, facet_options,
    material_url, overview_url, to_query_string,
};
use serde::Serialize;
use url::Url;

use crate::cli::{CatalogArgs, FacetsArgs, OutputFormat, SearchArgs, ShowArgs, UrlArgs};
use crate::config::LesmatConfig;
use crate::error::{Error, Result};

/// A loaded catalog plus the settings it is viewed with.
#[derive(Debug)]
pub struct Session {
    /// The catalog (drafts already removed unless requested).
    pub catalog: Catalog,
    /// Interface locale.
    pub locale: Locale,
}

impl Session {
    /// Load the catalog named by the arguments or the configuration.
    pub fn open(args: &CatalogArgs, config: &LesmatConfig) -> Result<Self> {
        let path = args
            .catalog
            .clone()
            .or_else(|| config.catalog.path.as_ref().map(PathBuf::from))
            .ok_or_else(|| {
                Error::invalid_argument("no catalog given; pass --catalog or set catalog.path")
            })?;
        let catalog = Catalog::load(&path)?;
        Ok(Self::new(
            catalog,
            args.locale.unwrap_or_else(|| config.locale()),
            args.include_drafts || config.catalog.include_drafts,
        ))
    }

    /// Wrap an already-loaded catalog.
    pub fn new(catalog: Catalog, locale: Locale, include_drafts: bool) -> Self {
        let catalog = if include_drafts {
            catalog
        } else {
            catalog.published()
        };
        Self { catalog, locale }
    }

    fn engine(&self) -> FacetedSearch<'_> {
        FacetedSearch::new(self.catalog.materials(), self.locale)
    }

    /// Reconcile `state` with the vocabulary, reporting pruned selections.
    fn reconcile(&self, mut state: FilterState) -> FilterState {
        for (facet, id) in state.prune_stale(self.catalog.vocabulary()) {
            tracing::warn!(%facet, %id, "Ignoring unknown selection");
        }
        state
    }
}

#[derive(Serialize)]
struct MaterialSummary<'a> {
    id: &'a str,
    title: &'a str,
    path: String,
    featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
}

impl<'a> MaterialSummary<'a> {
    fn new(material: &'a CourseMaterial, locale: Locale) -> Self {
        Self {
            id: material.id.as_str(),
            title: material.title(locale),
            path: material.path(locale),
            featured: material.featured,
            created_at: material.created_at.map(|at| at.to_rfc3339()),
        }
    }
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    summary: String,
    total: usize,
    shown: usize,
    has_more: bool,
    query_string: String,
    materials: Vec<MaterialSummary<'a>>,
}

/// `lesmat search`
pub fn search(session: &Session, args: &SearchArgs, config: &LesmatConfig, out: &mut dyn Write) -> Result<()> {
    let state = session.reconcile(args.filter.to_state());
    let engine = session.engine();
    let results = engine.search(&state);

    let mut pager = config.pager();
    for _ in 0..args.more {
        pager.show_more();
    }
    let page = pager.page(&results.hits);
    let dict = Dictionary::get(session.locale);

    let output = SearchOutput {
        summary: dict.results_found(results.len()),
        total: results.len(),
        shown: page.len(),
        has_more: pager.has_more(results.len()),
        query_string: to_query_string(&state),
        materials: page
            .iter()
            .map(|hit| MaterialSummary::new(hit.material, session.locale))
            .collect(),
    };

    match args.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?,
        OutputFormat::Text => {
            writeln!(out, "{}", output.summary)?;
            for material in &output.materials {
                let star = if material.featured { "*" } else { " " };
                writeln!(out, "{star} {:<8} {}  {}", material.id, material.title, material.path)?;
            }
            if output.has_more {
                writeln!(out, "[{}: --more {}]", dict.load_more, args.more + 1)?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct FacetOutput {
    facet: Facet,
    title: &'static str,
    options: Vec<FacetOption>,
}

/// `lesmat facets`
pub fn facets(session: &Session, args: &FacetsArgs, out: &mut dyn Write) -> Result<()> {
    let state = session.reconcile(args.filter.to_state());
    let counts = session.engine().facet_counts(&state);
    let dict = Dictionary::get(session.locale);

    let output: Vec<FacetOutput> = Facet::ALL
        .into_iter()
        .filter(|facet| args.facet.is_none_or(|only| only == *facet))
        .map(|facet| FacetOutput {
            facet,
            title: dict.facet_title(facet),
            options: facet_options(
                session.catalog.vocabulary(),
                facet,
                &counts,
                &state,
                session.locale,
            ),
        })
        .collect();

    match args.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?,
        OutputFormat::Text => {
            for section in &output {
                writeln!(out, "{} ({})", section.title, section.facet.query_key())?;
                for option in &section.options {
                    let mark = if option.selected { "x" } else { " " };
                    writeln!(
                        out,
                        "  [{mark}] {} ({})  {}",
                        option.title, option.count, option.id
                    )?;
                }
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    summary: MaterialSummary<'a>,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<String>,
    back: String,
}

/// `lesmat show`
pub fn show(session: &Session, args: &ShowArgs, out: &mut dyn Write) -> Result<()> {
    let material = session.catalog.find(&args.material)?;
    let state = session.reconcile(args.filter.to_state());
    let engine = session.engine();
    let results = engine.search(&state);
    let locale = session.locale;

    let neighbors = Neighbors::locate(&results, material.id.as_str()).filter(Neighbors::is_navigable);
    let link_to = |m: &CourseMaterial| material_url(m, locale, &state);

    let output = ShowOutput {
        summary: MaterialSummary::new(material, locale),
        description: material.description(locale),
        link: material.link.as_deref(),
        license: material.license.as_deref(),
        contact: material.contact.as_deref(),
        position: neighbors.and_then(|n| n.label(locale)),
        previous: neighbors.and_then(|n| n.previous).map(link_to),
        next: neighbors.and_then(|n| n.next).map(link_to),
        back: overview_url(locale, &state),
    };

    match args.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?,
        OutputFormat::Text => {
            let dict = Dictionary::get(locale);
            writeln!(out, "{}", output.summary.title)?;
            if !output.description.is_empty() {
                writeln!(out, "\n{}\n", output.description)?;
            }
            for (label, value) in [
                ("Link", output.link),
                (dict.license_label, output.license),
                (dict.contact_label, output.contact),
            ] {
                if let Some(value) = value {
                    writeln!(out, "{label}: {value}")?;
                }
            }
            if let Some(position) = &output.position {
                writeln!(out, "{position}")?;
            }
            if let Some(previous) = &output.previous {
                writeln!(out, "{}: {previous}", dict.previous)?;
            }
            if let Some(next) = &output.next {
                writeln!(out, "{}: {next}", dict.next)?;
            }
            writeln!(out, "{}: {}", dict.back_to_overview, output.back)?;
        }
    }
    Ok(())
}

/// `lesmat url`
pub fn url(args: &UrlArgs, out: &mut dyn Write) -> Result<()> {
    let state = args.filter.to_state();
    match args.base.as_deref() {
        Some(base) => {
            let base = Url::parse(base)
                .map_err(|e| CoreError::validation_field("base", format!("invalid URL '{base}': {e}")))?;
            writeln!(out, "{}", apply_to_url(&state, &base))?;
        }
        None => {
            let query = to_query_string(&state);
            if query.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "?{query}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::FilterArgs;

    const EXPORT: &str = r#"{
        "materials": [
            {"id": 1, "slug": "reizen-in-duitsland", "title_nl": "Reizen in Duitsland",
             "cefr": ["B1"], "createdAt": "2024-01-01", "license": "CC BY 4.0"},
            {"id": 2, "slug": "reizen", "title_nl": "Reizen", "title_de": "Reisen",
             "cefr": ["A2"], "featured": true, "createdAt": "2023-01-01"},
            {"id": 3, "title_nl": "Concept", "status": "draft"}
        ],
        "topics": []
    }"#;

    fn session(locale: Locale) -> Session {
        Session::new(Catalog::from_json_str(EXPORT).unwrap(), locale, false)
    }

    fn filter(query: &str) -> FilterArgs {
        FilterArgs {
            query: Some(query.to_string()),
            ..Default::default()
        }
    }

    fn capture(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_search_text() {
        let session = session(Locale::Nl);
        let args = SearchArgs {
            filter: filter("reizen"),
            ..Default::default()
        };
        let output = capture(|out| search(&session, &args, &LesmatConfig::default(), out));
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "2 lesmaterialen gevonden");
        assert!(lines[1].starts_with("* 2"));
        assert!(lines[2].starts_with("  1"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_search_json_paging() {
        let session = session(Locale::De);
        let mut config = LesmatConfig::default();
        config.search.page_size = 1;
        let args = SearchArgs {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let output = capture(|out| search(&session, &args, &config, out));
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["shown"], 1);
        assert_eq!(json["has_more"], true);
        assert_eq!(json["summary"], "2 Materialen gefunden");
        assert_eq!(json["materials"][0]["title"], "Reisen");
        assert_eq!(json["materials"][0]["path"], "/de/lesmateriaal/reizen");
    }

    #[test]
    fn test_drafts_on_request() {
        let session = Session::new(Catalog::from_json_str(EXPORT).unwrap(), Locale::Nl, true);
        let args = SearchArgs {
            filter: filter("concept"),
            ..Default::default()
        };
        let output = capture(|out| search(&session, &args, &LesmatConfig::default(), out));
        assert!(output.starts_with("1 lesmateriaal gevonden"));
    }

    #[test]
    fn test_facets_json() {
        let session = session(Locale::Nl);
        let args = FacetsArgs {
            filter: FilterArgs {
                query: Some("reizen".to_string()),
                cefr: vec!["A2".to_string()],
                ..Default::default()
            },
            facet: Some(Facet::Cefr),
            format: OutputFormat::Json,
            ..Default::default()
        };
        let output = capture(|out| facets(&session, &args, out));
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["title"], "ERK-niveaus");
        let options = json[0]["options"].as_array().unwrap();
        assert_eq!(options.len(), 2);
        assert!(
            options
                .iter()
                .any(|o| o["id"] == "B1" && o["count"] == 1 && o["selected"] == false)
        );
    }

    #[test]
    fn test_show_with_navigation() {
        let session = session(Locale::Nl);
        let args = ShowArgs {
            material: "reizen-in-duitsland".to_string(),
            filter: filter("reizen"),
            format: OutputFormat::Json,
            ..Default::default()
        };
        let output = capture(|out| show(&session, &args, out));
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["position"], "2 van 2");
        assert_eq!(json["previous"], "/nl/lesmateriaal/reizen?q=reizen");
        assert!(json.get("next").is_none());
        assert_eq!(json["back"], "/nl?q=reizen");
        assert_eq!(json["license"], "CC BY 4.0");
    }

    #[test]
    fn test_show_unknown_material() {
        let session = session(Locale::Nl);
        let args = ShowArgs {
            material: "id:99".to_string(),
            ..Default::default()
        };
        let mut buf = Vec::new();
        let err = show(&session, &args, &mut buf).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_show_single_result_has_no_navigation() {
        let session = session(Locale::Nl);
        let args = ShowArgs {
            material: "id:1".to_string(),
            filter: filter("duitsland"),
            ..Default::default()
        };
        let output = capture(|out| show(&session, &args, out));
        assert!(!output.contains("van"));
        assert!(output.contains("Terug naar overzicht: /nl?q=duitsland"));
    }

    #[test]
    fn test_url_command() {
        let args = UrlArgs {
            filter: FilterArgs {
                query: Some("eten en drinken".to_string()),
                langs: vec!["de".to_string()],
                ..Default::default()
            },
            base: Some("https://example.org/de?utm=x".to_string()),
        };
        let output = capture(|out| url(&args, out));
        assert_eq!(output, "https://example.org/de?utm=x&q=eten+en+drinken&langs=de\n");

        let bare = UrlArgs {
            filter: filter("a"),
            base: None,
        };
        assert_eq!(capture(|out| url(&bare, out)), "?q=a\n");
    }

    #[test]
    fn test_url_rejects_bad_base() {
        let args = UrlArgs {
            base: Some("not a url".to_string()),
            ..Default::default()
        };
        let mut buf = Vec::new();
        assert!(url(&args, &mut buf).is_err());
    }
}
