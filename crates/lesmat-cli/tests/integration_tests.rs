//! End-to-end runs of the `lesmat` command against files on disk.

#![allow(clippy::unwrap_used)]

use clap::Parser;
use lesmat_cli::{Cli, run};
use tempfile::TempDir;

const EXPORT: &str = r#"{
    "docs": [
        {"id": 10, "slug": "wetter", "title_nl": "Het weer", "title_de": "Das Wetter",
         "topics": [{"id": "t-weer", "title_nl": "Weer", "title_de": "Wetter"}],
         "cefr": ["A1"], "createdAt": "2024-03-01T12:00:00Z"},
        {"id": 11, "slug": "seizoenen", "title_nl": "Seizoenen",
         "topics": [{"id": "t-weer", "title_nl": "Weer", "title_de": "Wetter"}],
         "cefr": ["A2"], "createdAt": "2024-04-01T12:00:00Z"},
        {"id": 12, "slug": "verkeer", "title_nl": "Verkeer", "cefr": ["A2"],
         "createdAt": "2024-05-01T12:00:00Z"}
    ],
    "topics": [{"id": "t-weer", "title_nl": "Weer", "title_de": "Wetter"}]
}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let catalog = dir.path().join("export.json");
        std::fs::write(&catalog, EXPORT).unwrap();
        let config = format!(
            "[catalog]\npath = {:?}\nlocale = \"nl\"\n\n[search]\npage_size = 2\n",
            catalog.to_str().unwrap()
        );
        std::fs::write(dir.path().join("config.toml"), config).unwrap();
        Self { dir }
    }

    fn config(&self) -> String {
        self.dir
            .path()
            .join("config.toml")
            .to_str()
            .unwrap()
            .to_string()
    }

    fn run(&self, args: &[&str]) -> lesmat_cli::Result<String> {
        let config = self.config();
        let mut argv = vec!["lesmat", "--config", config.as_str()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }
}

#[test]
fn test_search_uses_configured_catalog_and_page_size() {
    let fixture = Fixture::new();
    let output = fixture.run(&["search"]).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "3 lesmaterialen gevonden");
    assert!(lines[1].contains("Verkeer"));
    assert!(lines[2].contains("Seizoenen"));
    assert_eq!(lines[3], "[Toon meer: --more 1]");

    let output = fixture.run(&["search", "--more", "1"]).unwrap();
    assert_eq!(output.lines().count(), 4);
}

#[test]
fn test_search_matches_topic_titles_after_titles() {
    let fixture = Fixture::new();
    let output = fixture.run(&["search", "-q", "weer"]).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "2 lesmaterialen gevonden");
    assert!(lines[1].contains("Het weer"));
    assert!(lines[2].contains("Seizoenen"));
}

#[test]
fn test_facets_for_german_locale() {
    let fixture = Fixture::new();
    let output = fixture
        .run(&["facets", "--locale", "de", "--facet", "topics"])
        .unwrap();
    assert_eq!(output, "Themen (topics)\n  [ ] Wetter (2)  t-weer\n");
}

#[test]
fn test_show_from_shared_url() {
    let fixture = Fixture::new();
    let output = fixture
        .run(&[
            "show",
            "seizoenen",
            "--from",
            "https://example.org/nl?cefr=A2",
            "--format",
            "json",
        ])
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["position"], "2 van 2");
    assert_eq!(json["previous"], "/nl/lesmateriaal/verkeer?cefr=A2");
    assert_eq!(json["back"], "/nl?cefr=A2");
}

#[test]
fn test_config_get_and_url_need_no_catalog() {
    let fixture = Fixture::new();
    assert_eq!(
        fixture.run(&["config", "get", "search.page_size"]).unwrap(),
        "2\n"
    );
    assert_eq!(
        fixture.run(&["url", "--topic", "t-weer", "-q", "regen"]).unwrap(),
        "?q=regen&topics=t-weer\n"
    );
}

#[test]
fn test_missing_catalog_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("empty.toml");
    std::fs::write(&config, "").unwrap();
    let cli = Cli::try_parse_from(["lesmat", "--config", config.to_str().unwrap(), "search"])
        .unwrap();
    let err = run(cli, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("--catalog"));
}
