//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lesmat_catalog::{Facet, Locale};
use lesmat_search::{FilterState, from_query_string};

/// Search and inspect Lesmat course material exports.
#[derive(Parser, Debug)]
#[command(name = "lesmat", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "LESMAT_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the materials matching the filters
    Search(SearchArgs),
    /// Show facet options with their counts
    Facets(FacetsArgs),
    /// Show one material with its position in the filtered list
    Show(ShowArgs),
    /// Print the URL for a filter state
    Url(UrlArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Output rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Where the catalog comes from and how to read it.
#[derive(Args, Debug, Default, Clone)]
pub struct CatalogArgs {
    /// Catalog export (JSON); defaults to `catalog.path` from the config
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Interface locale (nl or de); defaults to `catalog.locale`
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Keep draft materials
    #[arg(long)]
    pub include_drafts: bool,
}

/// The filter state, given as flags or as a query string.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Search text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Material type ids (comma-separated or repeated)
    #[arg(long = "type", value_delimiter = ',')]
    pub types: Vec<String>,

    /// School type ids
    #[arg(long = "school-type", value_delimiter = ',')]
    pub school_types: Vec<String>,

    /// Competence ids
    #[arg(long = "competence", value_delimiter = ',')]
    pub competences: Vec<String>,

    /// Topic ids
    #[arg(long = "topic", value_delimiter = ',')]
    pub topics: Vec<String>,

    /// Content language codes (nl, de, en)
    #[arg(long = "lang", value_delimiter = ',')]
    pub langs: Vec<String>,

    /// CEFR levels (A1 … C2)
    #[arg(long = "cefr", value_delimiter = ',')]
    pub cefr: Vec<String>,

    /// Start from a query string or URL (e.g. "?q=reizen&cefr=A2")
    #[arg(long = "from")]
    pub from: Option<String>,
}

impl FilterArgs {
    /// Build the filter state. Flags are added to whatever `--from` gave.
    pub fn to_state(&self) -> FilterState {
        let mut state = match self.from.as_deref() {
            Some(from) => from_query_string(query_part(from)),
            None => FilterState::new(),
        };
        if let Some(query) = &self.query {
            state.set_query(query.as_str());
        }
        let flags = [
            (Facet::MaterialType, &self.types),
            (Facet::SchoolType, &self.school_types),
            (Facet::Competence, &self.competences),
            (Facet::Topic, &self.topics),
            (Facet::Language, &self.langs),
            (Facet::Cefr, &self.cefr),
        ];
        for (facet, ids) in flags {
            for id in ids {
                state.select(facet, id);
            }
        }
        state
    }
}

fn query_part(from: &str) -> &str {
    match from.split_once('?') {
        Some((_, query)) => query.split('#').next().unwrap_or_default(),
        None => from,
    }
}

/// `lesmat search`
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Number of times "show more" was pressed
    #[arg(long, default_value_t = 0)]
    pub more: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// `lesmat facets`
#[derive(Args, Debug, Default)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Only this facet (name or query key, e.g. `topic` or `topics`)
    #[arg(long)]
    pub facet: Option<Facet>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// `lesmat show`
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Slug or `id:<id>`
    pub material: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// `lesmat url`
#[derive(Args, Debug, Default)]
pub struct UrlArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Base URL to write the filters into; its other parameters are kept
    #[arg(long)]
    pub base: Option<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Get a value by dotted key (e.g. `search.page_size`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Target file instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=value` for docker run
        #[arg(long)]
        docker_env: bool,
    },
}
