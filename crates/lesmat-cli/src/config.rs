//! Configuration for the `lesmat` command.
//!
//! ```toml
//! [catalog]
//! path = "/srv/lesmat/export.json"
//! include_drafts = false
//! locale = "nl"
//!
//! [search]
//! page_size = 30
//! growth_factor = 5
//!
//! [history]
//! push_delay_ms = 5000
//! ```

use std::time::Duration;

use lesmat_catalog::Locale;
use lesmat_core::ConfigManager;
use lesmat_search::{DEFAULT_GROWTH_FACTOR, DEFAULT_PAGE_SIZE, DEFAULT_PUSH_DELAY, Pager};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LesmatConfig {
    /// Where the catalog comes from.
    pub catalog: CatalogConfig,
    /// Result list behaviour.
    pub search: SearchConfig,
    /// URL history behaviour.
    pub history: HistoryConfig,
}

/// `[catalog]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the JSON export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Keep draft materials.
    pub include_drafts: bool,
    /// Interface locale; unknown codes mean Dutch.
    pub locale: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            include_drafts: false,
            locale: Locale::default().code().to_string(),
        }
    }
}

/// `[search]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Results shown before "show more".
    pub page_size: usize,
    /// Factor the result limit grows by.
    pub growth_factor: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

/// `[history]` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Quiet period before a filter change becomes a history entry.
    pub push_delay_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            push_delay_ms: u64::try_from(DEFAULT_PUSH_DELAY.as_millis()).unwrap_or(5000),
        }
    }
}

impl ConfigManager for LesmatConfig {
    fn project_name() -> &'static str {
        "lesmat"
    }
}

impl LesmatConfig {
    /// The configured locale.
    pub fn locale(&self) -> Locale {
        Locale::from_code_lossy(&self.catalog.locale)
    }

    /// A pager with the configured page size and growth.
    pub fn pager(&self) -> Pager {
        Pager::new(self.search.page_size, self.search.growth_factor)
    }

    /// The configured history push delay.
    pub fn push_delay(&self) -> Duration {
        Duration::from_millis(self.history.push_delay_ms)
    }
}
