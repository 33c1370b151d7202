//! Configuration management trait.
//!
//! [`ConfigManager`] gives any serde-backed configuration struct the
//! behaviour the command-line front end needs: locating the config file,
//! loading it with defaults, rendering TOML, and exporting environment
//! variables.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Shared behaviour for TOML configuration files.
pub trait ConfigManager: Serialize + DeserializeOwned + Default {
    /// Project name, used for the config directory and env prefix.
    fn project_name() -> &'static str;

    /// Environment variable prefix (`lesmat` → `LESMAT`).
    fn env_prefix() -> String {
        Self::project_name().to_uppercase().replace(['-', ' '], "_")
    }

    /// Default location: `<platform config dir>/<project>/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve the config path.
    ///
    /// Priority: explicit path → `<PREFIX>_CONFIG` env var → default path.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(format!("{}_CONFIG", Self::env_prefix())) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_config_path()
    }

    /// Load the configuration, falling back to defaults when no file exists.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Render the configuration as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten the configuration into `PREFIX_SECTION_KEY=value` pairs.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&Self::env_prefix(), &value, &mut vars);
        Ok(vars)
    }
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{prefix}_{}", key.to_uppercase().replace('-', "_"));
                flatten_env(&name, child, out);
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| match item {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(",");
            out.push((prefix.to_string(), joined));
        }
        other => out.push((prefix.to_string(), other.to_string())),
    }
}
