//! `lesmat config …` handlers.
//!
//! The handlers are generic over [`ConfigManager`] and write to any
//! [`Write`], so they can be exercised without a terminal.

use std::io::Write;
use std::path::PathBuf;

use lesmat_core::{ConfigManager, Error as CoreError};

use crate::cli::ConfigAction;
use crate::config::LesmatConfig;
use crate::error::Result;

/// Run a config subcommand against [`LesmatConfig`].
pub fn handle_config_command(
    config_path: Option<&str>,
    action: ConfigAction,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => config_path_cmd::<LesmatConfig>(config_path, out),
        ConfigAction::Get { key } => config_get::<LesmatConfig>(config_path, &key, out),
        ConfigAction::Set { key, value } => {
            config_set::<LesmatConfig>(config_path, &key, &value, out)
        }
        ConfigAction::Init { file, force } => {
            config_init::<LesmatConfig>(file.as_deref().or(config_path), force, out)
        }
        ConfigAction::Export { docker_env } => {
            config_export(&LesmatConfig::load(config_path)?, docker_env, out)
        }
    }
}

fn resolved_path<C: ConfigManager>(config_path: Option<&str>) -> Result<PathBuf> {
    C::resolve_config_path(config_path).ok_or_else(|| {
        CoreError::config("Could not determine the config directory for this platform").into()
    })
}

/// Print where the config file is looked for.
pub fn config_path_cmd<C: ConfigManager>(
    config_path: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let path = resolved_path::<C>(config_path)?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        log::info!(
            "{} does not exist yet; `{} config init` creates it",
            path.display(),
            C::project_name()
        );
    }
    Ok(())
}

/// Print one value of the effective configuration.
pub fn config_get<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let config = C::load(config_path)?;
    let tree = toml::Value::try_from(&config).map_err(|e| CoreError::config(e.to_string()))?;
    let value = lookup(&tree, key)
        .ok_or_else(|| CoreError::config(format!("Key '{key}' not found in configuration")))?;
    writeln!(out, "{}", display_value(value))?;
    Ok(())
}

/// Change one value in an existing config file.
pub fn config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let path = resolved_path::<C>(config_path)?;
    if !path.exists() {
        return Err(CoreError::config(format!(
            "Config file does not exist at {}; run `{} config init` first",
            path.display(),
            C::project_name()
        ))
        .into());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| CoreError::io_with_path(e, &path))?;
    let mut tree: toml::Value = toml::from_str(&content)
        .map_err(|e| CoreError::config(format!("Failed to parse {}: {e}", path.display())))?;
    insert(&mut tree, key, infer_value(value))?;

    // Reject edits that would no longer load.
    let rendered = toml::to_string_pretty(&tree).map_err(|e| CoreError::config(e.to_string()))?;
    toml::from_str::<C>(&rendered)
        .map_err(|e| CoreError::config(format!("Invalid value for '{key}': {e}")))?;

    std::fs::write(&path, rendered).map_err(|e| CoreError::io_with_path(e, &path))?;
    writeln!(out, "Set {key} = {value} in {}", path.display())?;
    Ok(())
}

/// Write a config file holding the defaults.
pub fn config_init<C: ConfigManager>(
    file: Option<&str>,
    force: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let path = match file {
        Some(file) => PathBuf::from(file),
        None => C::default_config_path()
            .ok_or_else(|| CoreError::config("Could not determine the config directory"))?,
    };
    if path.exists() && !force {
        return Err(CoreError::config(format!(
            "Config file already exists at {}; use --force to overwrite",
            path.display()
        ))
        .into());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CoreError::io_with_path(e, parent))?;
    }

    std::fs::write(&path, C::default().to_toml_string()?)
        .map_err(|e| CoreError::io_with_path(e, &path))?;
    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

/// Print the configuration as environment variables.
pub fn config_export<C: ConfigManager>(
    config: &C,
    docker_env: bool,
    out: &mut dyn Write,
) -> Result<()> {
    for (key, value) in config.to_env_vars()? {
        if docker_env {
            writeln!(out, "--env {key}={value}")?;
        } else {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(())
}

/// Follow a dotted key through nested tables.
pub fn lookup<'a>(tree: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(tree, |node, part| node.as_table()?.get(part))
}

/// Set a dotted key, creating intermediate tables.
pub fn insert(tree: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(CoreError::config(format!("Invalid key '{key}'")).into());
    }

    let mut node = tree;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        let table = node
            .as_table_mut()
            .ok_or_else(|| CoreError::config(format!("'{part}' is not a table in '{key}'")))?;
        node = table
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }
    node.as_table_mut()
        .ok_or_else(|| CoreError::config(format!("Cannot set '{key}' on a non-table value")))?
        .insert(leaf.to_string(), value);
    Ok(())
}

/// Interpret a command-line value: bool, then integer, then float, else
/// string.
pub fn infer_value(raw: &str) -> toml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        toml::Value::Boolean(b)
    } else if let Ok(i) = raw.parse::<i64>() {
        toml::Value::Integer(i)
    } else if let Ok(f) = raw.parse::<f64>() {
        toml::Value::Float(f)
    } else {
        toml::Value::String(raw.to_string())
    }
}

fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(_) | toml::Value::Array(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
