//! Handler functions for `glonav config` subcommands.
//!
//! Each handler returns the text it would print so the dispatch function
//! owns stdout and the handlers stay testable.

use crate::cli::ConfigAction;
use crate::config::{GlonavConfig, PROJECT_NAME};
use glonav_core::{Error, Result};
use std::path::PathBuf;

/// Dispatch a config subcommand and print its output.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    let output = match action {
        ConfigAction::Path => cmd_config_path(config_path)?,
        ConfigAction::Show => cmd_config_show(config_path)?,
        ConfigAction::Get { key } => cmd_config_get(config_path, &key)?,
        ConfigAction::Init { file, force } => {
            cmd_config_init(file.as_deref().or(config_path), force)?
        }
    };
    println!("{output}");
    Ok(())
}

/// The resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<String> {
    let path = GlonavConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(path.display().to_string())
}

/// The effective configuration (file plus environment) as TOML.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<String> {
    GlonavConfig::load(config_path)?.to_toml_string()
}

/// One configuration value by dotted key, e.g. `retrieval.top_k`.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = GlonavConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Write a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<String> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => GlonavConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = GlonavConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    log::info!("Wrote default configuration to {}", path.display());
    Ok(format!("Config file created at {}", path.display()))
}

// ============================================================================
// TOML helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(_) | toml::Value::Array(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
