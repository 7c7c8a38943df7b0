// Configuration loader
// Loads ~/.cbt-diary/config.toml (or an explicit path), then applies
// environment overrides

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::errors::config_parse_error;

/// Overrides `[server] bind_address`
pub const BIND_ENV_VAR: &str = "CBT_DIARY_BIND";

/// Default location of the config file, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cbt-diary").join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default file is used when
/// present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => match default_config_path() {
            Some(default_path) if default_path.exists() => load_from_file(&default_path)?,
            _ => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config, std::env::var(BIND_ENV_VAR).ok());

    Ok(config)
}

fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut config: Config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!(config_parse_error(&path.display().to_string(), e)))?;

    // Relative table paths are relative to the config file
    if let Some(tables_path) = config.triage.tables_path.take() {
        let resolved = match path.parent() {
            Some(dir) if tables_path.is_relative() => dir.join(tables_path),
            _ => tables_path,
        };
        config.triage.tables_path = Some(resolved);
    }

    tracing::info!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, bind: Option<String>) {
    if let Some(bind) = bind.filter(|b| !b.trim().is_empty()) {
        config.server.bind_address = bind;
    }
}
