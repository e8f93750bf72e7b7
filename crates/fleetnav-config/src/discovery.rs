//! Config file discovery and layered merging.
//!
//! Resolution order (later overrides earlier):
//! 1. `~/.config/fleetnav/config.toml` (XDG user config)
//! 2. `./fleetnav.toml` (project-local)
//! 3. `FLEETNAV_*` environment variables

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::{FleetConfig, PartialConfig};

/// Default config filename for project-local config.
const PROJECT_CONFIG_FILE: &str = "fleetnav.toml";

/// Default config filename within the XDG config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Application name for XDG directory resolution.
const APP_NAME: &str = "fleetnav";

/// Environment variable overriding the user config directory.
const ENV_CONFIG_DIR: &str = "FLEETNAV_CONFIG_DIR";

/// Environment variable prefix for per-field overrides.
const ENV_PREFIX: &str = "FLEETNAV_";

/// Tracks where each config layer was loaded from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the config file.
    pub path: PathBuf,
    /// Whether the file was found and loaded.
    pub loaded: bool,
}

/// Result of config discovery and loading.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The merged, validated configuration.
    pub config: FleetConfig,
    /// File sources that were checked, in order of precedence (lowest first).
    pub sources: Vec<ConfigSource>,
}

/// The user config directory: `FLEETNAV_CONFIG_DIR` or the platform default.
pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Load configuration by discovering and merging all config layers.
pub fn load_config(project_dir: Option<&Path>) -> Result<LoadedConfig> {
    load_config_with_options(project_dir, None)
}

/// Load configuration with explicit control over the user config directory.
///
/// `config_dir` overrides both `FLEETNAV_CONFIG_DIR` and the platform
/// default.
pub fn load_config_with_options(
    project_dir: Option<&Path>,
    config_dir: Option<&Path>,
) -> Result<LoadedConfig> {
    let mut merged = PartialConfig::default();
    let mut sources = Vec::new();

    // 1. User config — explicit override, then env var, then platform default
    let user_config_path = match config_dir {
        Some(dir) => Some(dir.join(USER_CONFIG_FILE)),
        None => xdg_config_dir().map(|d| d.join(USER_CONFIG_FILE)),
    };
    if let Some(path) = user_config_path {
        sources.push(load_layer(&mut merged, &path)?);
    }

    // 2. Project-local config
    let project_path = project_dir
        .map(|d| d.join(PROJECT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));
    sources.push(load_layer(&mut merged, &project_path)?);

    // 3. Environment overrides win over both files
    merged.merge(env_layer(|name| std::env::var(name).ok()));

    Ok(LoadedConfig {
        config: merged.into_config()?,
        sources,
    })
}

/// Load config from a specific file path (no discovery, no env layer).
pub fn load_config_file(path: &Path) -> Result<FleetConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    PartialConfig::from_toml(&contents)?.into_config()
}

/// Merge one file layer into `merged`, if the file exists.
fn load_layer(merged: &mut PartialConfig, path: &Path) -> Result<ConfigSource> {
    if !path.exists() {
        return Ok(ConfigSource {
            path: path.to_path_buf(),
            loaded: false,
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    merged.merge(PartialConfig::from_toml(&contents)?);

    Ok(ConfigSource {
        path: path.to_path_buf(),
        loaded: true,
    })
}

/// Build the environment layer through a lookup function.
fn env_layer(lookup: impl Fn(&str) -> Option<String>) -> PartialConfig {
    let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));
    PartialConfig {
        url_prefix: var("URL_PREFIX"),
        app_id: var("APP_ID"),
        app_secret: var("APP_SECRET"),
        appcode: var("APPCODE"),
        robot_id: var("ROBOT_ID"),
    }
}
