use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

pub const CONFIG_ENV: &str = "POWERPROMPT_CONFIG";
pub const FINAL_SPACE_ENV: &str = "POWERPROMPT_FINAL_SPACE";

/// Load configuration with priority: explicit path > default locations > defaults.
/// Environment overrides are applied on top of whichever source won.
pub async fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let mut config = if let Some(path) = config_path {
        load_config_file(&path).await?
    } else {
        load_config_from_default_locations().await
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

/// First readable file wins; broken files are reported and skipped.
async fn load_config_from_default_locations() -> Config {
    for path in get_config_search_paths() {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path).await {
            Ok(config) => return config,
            Err(err) => {
                warn!(target: "config", path = %path.display(), "{err:#}");
            }
        }
    }

    debug!(target: "config", "no config file found, using defaults");
    Config::default()
}

/// Get list of paths to search for configuration files
pub fn get_config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".powerprompt.json")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("powerprompt").join("config.json"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".powerprompt.json"));
    }

    paths
}

/// Load configuration from a specific file
pub async fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    debug!(target: "config", path = %path.display(), blocks = config.blocks.len(), "loaded config");
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(value) = env::var(FINAL_SPACE_ENV) {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => config.final_space = true,
            "0" | "false" | "no" => config.final_space = false,
            other => warn!(target: "config", value = other, "ignoring {FINAL_SPACE_ENV}"),
        }
    }
}
