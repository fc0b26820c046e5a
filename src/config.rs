//! Configuration for toolcall-f1.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (TOOLCALL_F1_MAX_INPUT_BYTES)
//! 2. Config file (TOOLCALL_F1_CONFIG, or .toolcall-f1/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - TOOLCALL_F1_CONFIG names the file explicitly
//! - Otherwise searches current directory and parents for .toolcall-f1/config.yaml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::InputLimits;

pub const CONFIG_ENV: &str = "TOOLCALL_F1_CONFIG";
pub const MAX_INPUT_BYTES_ENV: &str = "TOOLCALL_F1_MAX_INPUT_BYTES";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    pub max_input_bytes: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Input limits
    pub limits: InputLimits,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }

    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".toolcall-f1").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge file and environment settings over the defaults
fn resolve(
    config_file: Option<PathBuf>,
    file: Option<&ConfigFile>,
    env_max_input: Option<String>,
) -> Result<ResolvedConfig> {
    let mut limits = InputLimits::default();

    if let Some(max) = file
        .and_then(|f| f.limits.as_ref())
        .and_then(|l| l.max_input_bytes)
    {
        limits.max_input_bytes = max;
    }

    if let Some(raw) = env_max_input {
        limits.max_input_bytes = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", MAX_INPUT_BYTES_ENV, raw))?;
    }

    Ok(ResolvedConfig { config_file, limits })
}

/// Load configuration from all sources
pub fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    let file = match config_file {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    resolve(config_file, file.as_ref(), std::env::var(MAX_INPUT_BYTES_ENV).ok())
}
