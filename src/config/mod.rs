mod env;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn};

// Re-export existing config types
pub use crate::upstream::UpstreamConfig;

/// Complete bridge configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub template: TemplateConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3334".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Facility template source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateConfig {
    /// JSON SpaceAPI document; the built-in Metalab template when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<BridgeConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path))?;
    parse_config(path, &contents)
}

/// Like [`load_config`], but a missing file yields the defaults.
///
/// Any other failure (unreadable file, malformed TOML, unknown values) is
/// returned as an error.
pub fn load_config_or_default(path: &str) -> Result<BridgeConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let config = parse_config(path, &contents)?;
            info!(path = %path, "Configuration loaded");
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path, "No config file, using defaults");
            Ok(BridgeConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read config {}", path)),
    }
}

fn parse_config(path: &str, contents: &str) -> Result<BridgeConfig> {
    toml::from_str(contents).with_context(|| format!("Failed to parse config {}", path))
}
