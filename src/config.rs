use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::version::RenderMode;
use crate::version::bump::DEFAULT_PRERELEASE_BASE;

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "SEMTAG_LOG";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SemtagConfig {
    pub output: OutputConfig,
    pub prerelease: PrereleaseConfig,
}

/// How versions are printed
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    pub mode: RenderMode,
    /// Print JSON documents instead of plain lines
    pub json: bool,
}

/// Prerelease-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PrereleaseConfig {
    pub base: String,
}

impl Default for PrereleaseConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_PRERELEASE_BASE.to_string(),
        }
    }
}

impl SemtagConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and a missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!("No config at {:?}, using defaults", path);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Returns the path to the config directory for semtag.
/// Uses $XDG_CONFIG_HOME/semtag if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/semtag,
/// or ./semtag if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("semtag")
}
