//! Optional config file for UI preferences and startup behavior.
//!
//! Loaded from `$XDG_CONFIG_HOME/learntrack/config.toml` (falling back to
//! `~/.config/learntrack/config.toml`) unless a path is given. A missing file
//! yields the defaults; a malformed file is an error so typos do not silently
//! disappear.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level config file structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub data: DataSettings,
}

/// `[ui]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiSettings {
    /// Force plain output regardless of TTY detection
    #[serde(default)]
    pub plain: bool,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[serde(default)]
    pub ascii: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            plain: false,
            no_color: false,
            ascii: false,
        }
    }
}

/// `[data]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSettings {
    /// Load the bundled sample students and courses on startup
    #[serde(default = "default_true")]
    pub sample_data: bool,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { sample_data: true }
    }
}

fn default_true() -> bool {
    true
}

/// Resolve the default config file path from XDG conventions.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("learntrack").join("config.toml"));
        }
    }
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("learntrack")
            .join("config.toml")
    })
}

/// Load config from the given path, or the default location if `None`.
///
/// A nonexistent file is not an error; it just means defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
    Ok(config)
}
