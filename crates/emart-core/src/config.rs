//! Configuration management for emart.
//!
//! Loads configuration from ${EMART_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::emoji::{CustomEmoji, EmojiId, SkinTone};
use crate::i18n::I18nOverrides;
use crate::picker::PickerOptions;
use crate::search::DEFAULT_MAX_RESULTS;
use crate::section::DEFAULT_PER_LINE;

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for emart configuration and state.
    //!
    //! EMART_HOME resolution order:
    //! 1. EMART_HOME environment variable (if set)
    //! 2. ~/.config/emart (default)

    use std::path::PathBuf;

    /// Returns the emart home directory.
    pub fn emart_home() -> PathBuf {
        if let Ok(home) = std::env::var("EMART_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("emart")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        emart_home().join("config.toml")
    }

    /// Returns the path of the preference store (skin tone, usage counts).
    pub fn state_path() -> PathBuf {
        emart_home().join("state.json")
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> PathBuf {
        emart_home().join("logs")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub per_line: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    pub hide_recent: bool,
    pub recent: Option<Vec<String>>,
    pub skin: Option<SkinTone>,
    pub reference_offset: u32,
    pub max_search_results: usize,
    pub close_on_select: bool,
    pub copy_to_clipboard: bool,
    pub data_path: Option<PathBuf>,
    pub i18n: I18nOverrides,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<CustomEmoji>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_line: DEFAULT_PER_LINE,
            include: Vec::new(),
            exclude: Vec::new(),
            hide_recent: false,
            recent: None,
            skin: None,
            reference_offset: 0,
            max_search_results: DEFAULT_MAX_RESULTS,
            close_on_select: true,
            copy_to_clipboard: false,
            data_path: None,
            i18n: I18nOverrides::default(),
            custom: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Builds picker options. The emoji filter is left to the caller.
    pub fn to_options(&self) -> PickerOptions {
        PickerOptions {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            custom: self.custom.clone(),
            hide_recent: self.hide_recent,
            recent: self
                .recent
                .as_ref()
                .map(|ids| ids.iter().map(|id| EmojiId::new(id.as_str())).collect()),
            filter: None,
            per_line: self.per_line,
            reference_offset: self.reference_offset,
            max_search_results: self.max_search_results,
            skin: self.skin,
            i18n: self.i18n.clone(),
        }
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename).
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
