//! CLI command handlers.

pub mod categories;
pub mod config;
pub mod pick;
pub mod search;

use anyhow::{Context, Result};
use emart_core::config::paths;
use emart_core::{Config, EmojiData, FileStore, MemoryStore, Picker, PreferenceStore};

/// Builds a picker from the effective config.
///
/// Usage counts and the skin tone come from `$EMART_HOME/state.json`. An
/// unreadable state file is logged and replaced by an in-memory store.
pub(crate) fn open_picker(config: &Config) -> Result<Picker> {
    let data = EmojiData::load(config.data_path.as_deref()).context("load emoji data")?;

    let state_path = paths::state_path();
    let prefs: Box<dyn PreferenceStore> = match FileStore::open(&state_path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(
                path = %state_path.display(),
                error = %format!("{err:#}"),
                "ignoring unreadable state file"
            );
            Box::new(MemoryStore::new())
        }
    };

    Ok(Picker::with_store(&data, config.to_options(), prefs)?)
}
