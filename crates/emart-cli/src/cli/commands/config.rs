//! Config command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use emart_core::config::{Config, paths};

pub fn path(explicit: Option<&Path>) {
    match explicit {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", paths::config_path().display()),
    }
}

pub fn init(explicit: Option<&Path>) -> Result<()> {
    let config_path = explicit.map_or_else(paths::config_path, Path::to_path_buf);
    Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}
