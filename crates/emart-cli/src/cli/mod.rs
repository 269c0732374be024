//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use emart_core::config::{self, Config};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "emart")]
#[command(version)]
#[command(about = "Terminal emoji picker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: $EMART_HOME/config.toml)
    #[arg(long, global = true, env = "EMART_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    picker: PickerArgs,
}

/// Overrides for the config file.
#[derive(clap::Args, Debug, Clone, Default)]
struct PickerArgs {
    /// Category ids to show, in this order (comma-separated)
    #[arg(long, global = true, value_delimiter = ',', value_name = "IDS")]
    include: Vec<String>,

    /// Category ids to leave out (comma-separated)
    #[arg(long, global = true, value_delimiter = ',', value_name = "IDS")]
    exclude: Vec<String>,

    /// Emojis per grid row
    #[arg(long, global = true, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    per_line: Option<u16>,

    /// Hide the "Frequently Used" category
    #[arg(long = "no-recent", global = true)]
    no_recent: bool,

    /// Copy the picked emoji to the clipboard
    #[arg(long, global = true)]
    copy: bool,

    /// Keep the picker open after a pick
    #[arg(long = "keep-open")]
    keep_open: bool,
}

impl PickerArgs {
    fn apply(&self, config: &mut Config) {
        if !self.include.is_empty() {
            config.include.clone_from(&self.include);
        }
        if !self.exclude.is_empty() {
            config.exclude.clone_from(&self.exclude);
        }
        if let Some(per_line) = self.per_line {
            config.per_line = usize::from(per_line);
        }
        if self.no_recent {
            config.hide_recent = true;
        }
        if self.copy {
            config.copy_to_clipboard = true;
        }
        if self.keep_open {
            config.close_on_select = false;
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print emojis matching a query
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum number of results
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,
    },
    /// List the categories the picker would show
    Categories,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write a commented default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging();

    // config commands must work with a broken config file
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path(cli.config.as_deref());
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(cli.config.as_deref()),
        };
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("load config")?;
    cli.picker.apply(&mut config);

    // default to the interactive picker
    match cli.command {
        None => commands::pick::run(&config),
        Some(Commands::Search { query, limit }) => {
            commands::search::run(&config, &query, limit)
        }
        Some(Commands::Categories) => commands::categories::run(&config),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

/// Logs to a daily file under `$EMART_HOME/logs`; the terminal belongs to the
/// picker. Filter: `EMART_LOG`, then `RUST_LOG`, then `warn`.
fn init_logging() -> Option<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("emart")
        .filename_suffix("log")
        .build(config::paths::logs_dir())
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("EMART_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .ok()?;
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "emart",
            "--include",
            "flags,people",
            "--per-line",
            "6",
            "--no-recent",
            "--copy",
        ]);
        let mut config = Config::default();
        cli.picker.apply(&mut config);

        assert_eq!(config.include, vec!["flags", "people"]);
        assert_eq!(config.per_line, 6);
        assert!(config.hide_recent);
        assert!(config.copy_to_clipboard);
        assert!(config.close_on_select);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::parse_from(["emart", "categories"]);
        let mut config = Config {
            exclude: vec!["flags".to_string()],
            per_line: 7,
            ..Default::default()
        };
        cli.picker.apply(&mut config);

        assert_eq!(config.exclude, vec!["flags"]);
        assert_eq!(config.per_line, 7);
        assert!(!config.hide_recent);
    }

    #[test]
    fn test_per_line_zero_is_rejected() {
        assert!(Cli::try_parse_from(["emart", "--per-line", "0"]).is_err());
    }
}
