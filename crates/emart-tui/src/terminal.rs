//! Terminal lifecycle management.
//!
//! The picker draws on stderr so stdout only carries the picked emojis.
//! Terminal state is restored on normal exit (via Drop) and on panic.

use std::io::{self, Stderr};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Enables raw mode, enters the alternate screen and creates the terminal.
///
/// Call `install_panic_hook()` first.
pub fn setup_terminal() -> Result<PickerTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stderr)).context("Failed to create terminal")
}

/// Enables bracketed paste (pasted text goes to the search query) and
/// mouse capture (hover, click and wheel).
pub fn enable_input_features() -> Result<()> {
    execute!(io::stderr(), EnableBracketedPaste, EnableMouseCapture)
        .context("Failed to enable input features")
}

pub fn disable_input_features() -> Result<()> {
    execute!(io::stderr(), DisableMouseCapture, DisableBracketedPaste)
        .context("Failed to disable input features")
}

/// Restores the terminal. Safe to call more than once.
pub fn restore_terminal() -> Result<()> {
    // Input features must go before raw mode.
    let _ = execute!(io::stderr(), DisableMouseCapture, DisableBracketedPaste);

    execute!(io::stderr(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")
}

/// Restores the terminal before the original hook prints the panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
