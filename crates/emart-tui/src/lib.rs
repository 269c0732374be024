//! Full-screen terminal front end for the emart picker.

pub mod common;
pub mod effects;
pub mod events;
pub mod grid;
pub mod render;
pub mod render_utils;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::mem;

use anyhow::Result;
use emart_core::Picker;
pub use runtime::TuiRuntime;
pub use state::{AppState, TuiOptions};

/// Runs the picker until the user quits or picks (with `close_on_select`).
///
/// Returns the picked glyphs in order.
pub fn run_picker(picker: Picker, options: TuiOptions) -> Result<Vec<String>> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The picker requires a terminal.\n\
             Use `emart search <QUERY>` for non-interactive lookups."
        );
    }

    let mut runtime = TuiRuntime::new(AppState::new(picker, options))?;
    let result = runtime.run();

    runtime.state.picker.teardown();
    let picked = mem::take(&mut runtime.state.picked);
    drop(runtime);

    result.map(|()| picked)
}
