//! Interactive picker.

use anyhow::Result;
use emart_core::Config;
use emart_tui::TuiOptions;

pub fn run(config: &Config) -> Result<()> {
    let picker = super::open_picker(config)?;
    let options = TuiOptions {
        close_on_select: config.close_on_select,
        copy_to_clipboard: config.copy_to_clipboard,
    };

    let picked = emart_tui::run_picker(picker, options)?;
    for glyph in picked {
        println!("{glyph}");
    }
    Ok(())
}
