//! Prints the assembled category list.

use anyhow::Result;
use emart_core::Config;

pub fn run(config: &Config) -> Result<()> {
    let picker = super::open_picker(config)?;
    for category in picker.categories().iter().filter(|c| !c.is_search()) {
        println!("{}\t{}\t{}", category.id, category.name, category.len());
    }
    Ok(())
}
