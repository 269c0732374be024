//! Non-interactive search.

use anyhow::Result;
use emart_core::Config;
use emart_core::category::SEARCH_ID;

pub fn run(config: &Config, query: &str, limit: Option<usize>) -> Result<()> {
    let mut config = config.clone();
    if let Some(limit) = limit {
        config.max_search_results = limit;
    }
    let mut picker = super::open_picker(&config)?;
    picker.search(query);

    let ids = picker
        .category(SEARCH_ID)
        .map(|search| search.emoji_ids().to_vec())
        .unwrap_or_default();
    if ids.is_empty() {
        eprintln!("{}", picker.i18n().notfound);
        return Ok(());
    }

    let skin = picker.skin();
    for id in ids {
        if let Some(emoji) = picker.emoji(&id) {
            println!("{}\t{}\t{}", emoji.glyph(skin), emoji.colons(), emoji.name);
        }
    }
    Ok(())
}
