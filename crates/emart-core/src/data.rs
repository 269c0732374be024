//! Built-in category table.
//!
//! The table is embedded from `data/emoji.json` at compile time. A file with
//! the same shape can be loaded instead (config `data_path`).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::emoji::{Emoji, EmojiId, EmojiIndex};

fn builtin_json() -> &'static str {
    include_str!("../data/emoji.json")
}

#[derive(Debug, Deserialize)]
struct RawData {
    categories: Vec<RawCategory>,
    emojis: HashMap<String, RawEmoji>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    id: String,
    name: String,
    emojis: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawEmoji {
    name: String,
    native: String,
    #[serde(default)]
    short_names: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    skin_variations: bool,
}

/// One built-in category as provided by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryData {
    pub id: String,
    pub name: String,
    pub emojis: Vec<EmojiId>,
}

/// Category table plus the emoji records it references.
#[derive(Debug, Clone)]
pub struct EmojiData {
    pub categories: Vec<CategoryData>,
    pub index: EmojiIndex,
}

impl EmojiData {
    /// Parses the embedded table.
    pub fn builtin() -> Result<Self> {
        Self::from_json(builtin_json()).context("Failed to parse built-in emoji data")
    }

    /// Loads a table from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read emoji data from {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse emoji data from {}", path.display()))
    }

    /// Loads from `path` when given, otherwise the embedded table.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawData = serde_json::from_str(json)?;

        let mut index = EmojiIndex::default();
        for (id, emoji) in raw.emojis {
            let mut short_names = emoji.short_names;
            if short_names.first() != Some(&id) {
                short_names.insert(0, id.clone());
            }
            index.insert(Emoji {
                id: EmojiId::new(id),
                name: emoji.name,
                native: emoji.native,
                short_names,
                keywords: emoji.keywords,
                skin_variations: emoji.skin_variations,
                custom: false,
                image_url: None,
                text: None,
            });
        }

        let categories = raw
            .categories
            .into_iter()
            .map(|category| {
                let emojis = category
                    .emojis
                    .into_iter()
                    .map(EmojiId::new)
                    .filter(|id| {
                        let known = index.contains(id);
                        if !known {
                            tracing::warn!(category = %category.id, emoji = %id, "unknown emoji in category table");
                        }
                        known
                    })
                    .collect();
                CategoryData {
                    id: category.id,
                    name: category.name,
                    emojis,
                }
            })
            .collect();

        Ok(Self { categories, index })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_builtin_table_parses() {
        let data = EmojiData::builtin().unwrap();
        let ids: Vec<&str> = data.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "people", "nature", "foods", "activity", "places", "objects", "symbols", "flags"
            ]
        );
        assert!(data.index.contains(&EmojiId::new("+1")));
        assert!(data.index.contains(&EmojiId::new("poop")));
    }

    #[test]
    fn test_builtin_categories_reference_known_emojis() {
        let data = EmojiData::builtin().unwrap();
        for category in &data.categories {
            assert!(!category.emojis.is_empty(), "{} is empty", category.id);
            for id in &category.emojis {
                assert!(data.index.contains(id), "{id} missing");
            }
        }
    }

    #[test]
    fn test_unknown_emoji_ids_are_dropped() {
        let json = r#"{
            "categories": [{"id": "people", "name": "People", "emojis": ["smile", "nope"]}],
            "emojis": {"smile": {"name": "Smile", "native": "😄"}}
        }"#;
        let data = EmojiData::from_json(json).unwrap();
        assert_eq!(data.categories[0].emojis, vec![EmojiId::new("smile")]);
        let smile = data.index.get(&EmojiId::new("smile")).unwrap();
        assert_eq!(smile.short_names, vec!["smile".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("emoji.json");
        fs::write(
            &path,
            r#"{"categories": [], "emojis": {"x": {"name": "X", "native": "❌"}}}"#,
        )
        .unwrap();

        let data = EmojiData::load(Some(&path)).unwrap();
        assert!(data.categories.is_empty());
        assert_eq!(data.index.len(), 1);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = EmojiData::load_from(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }
}
