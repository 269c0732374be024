//! Category model and the synthetic `Recent`/`Search`/`Custom` categories.

use crate::emoji::{Emoji, EmojiId};

pub const RECENT_ID: &str = "recent";
pub const SEARCH_ID: &str = "search";
pub const CUSTOM_ID: &str = "custom";

/// A named, ordered group of emojis rendered as one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    /// Display label. Also the key of the "selected" label.
    pub name: String,
    /// `None` until populated (search results, recent usage).
    pub emojis: Option<Vec<EmojiId>>,
    /// False keeps the category out of the anchor bar.
    pub is_anchor: bool,
    pub is_first: bool,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, emojis: Vec<EmojiId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emojis: Some(emojis),
            is_anchor: true,
            is_first: false,
        }
    }

    /// Fresh `Recent` category. Never shared between pickers.
    pub fn recent() -> Self {
        Self {
            id: RECENT_ID.to_string(),
            name: "Recent".to_string(),
            emojis: None,
            is_anchor: true,
            is_first: false,
        }
    }

    /// Fresh `Search` pseudo-category.
    pub fn search() -> Self {
        Self {
            id: SEARCH_ID.to_string(),
            name: "Search".to_string(),
            emojis: None,
            is_anchor: false,
            is_first: false,
        }
    }

    /// `Custom` category built from already-tagged custom emojis.
    pub fn custom(emojis: &[Emoji]) -> Self {
        Self::new(
            CUSTOM_ID,
            "Custom",
            emojis.iter().map(|emoji| emoji.id.clone()).collect(),
        )
    }

    pub fn is_search(&self) -> bool {
        self.id == SEARCH_ID
    }

    pub fn is_recent(&self) -> bool {
        self.id == RECENT_ID
    }

    /// Number of emojis currently held (0 when unpopulated).
    pub fn len(&self) -> usize {
        self.emojis.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn emoji_ids(&self) -> &[EmojiId] {
        self.emojis.as_deref().unwrap_or(&[])
    }
}
