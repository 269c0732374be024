//! Emoji records and identifiers.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable emoji identifier (the primary short name, e.g. `"+1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiId(String);

impl EmojiId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmojiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmojiId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single emoji record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub id: EmojiId,
    pub name: String,
    /// Native glyph. Empty for custom emojis that only carry an image.
    pub native: String,
    pub short_names: Vec<String>,
    pub keywords: Vec<String>,
    pub skin_variations: bool,
    /// True for entries supplied through the custom emoji list.
    pub custom: bool,
    pub image_url: Option<String>,
    /// Fallback text shown when there is no native glyph.
    pub text: Option<String>,
}

impl Emoji {
    /// Returns the glyph for display, applying the skin tone when supported.
    pub fn glyph(&self, skin: SkinTone) -> String {
        if self.native.is_empty() {
            return self
                .text
                .clone()
                .unwrap_or_else(|| format!(":{}:", self.id));
        }

        match skin.modifier() {
            Some(modifier) if self.skin_variations => {
                let mut glyph = self.native.clone();
                glyph.push(modifier);
                glyph
            }
            _ => self.native.clone(),
        }
    }

    /// Returns the `:short_name:` colon form.
    pub fn colons(&self) -> String {
        format!(":{}:", self.id)
    }
}

/// Custom emoji entry as supplied by the host (config `[[custom]]` tables).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEmoji {
    pub name: String,
    pub short_names: Vec<String>,
    /// Native glyph or replacement text.
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
}

impl CustomEmoji {
    /// Tags the entry with an id derived from its first short name.
    ///
    /// Returns `None` when the entry has no short names.
    pub fn to_emoji(&self) -> Option<Emoji> {
        let first = self.short_names.first()?.trim();
        if first.is_empty() {
            return None;
        }

        Some(Emoji {
            id: EmojiId::new(first),
            name: self.name.clone(),
            native: String::new(),
            short_names: self.short_names.clone(),
            keywords: self.keywords.clone(),
            skin_variations: false,
            custom: true,
            image_url: self.image_url.clone(),
            text: self.text.clone(),
        })
    }
}

/// Fitzpatrick skin tone (1 = default yellow, 2..=6 = modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkinTone(u8);

impl SkinTone {
    pub const DEFAULT: SkinTone = SkinTone(1);

    pub fn new(tone: u8) -> Option<Self> {
        (1..=6).contains(&tone).then_some(Self(tone))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the next tone, wrapping from 6 back to 1.
    #[must_use]
    pub fn cycle(self) -> Self {
        Self(self.0 % 6 + 1)
    }

    /// Fitzpatrick modifier appended for this tone (none for tone 1).
    pub fn modifier(self) -> Option<char> {
        match self.0 {
            2 => Some('\u{1F3FB}'),
            3 => Some('\u{1F3FC}'),
            4 => Some('\u{1F3FD}'),
            5 => Some('\u{1F3FE}'),
            6 => Some('\u{1F3FF}'),
            _ => None,
        }
    }
}

impl Default for SkinTone {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for SkinTone {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("skin tone must be between 1 and 6, got {value}"))
    }
}

impl From<SkinTone> for u8 {
    fn from(tone: SkinTone) -> Self {
        tone.0
    }
}

/// Lookup table of every emoji known to one picker (built-ins plus custom).
#[derive(Debug, Clone, Default)]
pub struct EmojiIndex {
    emojis: HashMap<EmojiId, Emoji>,
}

impl EmojiIndex {
    pub fn get(&self, id: &EmojiId) -> Option<&Emoji> {
        self.emojis.get(id)
    }

    pub fn contains(&self, id: &EmojiId) -> bool {
        self.emojis.contains_key(id)
    }

    pub fn insert(&mut self, emoji: Emoji) {
        self.emojis.insert(emoji.id.clone(), emoji);
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumbs_up() -> Emoji {
        Emoji {
            id: EmojiId::new("+1"),
            name: "Thumbs Up Sign".to_string(),
            native: "👍".to_string(),
            short_names: vec!["+1".to_string(), "thumbsup".to_string()],
            keywords: vec![],
            skin_variations: true,
            custom: false,
            image_url: None,
            text: None,
        }
    }

    #[test]
    fn test_glyph_applies_skin_modifier() {
        let emoji = thumbs_up();
        assert_eq!(emoji.glyph(SkinTone::DEFAULT), "👍");
        assert_eq!(emoji.glyph(SkinTone::new(3).unwrap()), "👍\u{1F3FC}");
    }

    #[test]
    fn test_glyph_ignores_skin_without_variations() {
        let mut emoji = thumbs_up();
        emoji.skin_variations = false;
        assert_eq!(emoji.glyph(SkinTone::new(6).unwrap()), "👍");
    }

    #[test]
    fn test_custom_emoji_tagged_with_first_short_name() {
        let custom = CustomEmoji {
            name: "Octocat".to_string(),
            short_names: vec!["octocat".to_string(), "github".to_string()],
            text: None,
            keywords: vec!["github".to_string()],
            image_url: Some("https://example.com/octocat.png".to_string()),
        };

        let emoji = custom.to_emoji().unwrap();
        assert_eq!(emoji.id, EmojiId::new("octocat"));
        assert!(emoji.custom);
        assert_eq!(emoji.glyph(SkinTone::DEFAULT), ":octocat:");
    }

    #[test]
    fn test_custom_emoji_without_short_names_is_rejected() {
        let custom = CustomEmoji {
            name: "Nameless".to_string(),
            ..Default::default()
        };
        assert!(custom.to_emoji().is_none());
    }

    #[test]
    fn test_skin_tone_cycle_wraps() {
        assert_eq!(SkinTone::new(6).unwrap().cycle(), SkinTone::DEFAULT);
        assert_eq!(SkinTone::DEFAULT.cycle().value(), 2);
        assert!(SkinTone::new(0).is_none());
        assert!(SkinTone::new(7).is_none());
    }
}
