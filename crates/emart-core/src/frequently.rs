//! Usage counts backing the `Recent` category.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::emoji::EmojiId;
use crate::store::PreferenceStore;

/// Rows of the `Recent` grid.
pub const RECENT_ROWS: usize = 4;

const KEY_FREQUENTLY: &str = "frequently";
const KEY_LAST: &str = "last";

/// Shown before anything was ever picked, most popular first.
pub const DEFAULTS: [&str; 16] = [
    "+1",
    "grinning",
    "kissing_heart",
    "heart_eyes",
    "laughing",
    "stuck_out_tongue_winking_eye",
    "sweat_smile",
    "joy",
    "scream",
    "disappointed",
    "unamused",
    "weary",
    "sob",
    "sunglasses",
    "heart",
    "poop",
];

/// Ranks emojis by use.
pub trait FrequencyStore {
    fn add(&mut self, id: &EmojiId);
    /// At most `max` ids, most used first.
    fn get(&self, max: usize) -> Vec<EmojiId>;
    fn persist(&self, prefs: &mut dyn PreferenceStore) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Usage {
    count: u32,
    /// Monotonic stamp of the last use.
    #[serde(default)]
    stamp: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Frequently {
    usage: BTreeMap<EmojiId, Usage>,
    last: Option<EmojiId>,
    clock: u64,
}

impl Frequently {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores counts from `prefs`. Unreadable entries are discarded.
    pub fn load(prefs: &dyn PreferenceStore) -> Self {
        let usage: BTreeMap<EmojiId, Usage> = prefs
            .get(KEY_FREQUENTLY)
            .and_then(|value| match serde_json::from_value(value) {
                Ok(usage) => Some(usage),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable usage counts");
                    None
                }
            })
            .unwrap_or_default();
        let last = prefs
            .get(KEY_LAST)
            .and_then(|value| serde_json::from_value(value).ok());
        let clock = usage.values().map(|u| u.stamp).max().unwrap_or(0);

        Self { usage, last, clock }
    }

    fn seed(&mut self) {
        let total = DEFAULTS.len() as u32;
        for (rank, id) in DEFAULTS.iter().enumerate() {
            self.usage.insert(
                EmojiId::new(*id),
                Usage {
                    count: total - rank as u32,
                    stamp: 0,
                },
            );
        }
    }
}

impl FrequencyStore for Frequently {
    fn add(&mut self, id: &EmojiId) {
        if self.usage.is_empty() {
            self.seed();
        }
        self.clock += 1;
        let usage = self.usage.entry(id.clone()).or_default();
        usage.count += 1;
        usage.stamp = self.clock;
        self.last = Some(id.clone());
    }

    fn get(&self, max: usize) -> Vec<EmojiId> {
        if self.usage.is_empty() {
            return DEFAULTS.iter().take(max).map(|id| EmojiId::new(*id)).collect();
        }

        let mut ranked: Vec<(&EmojiId, &Usage)> = self.usage.iter().collect();
        ranked.sort_by(|(a_id, a), (b_id, b)| {
            b.count
                .cmp(&a.count)
                .then(b.stamp.cmp(&a.stamp))
                .then(a_id.cmp(b_id))
        });

        let mut ids: Vec<EmojiId> = ranked
            .into_iter()
            .take(max)
            .map(|(id, _)| id.clone())
            .collect();

        if let Some(last) = &self.last
            && max > 0
            && !ids.contains(last)
        {
            if ids.len() >= max {
                ids.pop();
            }
            ids.push(last.clone());
        }

        ids
    }

    fn persist(&self, prefs: &mut dyn PreferenceStore) -> Result<()> {
        let usage = serde_json::to_value(&self.usage).context("Failed to encode usage counts")?;
        prefs.set(KEY_FREQUENTLY, usage)?;
        if let Some(last) = &self.last {
            prefs.set(KEY_LAST, serde_json::Value::String(last.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn ids(values: &[&str]) -> Vec<EmojiId> {
        values.iter().map(|v| EmojiId::new(*v)).collect()
    }

    #[test]
    fn test_empty_table_returns_defaults() {
        let store = Frequently::new();
        assert_eq!(store.get(3), ids(&["+1", "grinning", "kissing_heart"]));
        assert_eq!(store.get(100).len(), DEFAULTS.len());
    }

    #[test]
    fn test_first_add_seeds_defaults() {
        let mut store = Frequently::new();
        store.add(&EmojiId::new("joy"));

        // joy: 9 + 1 = 10, ahead of sweat_smile on recency.
        let top = store.get(8);
        assert_eq!(top.first(), Some(&EmojiId::new("+1")));
        assert!(top.contains(&EmojiId::new("joy")));
    }

    #[test]
    fn test_counts_rank_emojis() {
        let mut store = Frequently::new();
        for _ in 0..20 {
            store.add(&EmojiId::new("tada"));
        }
        assert_eq!(store.get(1), ids(&["tada"]));
    }

    #[test]
    fn test_last_used_is_always_included() {
        let mut store = Frequently::new();
        store.add(&EmojiId::new("rocket"));

        let top = store.get(4);
        assert_eq!(top.len(), 4);
        assert_eq!(top.last(), Some(&EmojiId::new("rocket")));
    }

    #[test]
    fn test_recency_breaks_ties() {
        let mut store = Frequently::new();
        store.add(&EmojiId::new("a"));
        store.add(&EmojiId::new("b"));
        let top = store.get(DEFAULTS.len() + 2);
        let a = top.iter().position(|id| id.as_str() == "a").unwrap();
        let b = top.iter().position(|id| id.as_str() == "b").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_persist_and_load() {
        let mut prefs = MemoryStore::new();
        let mut store = Frequently::new();
        store.add(&EmojiId::new("tada"));
        store.add(&EmojiId::new("tada"));
        store.persist(&mut prefs).unwrap();

        let restored = Frequently::load(&prefs);
        assert_eq!(restored.get(20), store.get(20));

        let mut restored = restored;
        restored.add(&EmojiId::new("tada"));
        assert_eq!(restored.get(2), ids(&["+1", "tada"]));
    }

    #[test]
    fn test_load_discards_garbage() {
        let mut prefs = MemoryStore::new();
        prefs
            .set(KEY_FREQUENTLY, serde_json::json!("garbage"))
            .unwrap();
        let store = Frequently::load(&prefs);
        assert_eq!(store.get(2), ids(&["+1", "grinning"]));
    }
}
