//! Fuzzy emoji search.

use std::collections::HashSet;

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::category::Category;
use crate::emoji::{EmojiId, EmojiIndex};

/// Default cap on search results.
pub const DEFAULT_MAX_RESULTS: usize = 75;

#[derive(Debug, Clone)]
struct Candidate {
    id: EmojiId,
    short_names: Vec<String>,
    /// Id, name, short names and keywords.
    haystacks: Vec<String>,
}

impl Candidate {
    /// 2 for an exact short name, 1 for a short name prefix, 0 otherwise.
    fn tier(&self, needle: &str) -> u8 {
        let names = || self.short_names.iter().map(|name| name.to_lowercase());
        if names().any(|name| name == needle) {
            2
        } else if names().any(|name| name.starts_with(needle)) {
            1
        } else {
            0
        }
    }
}

/// Search pool built from the emojis a picker actually shows.
#[derive(Debug, Clone)]
pub struct EmojiSearch {
    candidates: Vec<Candidate>,
    max_results: usize,
}

impl EmojiSearch {
    /// Builds the pool in category order. `Recent` and `Search` are skipped.
    pub fn new(categories: &[Category], index: &EmojiIndex, max_results: usize) -> Self {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        let ids = categories
            .iter()
            .filter(|category| !category.is_search() && !category.is_recent())
            .flat_map(|category| category.emoji_ids());
        for id in ids {
            if !seen.insert(id.clone()) {
                continue;
            }
            let Some(emoji) = index.get(id) else {
                continue;
            };

            let mut haystacks = vec![emoji.id.to_string(), emoji.name.clone()];
            haystacks.extend(emoji.short_names.iter().cloned());
            haystacks.extend(emoji.keywords.iter().cloned());
            haystacks.dedup();

            candidates.push(Candidate {
                id: id.clone(),
                short_names: emoji.short_names.clone(),
                haystacks,
            });
        }

        Self {
            candidates,
            max_results: max_results.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns matching ids, best first, or `None` for a blank query.
    pub fn search(&self, query: &str) -> Option<Vec<EmojiId>> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
        let mut buf = Vec::new();

        let needle = query.to_lowercase();
        let mut scored: Vec<(u8, u32, usize)> = self
            .candidates
            .iter()
            .enumerate()
            .filter_map(|(position, candidate)| {
                candidate
                    .haystacks
                    .iter()
                    .filter_map(|haystack| {
                        pattern.score(Utf32Str::new(haystack, &mut buf), &mut matcher)
                    })
                    .max()
                    .map(|score| (candidate.tier(&needle), score, position))
            })
            .collect();

        // Stable: equal ranks keep category order.
        scored.sort_by_key(|(tier, score, _)| {
            (std::cmp::Reverse(*tier), std::cmp::Reverse(*score))
        });

        Some(
            scored
                .into_iter()
                .take(self.max_results)
                .map(|(_, _, position)| self.candidates[position].id.clone())
                .collect(),
        )
    }
}
