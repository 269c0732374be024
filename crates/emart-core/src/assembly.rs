//! Category list assembly.
//!
//! Builds the ordered category list once per picker from the built-in table,
//! the custom emojis, the include/exclude id lists and an optional emoji
//! filter. `Recent` and `Search` are prepended last.

use std::collections::HashMap;

use crate::category::{Category, RECENT_ID};
use crate::data::CategoryData;
use crate::emoji::{Emoji, EmojiIndex};
use crate::error::PickerError;

/// Predicate deciding which emojis a picker may show.
pub type EmojiFilter = Box<dyn Fn(&Emoji) -> bool>;

/// Inputs for [`assemble`].
pub struct AssemblyInput<'a> {
    pub builtin: &'a [CategoryData],
    /// Custom emojis, already tagged with their ids.
    pub custom: &'a [Emoji],
    pub include: &'a [String],
    pub exclude: &'a [String],
    pub filter: Option<&'a dyn Fn(&Emoji) -> bool>,
    pub index: &'a EmojiIndex,
    /// Forces `Recent` out regardless of include/exclude.
    pub hide_recent: bool,
}

/// The assembled, immutable category list plus its id → ordinal index.
#[derive(Debug, Clone)]
pub struct CategoryList {
    categories: Vec<Category>,
    ordinals: HashMap<String, usize>,
    /// False when the `Recent` category made it into the list.
    pub hide_recent: bool,
}

impl CategoryList {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn ordinal(&self, id: &str) -> Option<usize> {
        self.ordinals.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.ordinal(id).map(|ordinal| &self.categories[ordinal])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Category> {
        let ordinal = self.ordinal(id)?;
        self.categories.get_mut(ordinal)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// Name of the category marked `is_first`.
    pub fn first_label(&self) -> &str {
        self.categories
            .iter()
            .find(|category| category.is_first)
            .map_or("", |category| category.name.as_str())
    }
}

fn passes(id: &str, include: &[String], exclude: &[String]) -> bool {
    let included = include.is_empty() || include.iter().any(|i| i == id);
    let excluded = exclude.iter().any(|e| e == id);
    included && !excluded
}

/// Assembles the category list.
///
/// # Errors
/// Returns [`PickerError::NoCategories`] when no category survives filtering.
pub fn assemble(input: &AssemblyInput<'_>) -> Result<CategoryList, PickerError> {
    let mut candidates: Vec<Category> = input
        .builtin
        .iter()
        .map(|data| Category::new(data.id.clone(), data.name.clone(), data.emojis.clone()))
        .collect();

    if !input.custom.is_empty() {
        candidates.push(Category::custom(input.custom));
    }

    // Stable partial order: only ids ranked in `include` move relative to
    // each other. Unranked ids keep their original order.
    if !input.include.is_empty() {
        let rank = |id: &str| -> i64 {
            input
                .include
                .iter()
                .position(|i| i == id)
                .map_or(-1, |p| p as i64)
        };
        candidates.sort_by_key(|category| rank(&category.id));
    }

    let mut categories = Vec::with_capacity(candidates.len() + 2);
    for mut category in candidates {
        if !passes(&category.id, input.include, input.exclude) {
            continue;
        }

        if let Some(filter) = input.filter {
            let kept: Vec<_> = category
                .emoji_ids()
                .iter()
                .filter(|id| input.index.get(id).is_some_and(filter))
                .cloned()
                .collect();
            if kept.is_empty() {
                tracing::debug!(category = %category.id, "category emptied by emoji filter");
                continue;
            }
            category.emojis = Some(kept);
        }

        categories.push(category);
    }

    let recent_shown =
        !input.hide_recent && passes(RECENT_ID, input.include, input.exclude);
    if recent_shown {
        categories.insert(0, Category::recent());
    }

    let Some(first) = categories.first_mut() else {
        return Err(PickerError::NoCategories {
            include: input.include.to_vec(),
            exclude: input.exclude.to_vec(),
        });
    };
    first.is_first = true;

    categories.insert(0, Category::search());

    let ordinals = categories
        .iter()
        .enumerate()
        .map(|(ordinal, category)| (category.id.clone(), ordinal))
        .collect();

    tracing::info!(
        categories = categories.len(),
        recent = recent_shown,
        "assembled category list"
    );

    Ok(CategoryList {
        categories,
        ordinals,
        hide_recent: !recent_shown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{CUSTOM_ID, SEARCH_ID};
    use crate::emoji::{CustomEmoji, EmojiId};

    fn builtin() -> Vec<CategoryData> {
        vec![
            CategoryData {
                id: "people".to_string(),
                name: "Smileys & People".to_string(),
                emojis: vec![EmojiId::new("smile"), EmojiId::new("+1")],
            },
            CategoryData {
                id: "nature".to_string(),
                name: "Animals & Nature".to_string(),
                emojis: vec![EmojiId::new("dog")],
            },
            CategoryData {
                id: "flags".to_string(),
                name: "Flags".to_string(),
                emojis: vec![EmojiId::new("flag-us")],
            },
        ]
    }

    fn index() -> EmojiIndex {
        let mut index = EmojiIndex::default();
        for (id, native, skin) in [
            ("smile", "😄", false),
            ("+1", "👍", true),
            ("dog", "🐶", false),
            ("flag-us", "🇺🇸", false),
        ] {
            index.insert(Emoji {
                id: EmojiId::new(id),
                name: id.to_string(),
                native: native.to_string(),
                short_names: vec![id.to_string()],
                keywords: vec![],
                skin_variations: skin,
                custom: false,
                image_url: None,
                text: None,
            });
        }
        index
    }

    fn strings(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    fn run(include: &[&str], exclude: &[&str]) -> Result<CategoryList, PickerError> {
        let builtin = builtin();
        let index = index();
        let include = strings(include);
        let exclude = strings(exclude);
        assemble(&AssemblyInput {
            builtin: &builtin,
            custom: &[],
            include: &include,
            exclude: &exclude,
            filter: None,
            index: &index,
            hide_recent: false,
        })
    }

    #[test]
    fn test_default_order_has_search_then_recent() {
        let list = run(&[], &[]).unwrap();
        assert_eq!(list.ids(), vec!["search", "recent", "people", "nature", "flags"]);
        assert!(!list.hide_recent);
        assert_eq!(list.first_label(), "Recent");
    }

    #[test]
    fn test_include_orders_by_rank_and_drops_others() {
        let list = run(&["flags", "people"], &[]).unwrap();
        assert_eq!(list.ids(), vec!["search", "flags", "people"]);
        assert!(list.hide_recent);
        assert_eq!(list.first_label(), "Flags");
    }

    #[test]
    fn test_include_with_recent_keeps_recent_in_front() {
        let list = run(&["people", "recent"], &[]).unwrap();
        assert_eq!(list.ids(), vec!["search", "recent", "people"]);
        assert!(!list.hide_recent);
    }

    #[test]
    fn test_exclude_removes_categories_and_recent() {
        let list = run(&[], &["recent", "nature"]).unwrap();
        assert_eq!(list.ids(), vec!["search", "people", "flags"]);
        assert!(list.get("people").unwrap().is_first);
    }

    #[test]
    fn test_exactly_one_first_category() {
        let list = run(&[], &[]).unwrap();
        let firsts = list.categories().iter().filter(|c| c.is_first).count();
        assert_eq!(firsts, 1);
        assert_eq!(list.categories()[0].id, SEARCH_ID);
        assert!(list.categories()[1].is_first);
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let first = run(&["nature", "people"], &["flags"]).unwrap();
        let second = run(&["nature", "people"], &["flags"]).unwrap();
        assert_eq!(first.ids(), second.ids());
    }

    #[test]
    fn test_unknown_include_fails_fast() {
        let err = run(&["bogus"], &[]).unwrap_err();
        assert!(matches!(err, PickerError::NoCategories { .. }));
    }

    #[test]
    fn test_include_recent_only_is_valid() {
        let list = run(&["recent"], &[]).unwrap();
        assert_eq!(list.ids(), vec!["search", "recent"]);
    }

    #[test]
    fn test_filter_drops_emptied_categories() {
        let builtin = builtin();
        let index = index();
        let only_skin = |emoji: &Emoji| emoji.skin_variations;
        let list = assemble(&AssemblyInput {
            builtin: &builtin,
            custom: &[],
            include: &[],
            exclude: &[],
            filter: Some(&only_skin),
            index: &index,
            hide_recent: true,
        })
        .unwrap();

        assert_eq!(list.ids(), vec!["search", "people"]);
        assert_eq!(
            list.get("people").unwrap().emoji_ids(),
            &[EmojiId::new("+1")]
        );
    }

    #[test]
    fn test_filter_rejecting_everything_fails() {
        let builtin = builtin();
        let index = index();
        let nothing = |_: &Emoji| false;
        let result = assemble(&AssemblyInput {
            builtin: &builtin,
            custom: &[],
            include: &[],
            exclude: &[],
            filter: Some(&nothing),
            index: &index,
            hide_recent: true,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_category_appended() {
        let builtin = builtin();
        let mut index = index();
        let custom = CustomEmoji {
            name: "Octocat".to_string(),
            short_names: vec!["octocat".to_string()],
            ..Default::default()
        }
        .to_emoji()
        .unwrap();
        index.insert(custom.clone());

        let list = assemble(&AssemblyInput {
            builtin: &builtin,
            custom: std::slice::from_ref(&custom),
            include: &[],
            exclude: &[],
            filter: None,
            index: &index,
            hide_recent: false,
        })
        .unwrap();

        assert_eq!(list.ids().last(), Some(&CUSTOM_ID));
        assert_eq!(list.ordinal(CUSTOM_ID), Some(list.len() - 1));
    }

    #[test]
    fn test_hide_recent_overrides_include() {
        let builtin = builtin();
        let index = index();
        let include = strings(&["recent", "people"]);
        let list = assemble(&AssemblyInput {
            builtin: &builtin,
            custom: &[],
            include: &include,
            exclude: &[],
            filter: None,
            index: &index,
            hide_recent: true,
        })
        .unwrap();
        assert_eq!(list.ids(), vec!["search", "people"]);
        assert!(list.hide_recent);
    }
}
