//! User-facing strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const CATEGORY_LABELS: [(&str, &str); 11] = [
    ("search", "Search Results"),
    ("recent", "Frequently Used"),
    ("people", "Smileys & People"),
    ("nature", "Animals & Nature"),
    ("foods", "Food & Drink"),
    ("activity", "Activity"),
    ("places", "Travel & Places"),
    ("objects", "Objects"),
    ("symbols", "Symbols"),
    ("flags", "Flags"),
    ("custom", "Custom"),
];

/// Resolved strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18n {
    pub search: String,
    pub notfound: String,
    pub categories: BTreeMap<String, String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            search: "Search".to_string(),
            notfound: "No Emoji Found".to_string(),
            categories: CATEGORY_LABELS
                .iter()
                .map(|(id, label)| (id.to_string(), label.to_string()))
                .collect(),
        }
    }
}

impl I18n {
    /// Defaults with `overrides` merged on top.
    pub fn with_overrides(overrides: &I18nOverrides) -> Self {
        let mut i18n = Self::default();
        i18n.merge(overrides);
        i18n
    }

    pub fn merge(&mut self, overrides: &I18nOverrides) {
        if let Some(search) = &overrides.search {
            self.search.clone_from(search);
        }
        if let Some(notfound) = &overrides.notfound {
            self.notfound.clone_from(notfound);
        }
        for (id, label) in &overrides.categories {
            self.categories.insert(id.clone(), label.clone());
        }
    }

    pub fn category_label(&self, id: &str) -> Option<&str> {
        self.categories.get(id).map(String::as_str)
    }
}

/// Partial strings from config `[i18n]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nOverrides {
    pub search: Option<String>,
    pub notfound: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, String>,
}
