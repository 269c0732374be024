//! Picker controller.
//!
//! Owns the assembled category list and wires scroll, anchor, search,
//! selection and hover events through the tracker. Mutations only flag the
//! layout dirty; the host calls [`Picker::layout_settled`] once per frame to
//! re-measure and apply deferred jumps.

use std::time::Instant;

use crate::assembly::{self, AssemblyInput, CategoryList, EmojiFilter};
use crate::category::{Category, RECENT_ID, SEARCH_ID};
use crate::data::EmojiData;
use crate::emoji::{CustomEmoji, Emoji, EmojiId, EmojiIndex, SkinTone};
use crate::error::PickerError;
use crate::frequently::{FrequencyStore, Frequently, RECENT_ROWS};
use crate::i18n::{I18n, I18nOverrides};
use crate::preview::PreviewState;
use crate::search::{DEFAULT_MAX_RESULTS, EmojiSearch};
use crate::section::{DEFAULT_PER_LINE, GridMetrics, Measurement, MeasurementArena, SectionSpec};
use crate::store::{MemoryStore, PreferenceStore};
use crate::tracker::{ScrollState, ScrollTracker, TrackedSection, jump_target};

const KEY_SKIN: &str = "skin";

/// Construction options.
pub struct PickerOptions {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub custom: Vec<CustomEmoji>,
    /// Never show `Recent`, whatever include/exclude say.
    pub hide_recent: bool,
    /// Fixed `Recent` content. The frequency store is left alone.
    pub recent: Option<Vec<EmojiId>>,
    pub filter: Option<EmojiFilter>,
    pub per_line: usize,
    /// Rows added to `scroll_top` before probing sections.
    pub reference_offset: u32,
    pub max_search_results: usize,
    /// Overrides the stored skin preference.
    pub skin: Option<SkinTone>,
    pub i18n: I18nOverrides,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            custom: Vec::new(),
            hide_recent: false,
            recent: None,
            filter: None,
            per_line: DEFAULT_PER_LINE,
            reference_offset: 0,
            max_search_results: DEFAULT_MAX_RESULTS,
            skin: None,
            i18n: I18nOverrides::default(),
        }
    }
}

/// Notifications for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    EmojiSelected(Emoji),
    /// The selected label changed.
    CategoryChanged(String),
    PreviewChanged(Option<EmojiId>),
}

#[derive(Debug, Clone, Copy, Default)]
struct Dirty {
    layout: bool,
    recent: bool,
}

fn section_specs(list: &CategoryList, search_active: bool) -> Vec<SectionSpec<'_>> {
    list.categories()
        .iter()
        .map(|category| SectionSpec {
            id: &category.id,
            len: category.len(),
            visible: category.is_search() == search_active,
            is_search: category.is_search(),
        })
        .collect()
}

pub struct Picker {
    list: CategoryList,
    index: EmojiIndex,
    filter: Option<EmojiFilter>,
    metrics: GridMetrics,
    arena: MeasurementArena,
    tracker: ScrollTracker,
    scroll: ScrollState,
    engine: EmojiSearch,
    selected: String,
    frequency: Box<dyn FrequencyStore>,
    prefs: Box<dyn PreferenceStore>,
    recent_override: Option<Vec<EmojiId>>,
    preview: PreviewState,
    skin: SkinTone,
    i18n: I18n,
    dirty: Dirty,
    /// Anchor jump waiting for the next frame boundary.
    pending_jump: Option<String>,
}

impl Picker {
    /// Picker with in-memory preferences.
    pub fn new(data: &EmojiData, options: PickerOptions) -> Result<Self, PickerError> {
        Self::with_store(data, options, Box::new(MemoryStore::new()))
    }

    /// Picker whose usage counts and skin tone live in `prefs`.
    pub fn with_store(
        data: &EmojiData,
        options: PickerOptions,
        prefs: Box<dyn PreferenceStore>,
    ) -> Result<Self, PickerError> {
        let frequency = Box::new(Frequently::load(prefs.as_ref()));
        Self::with_stores(data, options, frequency, prefs)
    }

    pub fn with_stores(
        data: &EmojiData,
        options: PickerOptions,
        frequency: Box<dyn FrequencyStore>,
        prefs: Box<dyn PreferenceStore>,
    ) -> Result<Self, PickerError> {
        let custom = options
            .custom
            .iter()
            .map(|entry| {
                entry.to_emoji().ok_or_else(|| PickerError::InvalidCustomEmoji {
                    name: entry.name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut index = data.index.clone();
        for emoji in &custom {
            if index.contains(&emoji.id) {
                return Err(PickerError::DuplicateCustomEmoji {
                    id: emoji.id.to_string(),
                });
            }
            index.insert(emoji.clone());
        }

        let mut list = assembly::assemble(&AssemblyInput {
            builtin: &data.categories,
            custom: &custom,
            include: &options.include,
            exclude: &options.exclude,
            filter: options.filter.as_deref(),
            index: &index,
            hide_recent: options.hide_recent,
        })?;

        let i18n = I18n::with_overrides(&options.i18n);
        for id in list.ids().into_iter().map(str::to_string).collect::<Vec<_>>() {
            if let (Some(label), Some(category)) = (i18n.category_label(&id), list.get_mut(&id)) {
                category.name = label.to_string();
            }
        }

        let skin = options.skin.unwrap_or_else(|| {
            prefs
                .get(KEY_SKIN)
                .and_then(|value| serde_json::from_value(value).ok())
                .unwrap_or_default()
        });

        let engine = EmojiSearch::new(list.categories(), &index, options.max_search_results);
        let selected = list.first_label().to_string();

        let mut picker = Self {
            list,
            index,
            filter: options.filter,
            metrics: GridMetrics::new(options.per_line),
            arena: MeasurementArena::default(),
            tracker: ScrollTracker::new(options.reference_offset),
            scroll: ScrollState::default(),
            engine,
            selected,
            frequency,
            prefs,
            recent_override: options.recent,
            preview: PreviewState::new(),
            skin,
            i18n,
            dirty: Dirty::default(),
            pending_jump: None,
        };
        picker.refresh_recent();
        picker.relayout();

        Ok(picker)
    }

    pub fn categories(&self) -> &[Category] {
        self.list.categories()
    }

    /// Categories shown in the anchor bar.
    pub fn anchors(&self) -> impl Iterator<Item = &Category> {
        self.categories().iter().filter(|category| category.is_anchor)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.list.get(id)
    }

    pub fn selected_label(&self) -> &str {
        &self.selected
    }

    /// The category whose name is the selected label.
    pub fn selected_category(&self) -> Option<&Category> {
        self.categories()
            .iter()
            .find(|category| category.name == self.selected)
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn measurement(&self, id: &str) -> Option<&Measurement> {
        self.arena.get(id)
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn emoji(&self, id: &EmojiId) -> Option<&Emoji> {
        self.index.get(id)
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn skin(&self) -> SkinTone {
        self.skin
    }

    pub fn preview(&self) -> Option<&Emoji> {
        self.preview.emoji()
    }

    pub fn hide_recent(&self) -> bool {
        self.list.hide_recent
    }

    pub fn search_active(&self) -> bool {
        self.list
            .get(SEARCH_ID)
            .is_some_and(|search| search.emojis.is_some())
    }

    /// Whether a category's section is currently laid out.
    pub fn is_visible(&self, category: &Category) -> bool {
        category.is_search() == self.search_active()
    }

    /// Visible categories in display order.
    pub fn visible_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories()
            .iter()
            .filter(|category| self.is_visible(category))
    }

    fn recent_capacity(&self) -> usize {
        self.metrics.per_line * RECENT_ROWS
    }

    fn shown(&self, id: &EmojiId) -> bool {
        self.index
            .get(id)
            .is_some_and(|emoji| self.filter.as_ref().is_none_or(|filter| filter(emoji)))
    }

    fn refresh_recent(&mut self) {
        if self.list.hide_recent {
            return;
        }

        let ids = match &self.recent_override {
            Some(ids) => ids.clone(),
            None => self.frequency.get(self.recent_capacity()),
        };
        let ids: Vec<EmojiId> = ids.into_iter().filter(|id| self.shown(id)).collect();

        if let Some(recent) = self.list.get_mut(RECENT_ID) {
            recent.emojis = Some(ids);
            self.dirty.recent = true;
        }
    }

    fn relayout(&mut self) {
        let specs = section_specs(&self.list, self.search_active());
        self.scroll.scroll_height = self.arena.layout(specs, &self.metrics);
        self.dirty = Dirty::default();
    }

    fn tracked_sections(&self) -> Vec<TrackedSection> {
        self.categories()
            .iter()
            .map(|category| {
                let measurement = self.arena.get(&category.id);
                let m = measurement.copied().unwrap_or_default();
                TrackedSection {
                    anchor: category.is_anchor,
                    visible: measurement.is_some() && self.is_visible(category),
                    top: m.top,
                    height: m.height,
                }
            })
            .collect()
    }

    fn run_tracker(&mut self) -> Vec<PickerEvent> {
        let sections = self.tracked_sections();
        let search = if self.search_active() {
            self.list.ordinal(SEARCH_ID)
        } else {
            None
        };

        let Some(active) = self.tracker.active_section(&sections, self.scroll, search) else {
            return Vec::new();
        };

        let name = self.categories()[active].name.clone();
        if name == self.selected {
            return Vec::new();
        }

        tracing::debug!(from = %self.selected, to = %name, scroll_top = self.scroll.scroll_top, "active category changed");
        self.selected.clone_from(&name);
        vec![PickerEvent::CategoryChanged(name)]
    }

    /// Records a new scroll position and updates the selected label.
    pub fn handle_scroll(&mut self, scroll_top: u32) -> Vec<PickerEvent> {
        self.scroll.scroll_top = scroll_top;
        self.run_tracker()
    }

    /// Scrolls by `delta` rows, clamped to the content.
    pub fn scroll_by(&mut self, delta: i32) -> Vec<PickerEvent> {
        let target = self
            .scroll
            .scroll_top
            .saturating_add_signed(delta)
            .min(self.scroll.max_scroll_top());
        if target == self.scroll.scroll_top {
            return Vec::new();
        }
        self.handle_scroll(target)
    }

    /// Jumps to the category `id`.
    ///
    /// While search is active the overlay is dismissed first and the jump
    /// waits for the next [`Picker::layout_settled`].
    pub fn handle_anchor_click(&mut self, id: &str) -> Vec<PickerEvent> {
        let Some(category) = self.list.get(id) else {
            tracing::debug!(category = id, "ignoring click on unknown anchor");
            return Vec::new();
        };
        if !category.is_anchor {
            tracing::debug!(category = id, "ignoring click on non-anchor category");
            return Vec::new();
        }

        if self.search_active() {
            let events = self.apply_search_results(None);
            self.pending_jump = Some(id.to_string());
            return events;
        }

        self.jump_to(id)
    }

    fn jump_to(&mut self, id: &str) -> Vec<PickerEvent> {
        let (Some(category), Some(measurement)) = (self.list.get(id), self.arena.get(id)) else {
            return Vec::new();
        };
        let target = jump_target(measurement.top, category.is_first);
        tracing::debug!(category = id, target, "anchor jump");
        let events = self.handle_scroll(target);
        self.scroll.scroll_top = self.scroll.scroll_top.min(self.scroll.max_scroll_top());
        events
    }

    /// Shows `Some(results)` in the search overlay, or closes it with `None`.
    pub fn apply_search_results(&mut self, results: Option<Vec<EmojiId>>) -> Vec<PickerEvent> {
        let was_active = self.search_active();
        let activate = results.is_some();
        if let Some(search) = self.list.get_mut(SEARCH_ID) {
            search.emojis = results;
        }
        if !was_active && !activate {
            return Vec::new();
        }

        self.scroll.scroll_top = 0;
        self.dirty.layout = true;

        if activate {
            self.run_tracker()
        } else {
            Vec::new()
        }
    }

    /// Runs `query` through the search engine and applies the results.
    pub fn search(&mut self, query: &str) -> Vec<PickerEvent> {
        let results = self.engine.search(query);
        tracing::debug!(query, results = results.as_ref().map(Vec::len), "search");
        self.apply_search_results(results)
    }

    /// Frame boundary: re-measures dirty sections, runs the tracker when
    /// offsets moved and applies a deferred anchor jump.
    pub fn layout_settled(&mut self, client_height: u32) -> Vec<PickerEvent> {
        let resized = client_height != self.scroll.client_height;
        self.scroll.client_height = client_height;

        let mut relayout = self.dirty.layout;
        if self.dirty.recent && !relayout {
            let len = self.list.get(RECENT_ID).map_or(0, Category::len);
            let spec = SectionSpec {
                id: RECENT_ID,
                len,
                visible: !self.search_active(),
                is_search: false,
            };
            let (previous, current) = self.arena.remeasure(&spec, &self.metrics);
            self.dirty.recent = false;
            if previous != Some(current) {
                relayout = true;
            } else {
                tracing::trace!("recent section kept its height, skipping layout");
            }
        }

        let mut events = Vec::new();
        if relayout {
            self.relayout();
        }
        if relayout || resized {
            self.scroll.scroll_top = self.scroll.scroll_top.min(self.scroll.max_scroll_top());
            events.extend(self.run_tracker());
        }
        if let Some(id) = self.pending_jump.take() {
            events.extend(self.jump_to(&id));
        }
        events
    }

    /// Reports a pick of `id` and feeds the `Recent` category.
    pub fn select_emoji(&mut self, id: &EmojiId) -> Vec<PickerEvent> {
        let Some(emoji) = self.index.get(id).cloned() else {
            tracing::debug!(emoji = %id, "ignoring selection of unknown emoji");
            return Vec::new();
        };

        if !self.list.hide_recent && self.recent_override.is_none() {
            self.frequency.add(id);
            if let Err(err) = self.frequency.persist(self.prefs.as_mut()) {
                tracing::warn!(error = %format!("{err:#}"), "failed to persist usage counts");
            }
            self.refresh_recent();
        }

        vec![PickerEvent::EmojiSelected(emoji)]
    }

    /// Shows the preview for `id`.
    pub fn hover(&mut self, id: &EmojiId) -> Vec<PickerEvent> {
        let Some(emoji) = self.index.get(id).cloned() else {
            return Vec::new();
        };
        if self.preview.hover(emoji) {
            vec![PickerEvent::PreviewChanged(Some(id.clone()))]
        } else {
            Vec::new()
        }
    }

    /// Schedules the preview clear.
    pub fn leave(&mut self, now: Instant) {
        self.preview.leave(now);
    }

    pub fn has_pending_preview_clear(&self) -> bool {
        self.preview.has_pending_clear()
    }

    /// Fires the preview clear when due.
    pub fn tick(&mut self, now: Instant) -> Vec<PickerEvent> {
        if self.preview.tick(now) {
            vec![PickerEvent::PreviewChanged(None)]
        } else {
            Vec::new()
        }
    }

    /// Changes the skin tone and stores it.
    pub fn set_skin(&mut self, skin: SkinTone) {
        self.skin = skin;
        if let Err(err) = self.prefs.set(KEY_SKIN, serde_json::Value::from(skin.value())) {
            tracing::warn!(error = %format!("{err:#}"), "failed to persist skin tone");
        }
    }

    /// Changes the grid width. `Recent` capacity follows.
    pub fn set_per_line(&mut self, per_line: usize) {
        let metrics = GridMetrics::new(per_line);
        if metrics == self.metrics {
            return;
        }
        self.metrics = metrics;
        self.refresh_recent();
        self.dirty.layout = true;
    }

    /// Cancels everything still scheduled.
    pub fn teardown(&mut self) {
        self.preview.cancel();
        self.pending_jump = None;
    }
}
