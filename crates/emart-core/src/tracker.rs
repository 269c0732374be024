//! Scroll tracking: which section is active for a scroll position, and where
//! an anchor jump lands.

/// Snapshot of the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scroll_top: u32,
    pub client_height: u32,
    pub scroll_height: u32,
}

impl ScrollState {
    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll_top(&self) -> u32 {
        self.scroll_height.saturating_sub(self.client_height)
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_height > 0
            && self.scroll_top.saturating_add(self.client_height) >= self.scroll_height
    }
}

/// What the tracker needs to know about one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedSection {
    pub anchor: bool,
    pub visible: bool,
    pub top: u32,
    pub height: u32,
}

impl TrackedSection {
    fn is_active(&self, position: u32) -> bool {
        self.top <= position && position < self.top + self.height
    }
}

/// Target offset for a jump to a section starting at `top`.
///
/// The first section lands on 0. Every other section lands one row past its
/// gap row, which is the label row.
pub fn jump_target(top: u32, is_first: bool) -> u32 {
    if is_first { 0 } else { top + 1 }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_scroll_top: Option<u32>,
    reference_offset: u32,
}

impl ScrollTracker {
    pub fn new(reference_offset: u32) -> Self {
        Self {
            last_scroll_top: None,
            reference_offset,
        }
    }

    pub fn last_scroll_top(&self) -> Option<u32> {
        self.last_scroll_top
    }

    /// Returns the index of the active section.
    ///
    /// `search` is the index of the search section when its overlay is
    /// active; it always wins.
    pub fn active_section(
        &mut self,
        sections: &[TrackedSection],
        state: ScrollState,
        search: Option<usize>,
    ) -> Option<usize> {
        if let Some(search) = search {
            self.last_scroll_top = None;
            return Some(search);
        }

        let scroll_top = state.scroll_top;
        let scrolling_down = scroll_top > self.last_scroll_top.unwrap_or(0);
        self.last_scroll_top = Some(scroll_top);

        let position = scroll_top.saturating_add(self.reference_offset);
        let order: Box<dyn Iterator<Item = usize>> = if scrolling_down {
            Box::new((0..sections.len()).rev())
        } else {
            Box::new(0..sections.len())
        };

        let mut active = None;
        let mut min_top: Option<u32> = None;
        for index in order {
            let section = &sections[index];
            if !section.visible {
                continue;
            }
            if section.top > 0 && min_top.is_none_or(|min| section.top < min) {
                min_top = Some(section.top);
            }
            if active.is_none() && section.is_active(position) {
                active = Some(index);
            }
        }

        if min_top.is_some_and(|min| scroll_top < min) {
            return sections
                .iter()
                .position(|section| section.visible && section.anchor)
                .or(active);
        }

        if state.at_bottom() {
            return sections
                .iter()
                .rposition(|section| section.visible)
                .or(active);
        }

        active
    }
}
