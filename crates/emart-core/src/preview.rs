//! Hover preview with a debounced clear.

use std::time::{Duration, Instant};

use crate::emoji::Emoji;

/// Delay between leaving an emoji and clearing the preview.
pub const PREVIEW_CLEAR_DELAY: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    emoji: Option<Emoji>,
    clear_at: Option<Instant>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emoji(&self) -> Option<&Emoji> {
        self.emoji.as_ref()
    }

    /// Shows `emoji` and cancels any pending clear.
    ///
    /// Returns true if the previewed emoji changed.
    pub fn hover(&mut self, emoji: Emoji) -> bool {
        self.clear_at = None;
        let changed = self.emoji.as_ref().map(|e| &e.id) != Some(&emoji.id);
        self.emoji = Some(emoji);
        changed
    }

    /// Schedules a clear. A later call replaces an earlier one.
    pub fn leave(&mut self, now: Instant) {
        self.clear_at = Some(now + PREVIEW_CLEAR_DELAY);
    }

    pub fn has_pending_clear(&self) -> bool {
        self.clear_at.is_some()
    }

    /// Fires a due clear. Returns true if the preview was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(clear_at) = self.clear_at
            && now >= clear_at
        {
            self.clear_at = None;
            return self.emoji.take().is_some();
        }
        false
    }

    pub fn cancel(&mut self) {
        self.clear_at = None;
    }
}
