//! TUI state.

use emart_core::{EmojiId, Picker};

use crate::grid::GridCursor;
use crate::render::ScreenLayout;

/// Host behavior around a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOptions {
    /// Quit after the first pick.
    pub close_on_select: bool,
    pub copy_to_clipboard: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            close_on_select: true,
            copy_to_clipboard: false,
        }
    }
}

/// Application state owned by the runtime.
pub struct AppState {
    pub picker: Picker,
    pub options: TuiOptions,
    /// Current search query.
    pub query: String,
    /// Keyboard cursor over the emoji grid.
    pub cursor: Option<GridCursor>,
    /// Emoji under the mouse pointer.
    pub hovered: Option<EmojiId>,
    /// Glyphs picked so far, in order.
    pub picked: Vec<String>,
    /// Transient feedback shown in the preview line.
    pub status: Option<String>,
    /// Layout of the last frame, used for hit testing.
    pub screen: ScreenLayout,
    /// Configured grid width. Narrow terminals get fewer columns.
    pub max_per_line: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(picker: Picker, options: TuiOptions) -> Self {
        let max_per_line = picker.metrics().per_line;
        Self {
            picker,
            options,
            query: String::new(),
            cursor: None,
            hovered: None,
            picked: Vec::new(),
            status: None,
            screen: ScreenLayout::default(),
            max_per_line,
            should_quit: false,
        }
    }
}
