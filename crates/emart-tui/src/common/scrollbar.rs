//! Scrollbar for the emoji grid.
//!
//! The thumb length is computed once per frame from the content and viewport
//! heights so it does not change size while scrolling.

use emart_core::tracker::ScrollState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

/// Vertical scrollbar drawn on the right edge of its area.
#[derive(Debug, Clone, Copy)]
pub struct Scrollbar {
    scroll_height: u32,
    client_height: u32,
    scroll_top: u32,
}

impl Scrollbar {
    pub fn new(state: ScrollState) -> Self {
        Self {
            scroll_height: state.scroll_height,
            client_height: state.client_height,
            scroll_top: state.scroll_top,
        }
    }

    /// Only shown when the content overflows the viewport.
    pub fn should_display(&self) -> bool {
        self.scroll_height > self.client_height
    }

    /// Thumb start and length for a track of `track_len` cells.
    fn thumb(&self, track_len: u32) -> Option<(u32, u32)> {
        let max_scroll = self.scroll_height.saturating_sub(self.client_height);
        if track_len == 0 || max_scroll == 0 {
            return None;
        }

        // round(track * viewport / (total - 1 + viewport))
        let viewport = self.client_height.min(track_len);
        let denom = u64::from(self.scroll_height.saturating_sub(1) + viewport);
        let thumb_len = if denom > 0 {
            let numerator = u64::from(track_len) * u64::from(viewport);
            (((numerator + denom / 2) / denom) as u32).clamp(1, track_len)
        } else {
            track_len
        };

        // Reaches the bottom exactly at max scroll.
        let available = u64::from(track_len - thumb_len);
        let top = u64::from(self.scroll_top.min(max_scroll));
        let thumb_start = (top * available / u64::from(max_scroll)) as u32;
        Some((thumb_start, thumb_len))
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() {
            return;
        }
        let Some((start, len)) = self.thumb(u32::from(area.height)) else {
            return;
        };

        let x = area.x + area.width.saturating_sub(1);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let idx = idx as u32;
            let (symbol, style) = if idx >= start && idx < start + len {
                (THUMB_SYMBOL, Style::default())
            } else {
                (TRACK_SYMBOL, Style::default().fg(Color::DarkGray))
            };
            buf.set_string(x, y, symbol, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrollbar(scroll_height: u32, client_height: u32, scroll_top: u32) -> Scrollbar {
        Scrollbar::new(ScrollState {
            scroll_top,
            client_height,
            scroll_height,
        })
    }

    #[test]
    fn test_should_display_when_content_exceeds_viewport() {
        assert!(scrollbar(100, 20, 0).should_display());
    }

    #[test]
    fn test_should_not_display_when_content_fits() {
        assert!(!scrollbar(10, 20, 0).should_display());
        assert!(!scrollbar(20, 20, 0).should_display());
    }

    #[test]
    fn test_thumb_keeps_length_and_reaches_bottom() {
        let top = scrollbar(100, 20, 0).thumb(20).unwrap();
        let middle = scrollbar(100, 20, 40).thumb(20).unwrap();
        let bottom = scrollbar(100, 20, 80).thumb(20).unwrap();

        assert_eq!(top.0, 0);
        assert_eq!(top.1, middle.1);
        assert_eq!(middle.1, bottom.1);
        assert_eq!(bottom.0 + bottom.1, 20);
    }

    #[test]
    fn test_render_draws_on_right_edge() {
        let area = Rect::new(0, 0, 3, 4);
        let mut buf = Buffer::empty(area);
        scrollbar(16, 4, 0).render(area, &mut buf);

        assert_eq!(buf[(2, 0)].symbol(), THUMB_SYMBOL);
        assert_eq!(buf[(2, 3)].symbol(), TRACK_SYMBOL);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
