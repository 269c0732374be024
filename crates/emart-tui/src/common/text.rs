//! Width-aware text helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let next_width = width + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width = next_width;
    }
    truncated.push('…');
    truncated
}

/// Pads a glyph with trailing spaces so it fills `width` columns.
///
/// Glyphs wider than `width` are returned as is; the terminal clips them.
pub fn pad_to_width(glyph: &str, width: usize) -> String {
    let glyph_width = glyph.width();
    let mut padded = String::with_capacity(glyph.len() + width);
    padded.push_str(glyph);
    for _ in glyph_width..width {
        padded.push(' ');
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("grinning", 10), "grinning");
    }

    #[test]
    fn test_truncate_with_ellipsis_long() {
        assert_eq!(truncate_with_ellipsis("Smileys & People", 8), "Smileys…");
    }

    #[test]
    fn test_truncate_with_ellipsis_tiny_width() {
        assert_eq!(truncate_with_ellipsis("Flags", 1), "…");
    }

    #[test]
    fn test_pad_to_width_accounts_for_wide_glyphs() {
        assert_eq!(pad_to_width("😀", 3), "😀 ");
        assert_eq!(pad_to_width("*", 3), "*  ");
        assert_eq!(pad_to_width("😀", 1), "😀");
    }
}
