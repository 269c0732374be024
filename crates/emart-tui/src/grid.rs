//! Maps viewport rows to section content and moves the keyboard cursor.
//!
//! Rows are content rows (0 = top of the first visible section), the same
//! unit the picker measures sections in.

use emart_core::{Category, EmojiId, Picker};

/// Terminal columns per emoji cell (glyph plus spacing).
pub const CELL_WIDTH: u16 = 3;

/// What a content row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowContent<'a> {
    /// Gap above a section.
    Gap,
    Label(&'a Category),
    Emojis {
        category: &'a Category,
        ids: &'a [EmojiId],
    },
    /// Search ran and matched nothing.
    NotFound,
    /// Past the end of the content.
    Empty,
}

pub fn row_at(picker: &Picker, row: u32) -> RowContent<'_> {
    for category in picker.visible_categories() {
        let Some(measurement) = picker.measurement(&category.id) else {
            continue;
        };
        if !measurement.contains(row) {
            continue;
        }
        if row < measurement.label_row() {
            return RowContent::Gap;
        }
        if row < measurement.grid_start() {
            return RowContent::Label(category);
        }
        if category.is_search() && category.is_empty() {
            return RowContent::NotFound;
        }

        let per_line = picker.metrics().per_line;
        let ids = category.emoji_ids();
        let start = ((row - measurement.grid_start()) as usize * per_line).min(ids.len());
        let end = (start + per_line).min(ids.len());
        return RowContent::Emojis {
            category,
            ids: &ids[start..end],
        };
    }
    RowContent::Empty
}

pub fn emoji_at(picker: &Picker, row: u32, col: usize) -> Option<&EmojiId> {
    match row_at(picker, row) {
        RowContent::Emojis { ids, .. } => ids.get(col),
        _ => None,
    }
}

/// Keyboard cursor: content row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub row: u32,
    pub col: usize,
}

impl GridCursor {
    pub fn emoji<'a>(&self, picker: &'a Picker) -> Option<&'a EmojiId> {
        emoji_at(picker, self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Content rows holding at least one emoji, top to bottom.
fn emoji_rows(picker: &Picker) -> Vec<(u32, usize)> {
    (0..picker.scroll_state().scroll_height)
        .filter_map(|row| match row_at(picker, row) {
            RowContent::Emojis { ids, .. } if !ids.is_empty() => Some((row, ids.len())),
            _ => None,
        })
        .collect()
}

pub fn first_cursor(picker: &Picker) -> Option<GridCursor> {
    first_cursor_from(picker, 0)
}

/// First emoji cell at or below content row `from`.
pub fn first_cursor_from(picker: &Picker, from: u32) -> Option<GridCursor> {
    emoji_rows(picker)
        .into_iter()
        .find(|&(row, _)| row >= from)
        .map(|(row, _)| GridCursor { row, col: 0 })
}

/// Moves `cursor`. Stays put at the edges of the grid.
pub fn move_cursor(picker: &Picker, cursor: GridCursor, direction: Direction) -> GridCursor {
    let rows = emoji_rows(picker);
    let Some(position) = rows.iter().position(|&(row, _)| row == cursor.row) else {
        return first_cursor(picker).unwrap_or(cursor);
    };
    let len = rows[position].1;

    let to_row = |index: usize, col: usize| {
        let (row, len) = rows[index];
        GridCursor {
            row,
            col: col.min(len - 1),
        }
    };

    match direction {
        Direction::Left if cursor.col > 0 => GridCursor {
            col: cursor.col - 1,
            ..cursor
        },
        Direction::Left if position > 0 => to_row(position - 1, usize::MAX),
        Direction::Right if cursor.col + 1 < len => GridCursor {
            col: cursor.col + 1,
            ..cursor
        },
        Direction::Right if position + 1 < rows.len() => to_row(position + 1, 0),
        Direction::Up if position > 0 => to_row(position - 1, cursor.col),
        Direction::Down if position + 1 < rows.len() => to_row(position + 1, cursor.col),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use emart_core::{EmojiData, PickerOptions};

    use super::*;

    /// `flags` (12 emojis) then `people` (24), 5 per line.
    fn picker() -> Picker {
        let data = EmojiData::builtin().unwrap();
        let mut picker = Picker::new(
            &data,
            PickerOptions {
                include: vec!["flags".to_string(), "people".to_string()],
                per_line: 5,
                ..Default::default()
            },
        )
        .unwrap();
        picker.layout_settled(10);
        picker
    }

    #[test]
    fn test_rows_map_to_sections() {
        let picker = picker();
        // flags: label 0, grid 1..=3. people: gap 4, label 5, grid 6..=10.
        assert!(matches!(row_at(&picker, 0), RowContent::Label(c) if c.id == "flags"));
        assert!(matches!(row_at(&picker, 3), RowContent::Emojis { ids, .. } if ids.len() == 2));
        assert_eq!(row_at(&picker, 4), RowContent::Gap);
        assert!(matches!(row_at(&picker, 5), RowContent::Label(c) if c.id == "people"));
        assert_eq!(row_at(&picker, 11), RowContent::Empty);
        assert_eq!(emoji_at(&picker, 6, 0), Some(&EmojiId::new("grinning")));
        assert_eq!(emoji_at(&picker, 3, 4), None);
    }

    #[test]
    fn test_not_found_row() {
        let mut picker = picker();
        picker.search("zzzzqqqq");
        picker.layout_settled(10);
        assert_eq!(row_at(&picker, 1), RowContent::NotFound);
        assert!(first_cursor(&picker).is_none());
    }

    #[test]
    fn test_cursor_moves_across_sections() {
        let picker = picker();
        let start = first_cursor(&picker).unwrap();
        assert_eq!(start, GridCursor { row: 1, col: 0 });

        let down = move_cursor(&picker, start, Direction::Down);
        assert_eq!(down, GridCursor { row: 2, col: 0 });

        // Row 3 only has two flags; the column clamps.
        let short = move_cursor(&picker, GridCursor { row: 2, col: 4 }, Direction::Down);
        assert_eq!(short, GridCursor { row: 3, col: 1 });

        // Down from the last flags row skips the gap and label.
        let next = move_cursor(&picker, short, Direction::Down);
        assert_eq!(next, GridCursor { row: 6, col: 1 });

        let wrapped = move_cursor(&picker, GridCursor { row: 6, col: 0 }, Direction::Left);
        assert_eq!(wrapped, GridCursor { row: 3, col: 1 });
    }

    #[test]
    fn test_cursor_stays_at_edges() {
        let picker = picker();
        let start = first_cursor(&picker).unwrap();
        assert_eq!(move_cursor(&picker, start, Direction::Up), start);
        assert_eq!(move_cursor(&picker, start, Direction::Left), start);
        assert_eq!(
            first_cursor_from(&picker, 4),
            Some(GridCursor { row: 6, col: 0 })
        );
    }
}
