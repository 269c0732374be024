//! Pure render function: draws [`AppState`] into a frame.

use emart_core::Category;
use emart_core::category::{CUSTOM_ID, RECENT_ID};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::Scrollbar;
use crate::common::text::{pad_to_width, truncate_with_ellipsis};
use crate::grid::{CELL_WIDTH, RowContent, row_at};
use crate::render_utils::{InputHint, InputLine, render_hints, render_input_line, render_separator};
use crate::state::AppState;

/// Terminal columns per anchor in the anchor bar.
pub const ANCHOR_WIDTH: u16 = 4;

const ACCENT: Color = Color::Cyan;

/// Screen regions of the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub anchors: Rect,
    pub search: Rect,
    /// Emoji grid, scrollbar column excluded.
    pub viewport: Rect,
    pub scrollbar: Rect,
    pub preview: Rect,
    separators: [Rect; 3],
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [anchors, sep_top, search, sep_mid, body, sep_bottom, preview] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);
    let [viewport, scrollbar] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(body);

    ScreenLayout {
        anchors,
        search,
        viewport,
        scrollbar,
        preview,
        separators: [sep_top, sep_mid, sep_bottom],
    }
}

fn anchor_icon(category: &Category) -> &str {
    match category.id.as_str() {
        RECENT_ID => "🕘",
        "people" => "😀",
        "nature" => "🐻",
        "foods" => "🍔",
        "activity" => "⚽",
        "places" => "🚀",
        "objects" => "💡",
        "symbols" => "🔣",
        "flags" => "🏁",
        CUSTOM_ID => "🧩",
        _ => category.name.get(..1).unwrap_or("?"),
    }
}

pub fn render(app: &AppState, frame: &mut Frame) {
    let layout = screen_layout(frame.area());

    render_anchors(app, frame, layout.anchors);
    for separator in layout.separators {
        render_separator(frame, separator);
    }
    render_input_line(
        frame,
        layout.search,
        &InputLine {
            value: &app.query,
            placeholder: &app.picker.i18n().search,
            prompt: "🔍 ",
            prompt_color: ACCENT,
        },
    );
    render_grid(app, frame, layout.viewport);
    frame.render_widget(Scrollbar::new(app.picker.scroll_state()), layout.scrollbar);
    render_preview(app, frame, layout.preview);
}

fn render_anchors(app: &AppState, frame: &mut Frame, area: Rect) {
    let selected = app.picker.selected_label();
    let searching = app.picker.search_active();

    let mut spans = Vec::new();
    for category in app.picker.anchors() {
        let icon = pad_to_width(anchor_icon(category), usize::from(ANCHOR_WIDTH) - 1);
        let style = if !searching && category.name == selected {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {icon}"), style));
    }

    let label_width = area.width.saturating_sub(spans.len() as u16 * ANCHOR_WIDTH) as usize;
    if label_width > 2 {
        spans.push(Span::styled(
            format!(" {}", truncate_with_ellipsis(selected, label_width - 1)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_grid(app: &AppState, frame: &mut Frame, area: Rect) {
    let picker = &app.picker;
    let skin = picker.skin();
    let scroll_top = picker.scroll_state().scroll_top;
    let hovered = picker.preview().map(|emoji| &emoji.id);

    let lines: Vec<Line> = (0..u32::from(area.height))
        .map(|offset| {
            let row = scroll_top + offset;
            match row_at(picker, row) {
                RowContent::Gap | RowContent::Empty => Line::default(),
                RowContent::Label(category) => Line::from(Span::styled(
                    truncate_with_ellipsis(&category.name, area.width as usize),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                RowContent::NotFound => Line::from(Span::styled(
                    picker.i18n().notfound.clone(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )),
                RowContent::Emojis { ids, .. } => {
                    let spans = ids.iter().enumerate().map(|(col, id)| {
                        let glyph = picker
                            .emoji(id)
                            .map_or_else(|| id.to_string(), |emoji| emoji.glyph(skin));
                        let mut style = Style::default();
                        if app.cursor.is_some_and(|c| c.row == row && c.col == col) {
                            style = style.add_modifier(Modifier::REVERSED);
                        } else if hovered == Some(id) {
                            style = style.bg(Color::DarkGray);
                        }
                        Span::styled(pad_to_width(&glyph, usize::from(CELL_WIDTH)), style)
                    });
                    Line::from(spans.collect::<Vec<_>>())
                }
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn skin_swatch(app: &AppState) -> String {
    let mut swatch = String::from("✋");
    if let Some(modifier) = app.picker.skin().modifier() {
        swatch.push(modifier);
    }
    swatch
}

fn render_preview(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let line = if let Some(emoji) = app.picker.preview() {
        Line::from(vec![
            Span::raw(format!("{} ", emoji.glyph(app.picker.skin()))),
            Span::styled(
                emoji.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", emoji.colons()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else if let Some(status) = &app.status {
        Line::from(Span::styled(status.clone(), Style::default().fg(ACCENT)))
    } else {
        Line::from(Span::styled(
            "emart",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let swatch = skin_swatch(app);
    let hints = [
        InputHint::new("↑↓←→", "move"),
        InputHint::new("enter", "pick"),
        InputHint::new("tab", "category"),
        InputHint::new("^s", &swatch),
        InputHint::new("esc", "quit"),
    ];
    let hints_area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
    render_hints(frame, hints_area, &hints, ACCENT);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent};
    use emart_core::{EmojiData, Picker, PickerOptions};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::events::UiEvent;
    use crate::state::TuiOptions;
    use crate::update::update;

    fn app(width: u16, height: u16) -> AppState {
        let data = EmojiData::builtin().unwrap();
        let picker = Picker::new(&data, PickerOptions::default()).unwrap();
        let mut app = AppState::new(picker, TuiOptions::default());
        update(&mut app, UiEvent::Frame { width, height });
        app
    }

    fn draw(app: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_screen_layout_regions() {
        let layout = screen_layout(Rect::new(0, 0, 40, 20));
        assert_eq!(layout.anchors, Rect::new(0, 0, 40, 1));
        assert_eq!(layout.search, Rect::new(0, 2, 40, 1));
        assert_eq!(layout.viewport, Rect::new(0, 4, 39, 13));
        assert_eq!(layout.scrollbar, Rect::new(39, 4, 1, 13));
        assert_eq!(layout.preview, Rect::new(0, 18, 40, 2));
    }

    #[test]
    fn test_render_shows_first_section_and_placeholder() {
        let app = app(60, 20);
        let rows = draw(&app, 60, 20);

        assert!(rows[0].contains("Frequently Used"));
        assert!(rows[2].contains("Search"));
        assert!(rows[4].contains("Frequently Used"));
        assert!(rows[19].contains("enter pick"));
    }

    #[test]
    fn test_render_not_found() {
        let mut app = app(60, 20);
        for ch in "qqzzxx".chars() {
            let key = KeyEvent::from(KeyCode::Char(ch));
            update(&mut app, UiEvent::Terminal(Event::Key(key)));
        }
        update(&mut app, UiEvent::Tick);
        let rows = draw(&app, 60, 20);

        assert!(rows[2].contains("qqzzxx"));
        assert!(rows[4].contains("Search Results"));
        assert!(rows[5].contains("No Emoji Found"));
    }
}
