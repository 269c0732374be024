//! TUI reducer.
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use emart_core::{EmojiId, PickerEvent};
use ratatui::layout::{Position, Rect};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::grid::{self, CELL_WIDTH, Direction};
use crate::render::{ANCHOR_WIDTH, screen_layout};
use crate::state::AppState;

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            let events = app.picker.tick(Instant::now());
            let mut effects = apply_picker_events(app, events);
            effects.extend(settle(app));
            effects
        }
        UiEvent::Frame { width, height } => handle_frame(app, width, height),
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
    }
}

fn handle_frame(app: &mut AppState, width: u16, height: u16) -> Vec<UiEffect> {
    app.screen = screen_layout(Rect::new(0, 0, width, height));
    let columns = usize::from(app.screen.viewport.width / CELL_WIDTH);
    app.picker
        .set_per_line(columns.clamp(1, app.max_per_line.max(1)));
    settle(app)
}

/// Frame boundary: lets the picker re-measure, then drops a cursor that no
/// longer points at an emoji.
fn settle(app: &mut AppState) -> Vec<UiEffect> {
    let client_height = u32::from(app.screen.viewport.height);
    let events = app.picker.layout_settled(client_height);
    if app
        .cursor
        .is_some_and(|cursor| cursor.emoji(&app.picker).is_none())
    {
        app.cursor = None;
    }
    apply_picker_events(app, events)
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            app.query.extend(text.chars().filter(|ch| !ch.is_control()));
            run_search(app)
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('s') if ctrl => {
            let skin = app.picker.skin().cycle();
            app.picker.set_skin(skin);
            vec![]
        }
        KeyCode::Char('u') if ctrl => {
            app.query.clear();
            run_search(app)
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.query.push(ch);
            run_search(app)
        }
        KeyCode::Backspace => {
            if app.query.pop().is_none() {
                return vec![];
            }
            run_search(app)
        }
        KeyCode::Esc => {
            if app.query.is_empty() {
                return vec![UiEffect::Quit];
            }
            app.query.clear();
            run_search(app)
        }
        KeyCode::Tab => cycle_anchor(app, true),
        KeyCode::BackTab => cycle_anchor(app, false),
        KeyCode::Left => move_cursor(app, Direction::Left),
        KeyCode::Right => move_cursor(app, Direction::Right),
        KeyCode::Up => move_cursor(app, Direction::Up),
        KeyCode::Down => move_cursor(app, Direction::Down),
        KeyCode::Enter => {
            let mut effects = settle(app);
            let scroll_top = app.picker.scroll_state().scroll_top;
            let target = app
                .cursor
                .or_else(|| grid::first_cursor_from(&app.picker, scroll_top))
                .and_then(|cursor| cursor.emoji(&app.picker).cloned());
            if let Some(id) = target {
                effects.extend(select(app, &id));
            }
            effects
        }
        KeyCode::PageUp => scroll_by(app, -page_rows(app)),
        KeyCode::PageDown => scroll_by(app, page_rows(app)),
        KeyCode::Home => {
            let events = app.picker.handle_scroll(0);
            apply_picker_events(app, events)
        }
        KeyCode::End => {
            let bottom = app.picker.scroll_state().max_scroll_top();
            let events = app.picker.handle_scroll(bottom);
            apply_picker_events(app, events)
        }
        _ => vec![],
    }
}

fn page_rows(app: &AppState) -> i32 {
    i32::from(app.screen.viewport.height.max(1))
}

fn run_search(app: &mut AppState) -> Vec<UiEffect> {
    app.cursor = None;
    let events = app.picker.search(&app.query);
    apply_picker_events(app, events)
}

fn scroll_by(app: &mut AppState, delta: i32) -> Vec<UiEffect> {
    let events = app.picker.scroll_by(delta);
    apply_picker_events(app, events)
}

/// Jumps to the anchor after (or before) the selected one.
fn cycle_anchor(app: &mut AppState, forward: bool) -> Vec<UiEffect> {
    let anchors: Vec<String> = app.picker.anchors().map(|c| c.id.clone()).collect();
    if anchors.is_empty() {
        return vec![];
    }

    let current = app
        .picker
        .anchors()
        .position(|c| c.name == app.picker.selected_label());
    let next = match (current, forward) {
        // Searching: the selected label is not an anchor.
        (None, true) => 0,
        (None, false) => anchors.len() - 1,
        (Some(i), true) => (i + 1) % anchors.len(),
        (Some(i), false) => (i + anchors.len() - 1) % anchors.len(),
    };

    click_anchor(app, &anchors[next])
}

fn click_anchor(app: &mut AppState, id: &str) -> Vec<UiEffect> {
    app.cursor = None;
    if app.picker.search_active() {
        app.query.clear();
    }
    let events = app.picker.handle_anchor_click(id);
    apply_picker_events(app, events)
}

fn move_cursor(app: &mut AppState, direction: Direction) -> Vec<UiEffect> {
    let mut effects = settle(app);
    let scroll_top = app.picker.scroll_state().scroll_top;
    let cursor = match app.cursor {
        Some(cursor) => grid::move_cursor(&app.picker, cursor, direction),
        None => match grid::first_cursor_from(&app.picker, scroll_top) {
            Some(cursor) => cursor,
            None => return effects,
        },
    };
    app.cursor = Some(cursor);

    // Keep the cursor row on screen.
    let state = app.picker.scroll_state();
    let target = if cursor.row < state.scroll_top {
        Some(cursor.row)
    } else if state.client_height > 0 && cursor.row >= state.scroll_top + state.client_height {
        Some(cursor.row + 1 - state.client_height)
    } else {
        None
    };
    if let Some(target) = target {
        let events = app.picker.handle_scroll(target);
        effects.extend(apply_picker_events(app, events));
    }

    if let Some(id) = cursor.emoji(&app.picker).cloned() {
        let events = app.picker.hover(&id);
        effects.extend(apply_picker_events(app, events));
    }
    effects
}

fn select(app: &mut AppState, id: &EmojiId) -> Vec<UiEffect> {
    let events = app.picker.select_emoji(id);
    apply_picker_events(app, events)
}

/// Content row and column under a screen position inside the viewport.
fn grid_position(app: &AppState, column: u16, row: u16) -> Option<(u32, usize)> {
    let viewport = app.screen.viewport;
    if !viewport.contains(Position::new(column, row)) {
        return None;
    }
    let content_row = app.picker.scroll_state().scroll_top + u32::from(row - viewport.y);
    let col = usize::from((column - viewport.x) / CELL_WIDTH);
    Some((content_row, col))
}

fn emoji_under(app: &AppState, column: u16, row: u16) -> Option<EmojiId> {
    let (row, col) = grid_position(app, column, row)?;
    grid::emoji_at(&app.picker, row, col).cloned()
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let anchors = app.screen.anchors;
            if anchors.contains(Position::new(mouse.column, mouse.row)) {
                let index = usize::from((mouse.column - anchors.x) / ANCHOR_WIDTH);
                let id = app.picker.anchors().nth(index).map(|c| c.id.clone());
                return match id {
                    Some(id) => click_anchor(app, &id),
                    None => vec![],
                };
            }
            match emoji_under(app, mouse.column, mouse.row) {
                Some(id) => select(app, &id),
                None => vec![],
            }
        }
        MouseEventKind::ScrollUp => scroll_by(app, -WHEEL_ROWS),
        MouseEventKind::ScrollDown => scroll_by(app, WHEEL_ROWS),
        MouseEventKind::Moved => match emoji_under(app, mouse.column, mouse.row) {
            Some(id) => {
                app.hovered = Some(id.clone());
                let events = app.picker.hover(&id);
                apply_picker_events(app, events)
            }
            None => {
                if app.hovered.take().is_some() {
                    app.picker.leave(Instant::now());
                }
                vec![]
            }
        },
        _ => vec![],
    }
}

fn apply_picker_events(app: &mut AppState, events: Vec<PickerEvent>) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for event in events {
        match event {
            PickerEvent::EmojiSelected(emoji) => {
                let glyph = emoji.glyph(app.picker.skin());
                tracing::info!(emoji = %emoji.id, "picked");
                app.picked.push(glyph.clone());
                app.status = Some(format!("Picked {glyph} {}", emoji.colons()));
                if app.options.copy_to_clipboard {
                    effects.push(UiEffect::CopyToClipboard { text: glyph });
                }
                if app.options.close_on_select {
                    effects.push(UiEffect::Quit);
                }
            }
            PickerEvent::CategoryChanged(label) => {
                tracing::trace!(label, "category changed");
            }
            PickerEvent::PreviewChanged(_) => {}
        }
    }
    effects
}
