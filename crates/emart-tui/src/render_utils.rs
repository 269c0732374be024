//! Small drawing helpers shared by the picker panes.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::text::truncate_with_ellipsis;

pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Single-line text input with a block cursor.
pub struct InputLine<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
    pub prompt: &'a str,
    pub prompt_color: Color,
}

pub fn render_input_line(frame: &mut Frame, area: Rect, input: &InputLine<'_>) {
    let max_text_width = area.width.saturating_sub(input.prompt.len() as u16 + 1) as usize;

    let mut spans = vec![Span::styled(
        input.prompt,
        Style::default().fg(input.prompt_color),
    )];
    if input.value.is_empty() {
        spans.push(Span::raw("█"));
        spans.push(Span::styled(
            truncate_with_ellipsis(input.placeholder, max_text_width),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        // Keep the end of the query visible.
        let chars: Vec<char> = input.value.chars().collect();
        let start = chars.len().saturating_sub(max_text_width);
        spans.push(Span::raw(chars[start..].iter().collect::<String>()));
        spans.push(Span::raw("█"));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders keyboard hints centered on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint<'_>], highlight: Color) {
    if area.height == 0 {
        return;
    }
    let hints_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        hints_area,
    );
}

pub fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect::new(area.x, area.y, area.width, 1),
    );
}
