//! Hero terminal widget
//!
//! Renders a `PlaybackFrame` as a small terminal window: completed lines as
//! scrollback and the line being typed followed by a blinking caret.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::player::PlaybackFrame;
use crate::tui::theme::current_theme;

pub const CARET: &str = "▌";

/// Cut `text` so it occupies at most `max_width` terminal columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in text.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            return &text[..idx];
        }
    }
    text
}

/// Lines to show for `frame` in a viewport `height` rows tall.
///
/// When the scrollback does not fit, the oldest lines scroll off the top so
/// the line being typed stays visible.
pub fn visible_lines<'a>(frame: &PlaybackFrame<'a>, height: usize) -> Vec<&'a str> {
    let mut lines: Vec<&'a str> = frame.completed.iter().map(String::as_str).collect();
    if let Some(current) = frame.in_progress {
        lines.push(current);
    }
    let skip = lines.len().saturating_sub(height);
    lines.split_off(skip)
}

/// The hero terminal window.
pub struct TerminalDemo<'a> {
    frame: PlaybackFrame<'a>,
    caret_visible: bool,
}

impl<'a> TerminalDemo<'a> {
    pub fn new(frame: PlaybackFrame<'a>, caret_visible: bool) -> Self {
        Self {
            frame,
            caret_visible,
        }
    }
}

impl Widget for TerminalDemo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = current_theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(Span::styled(" BlitzCoder Terminal ", theme.text_secondary_style()));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let rows = visible_lines(&self.frame, inner.height as usize);
        let typing_row = self.frame.in_progress.map(|_| rows.len().saturating_sub(1));

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(row, text)| {
                let is_typing = Some(row) == typing_row;
                // Leave a column for the caret on the typing line
                let room = if is_typing { width.saturating_sub(1) } else { width };
                let mut spans = vec![Span::styled(
                    truncate_to_width(text, room).to_string(),
                    theme.terminal_style(),
                )];
                if is_typing && self.caret_visible {
                    spans.push(Span::styled(
                        CARET,
                        theme.terminal_style().add_modifier(Modifier::SLOW_BLINK),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
