//! # InputBox Component
//!
//! Single-line text field used for both the search query and the local
//! filter text.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit `Submit` on Enter and `Changed` on every edit
//!
//! The buffer and cursor are internal state. `title` and `focused` are props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed. Carries the buffer as typed; the buffer is kept.
    Submit(String),
    /// Buffer content changed.
    Changed(String),
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Border title (Prop)
    pub title: String,
    /// Whether keystrokes currently go here (Prop)
    pub focused: bool,
    /// Cursor position as a byte offset into `buffer`
    cursor: usize,
}

impl InputBox {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            title: title.into(),
            focused: false,
            cursor: 0,
        }
    }

    /// Replace the buffer (e.g. when a history entry is recalled).
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.replace('\n', " ");
        self.cursor = self.buffer.len();
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }

    /// Display column of the cursor, scrolled so the cursor stays visible.
    fn scroll_and_column(&self, inner_width: u16) -> (usize, u16) {
        let before = &self.buffer[..self.cursor];
        let column = before.width();
        let width = usize::from(inner_width.max(1));
        if column < width {
            return (0, column as u16);
        }
        // Drop leading chars until the cursor fits on the last visible column.
        let mut start = 0;
        let mut shown = column;
        for (idx, ch) in before.char_indices() {
            if shown < width {
                break;
            }
            shown -= unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            start = idx + ch.len_utf8();
        }
        (start, shown as u16)
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        let (start, column) = self.scroll_and_column(inner_width);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());

        let input = Paragraph::new(&self.buffer[start..])
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        if self.focused {
            frame.set_cursor_position((area.x + 1 + column, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let text = text.replace(['\n', '\r'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
