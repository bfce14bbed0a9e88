//! # ResultList Component
//!
//! The master pane: the filtered result set, one row per item, with a
//! highlighted selection.
//!
//! `ResultListState` is owned by `TuiState` so the selection and scroll
//! offset survive across frames and across detail views.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::provider::ResourceItem;
use crate::tui::component::Component;

/// Selection and scroll offset for the result list.
#[derive(Debug, Default)]
pub struct ResultListState {
    pub list_state: ListState,
}

impl ResultListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the selection inside `0..len`, selecting the first row when
    /// items appear and clearing it when they vanish.
    pub fn clamp(&mut self, len: usize) {
        let selected = match (self.list_state.selected(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), _) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
    }
}

pub struct ResultList<'a> {
    pub items: &'a [&'a ResourceItem],
    /// Field shown as a dimmed tag after the title (the category field)
    pub tag_field: Option<&'a str>,
    /// Total before filtering, for the title
    pub total: usize,
    pub focused: bool,
    pub state: &'a mut ResultListState,
}

/// Truncate to `max` display columns, appending an ellipsis when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

impl ResultList<'_> {
    fn row(&self, item: &ResourceItem, width: usize) -> ListItem<'static> {
        let tag = self
            .tag_field
            .and_then(|field| item.field(field))
            .map(|value| format!(" [{value}]"))
            .unwrap_or_default();
        let title_width = width.saturating_sub(tag.width());
        let title = truncate_to_width(&item.display_title, title_width);
        ListItem::new(Line::from(vec![
            Span::raw(title),
            Span::styled(tag, Style::default().add_modifier(Modifier::DIM)),
        ]))
    }
}

impl Component for ResultList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Borders plus the highlight symbol
        let width = usize::from(area.width.saturating_sub(4));
        let rows: Vec<ListItem> = self.items.iter().map(|item| self.row(item, width)).collect();

        let title = if self.items.len() == self.total {
            format!("Results ({})", self.total)
        } else {
            format!("Results ({} of {})", self.items.len(), self.total)
        };
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let list = List::new(rows)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title(title),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        self.state.clamp(self.items.len());
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
