//! # HistoryBar Component
//!
//! One line of recent searches, most recent first, numbered for Alt+1..5,
//! followed by the active category choice.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct HistoryBar<'a> {
    pub history: &'a [String],
    /// Current category value, when the provider has a category field
    pub category: Option<&'a str>,
}

impl HistoryBar<'_> {
    pub fn line(&self) -> Line<'static> {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let mut spans = vec![Span::styled("Recent: ", dim)];
        if self.history.is_empty() {
            spans.push(Span::styled("none", dim));
        }
        for (i, query) in self.history.iter().enumerate() {
            spans.push(Span::styled(format!("{}:", i + 1), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(format!("{query}  ")));
        }
        if let Some(category) = self.category {
            spans.push(Span::styled(" Category: ", dim));
            spans.push(Span::styled(category.to_string(), Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    }
}

impl Component for HistoryBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
