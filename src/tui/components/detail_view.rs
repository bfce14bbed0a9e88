//! # DetailView Component
//!
//! The detail pane for one selected item: header, labelled facts, an
//! optional titled list section, long-form body, and links.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::provider::DetailRecord;
use crate::tui::component::Component;

pub struct DetailView<'a> {
    pub detail: &'a DetailRecord,
    /// Lines scrolled off the top
    pub scroll: u16,
}

impl DetailView<'_> {
    pub fn lines(&self) -> Vec<Line<'static>> {
        let detail = self.detail;
        let label_style = Style::default().fg(Color::Cyan);
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            detail.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if let Some(subtitle) = &detail.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        lines.push(Line::default());

        for (label, value) in &detail.facts {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value.clone()),
            ]));
        }

        if !detail.entries.is_empty() {
            lines.push(Line::default());
            let label = detail.entries_label.as_deref().unwrap_or("Items");
            lines.push(Line::from(Span::styled(format!("{label}:"), label_style)));
            lines.extend(detail.entries.iter().map(|e| Line::from(format!("  • {e}"))));
        }

        if let Some(body) = &detail.body {
            lines.push(Line::default());
            lines.extend(body.lines().map(|l| Line::from(l.to_string())));
        }

        for (label, url) in [("Link", &detail.link), ("Image", &detail.image_url)] {
            if let Some(url) = url {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), label_style),
                    Span::styled(url.clone(), Style::default().fg(Color::Blue)),
                ]));
            }
        }
        lines
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Details (Esc to go back)"),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
