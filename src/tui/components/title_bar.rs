//! # TitleBar Component
//!
//! Top status bar showing the active provider and the current status.
//!
//! Purely presentational: it receives all data as props and has no internal
//! state.
//!
//! The title text changes based on state:
//!
//! 1. **Loading**: `"⠋ Explorer (provider: weather) | Searching for 'Paris'..."`
//! 2. **Status message**: `"Explorer (provider: weather) | Found 1 result(s)"`
//! 3. **Default**: `"Explorer (provider: weather)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    /// Name of the provider being browsed
    pub provider_name: String,
    /// Status message (e.g., "Loading...", "Found 3 result(s)")
    pub status_message: String,
    /// Spinner frame while a request is in flight
    pub spinner_frame: Option<usize>,
}

impl TitleBar {
    pub fn new(provider_name: String, status_message: String, spinner_frame: Option<usize>) -> Self {
        Self {
            provider_name,
            status_message,
            spinner_frame,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Explorer (provider: {})", self.provider_name)
        } else {
            format!(
                "Explorer (provider: {}) | {}",
                self.provider_name, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(2);
        if let Some(tick) = self.spinner_frame {
            spans.push(Span::styled(
                format!("{} ", SPINNER[tick % SPINNER.len()]),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::raw(self.title_text()));
        frame.render_widget(Line::from(spans), area);
    }
}
