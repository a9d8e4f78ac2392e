//! Status bar component

use crate::constants::HINT_KEYS;
use crate::status::{StatusKind, StatusMessage};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// One-line status surface: the visible status message, or key hints.
#[derive(Default)]
pub struct StatusBarComponent {
    pub message: Option<StatusMessage>,
    pub busy: bool,
}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, message: Option<&StatusMessage>, busy: bool) {
        self.message = message.cloned();
        self.busy = busy;
    }

    /// Text and style currently shown
    pub fn content(&self) -> (String, Style) {
        match &self.message {
            Some(message) => {
                let color = match message.kind {
                    StatusKind::Success => Color::Green,
                    StatusKind::Error => Color::Red,
                };
                (
                    message.text.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            }
            None if self.busy => (format!("⟳ Working... • {}", HINT_KEYS), Style::default().fg(Color::Yellow)),
            None => (HINT_KEYS.to_string(), Style::default().fg(Color::Gray)),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (text, style) = self.content();
        let status_bar = Paragraph::new(text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(style);

        f.render_widget(status_bar, area);
    }
}
