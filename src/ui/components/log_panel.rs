use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::sync::Action;
use crate::ui::core::Component;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Overlay with the most recent log lines, newest first.
pub struct LogPanelComponent {
    logger: Logger,
    pub visible: bool,
}

impl LogPanelComponent {
    pub fn new(logger: Logger) -> Self {
        Self { logger, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Component for LogPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
            KeyCode::Char('c') => {
                self.logger.clear();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowLogs(show) => {
                self.visible = show;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        let area = LayoutManager::centered_rect(80, 70, rect);
        let max_lines = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .logger
            .get_logs()
            .into_iter()
            .take(max_lines)
            .map(Line::from)
            .collect();

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_LOGS)
                    .border_style(Style::default().fg(Color::Cyan)),
            );

        f.render_widget(Clear, area);
        f.render_widget(panel, area);
    }
}
