use crate::constants::TEXT_LOADING_ACTIVITIES;
use crate::render::{ActivityBlock, ParticipantEntry, RemoveTarget, RosterView};
use crate::sync::{Action, ViewPhase};
use crate::ui::core::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Activity blocks with a cursor over the participants' removal controls.
///
/// The cursor indexes [`RosterView::removal_targets`], so a removal always
/// carries the activity/email pair captured when the view was rendered.
pub struct ActivityListComponent {
    pub phase: ViewPhase,
    pub view: RosterView,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
}

impl Default for ActivityListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityListComponent {
    pub fn new() -> Self {
        Self {
            phase: ViewPhase::Initial,
            view: RosterView::default(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: true,
        }
    }

    pub fn update_data(&mut self, phase: &ViewPhase, view: &RosterView) {
        self.phase = phase.clone();
        if &self.view != view {
            self.view = view.clone();
        }
        let target_count = self.view.removal_targets().len();
        if self.selected_index >= target_count {
            self.selected_index = target_count.saturating_sub(1);
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn selected_target(&self) -> Option<RemoveTarget> {
        self.view.removal_targets().get(self.selected_index).map(|t| (*t).clone())
    }

    fn next(&mut self) {
        let count = self.view.removal_targets().len();
        if count > 0 && self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    fn previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// List rows for the whole view plus the row holding the cursor.
    pub fn build_rows(&self) -> (Vec<ListItem<'static>>, Option<usize>) {
        let mut rows = Vec::new();
        let mut selected_row = None;
        let mut target_index = 0;

        for (i, block) in self.view.blocks.iter().enumerate() {
            if i > 0 {
                rows.push(ListItem::new(Line::from("")));
            }
            rows.extend(block_header(block));

            for entry in &block.participants {
                match entry {
                    ParticipantEntry::Removable { email, .. } => {
                        let selected = target_index == self.selected_index;
                        if selected {
                            selected_row = Some(rows.len());
                        }
                        rows.push(participant_row(email, selected && self.focused));
                        target_index += 1;
                    }
                    ParticipantEntry::Placeholder => {
                        rows.push(ListItem::new(Line::from(Span::styled(
                            format!("  {}", entry.label()),
                            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                        ))));
                    }
                }
            }
        }

        (rows, selected_row)
    }

    fn border_style(&self) -> Style {
        if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

fn block_header(block: &ActivityBlock) -> Vec<ListItem<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    vec![
        ListItem::new(Line::from(Span::styled(
            block.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))),
        ListItem::new(Line::from(block.description.clone())),
        ListItem::new(Line::from(vec![
            Span::styled("Schedule: ", bold),
            Span::raw(block.schedule.clone()),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("Availability: ", bold),
            Span::raw(block.availability()),
        ])),
        ListItem::new(Line::from(Span::styled("Participants:", bold))),
    ]
}

fn participant_row(email: &str, selected: bool) -> ListItem<'static> {
    let (marker, style) = if selected {
        ("▶ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("• ", Style::default().fg(Color::White))
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("  {}{}", marker, email), style),
        Span::styled("  [d] remove", Style::default().fg(Color::DarkGray)),
    ]))
}

impl Component for ActivityListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                Action::None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.view.removal_targets().len().saturating_sub(1);
                Action::None
            }
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => match self.selected_target() {
                Some(target) => Action::RemoveParticipant(target),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Activities")
            .border_style(self.border_style());

        match &self.phase {
            ViewPhase::Initial => {
                let loading = Paragraph::new(TEXT_LOADING_ACTIVITIES)
                    .style(Style::default().fg(Color::Yellow))
                    .block(block);
                f.render_widget(loading, rect);
            }
            ViewPhase::LoadError(notice) => {
                let error = Paragraph::new(notice.as_str())
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true })
                    .block(block);
                f.render_widget(error, rect);
            }
            ViewPhase::Ready if self.view.blocks.is_empty() => {
                let empty = Paragraph::new("No activities available")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                f.render_widget(empty, rect);
            }
            ViewPhase::Ready => {
                let (rows, selected_row) = self.build_rows();
                // Fresh state each frame: scrolling follows the cursor only.
                self.list_state = ListState::default();
                self.list_state.select(selected_row);
                let list = List::new(rows).block(block);
                f.render_stateful_widget(list, rect, &mut self.list_state);
            }
        }
    }
}
