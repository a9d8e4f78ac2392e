use crate::constants::TEXT_SELECT_ACTIVITY;
use crate::render::ActivityOption;
use crate::sync::{Action, EmailEdit, SignupForm, Step, ValidationError};
use crate::ui::core::Component;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Activity,
}

/// Email input and activity chooser.
///
/// Holds a copy of the controller's form for painting; edits go out as
/// actions so the controller stays the owner of the form.
pub struct SignupFormComponent {
    pub form: SignupForm,
    pub options: Vec<ActivityOption>,
    pub validation_error: Option<ValidationError>,
    pub focus: Option<FormField>,
}

impl Default for SignupFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupFormComponent {
    pub fn new() -> Self {
        Self {
            form: SignupForm::default(),
            options: Vec::new(),
            validation_error: None,
            focus: None,
        }
    }

    pub fn update_data(
        &mut self,
        form: &SignupForm,
        options: &[ActivityOption],
        validation_error: Option<ValidationError>,
    ) {
        self.form = form.clone();
        self.options = options.to_vec();
        self.validation_error = validation_error;
    }

    pub fn set_focus(&mut self, focus: Option<FormField>) {
        self.focus = focus;
    }

    /// Label of the chosen activity, or the placeholder.
    pub fn activity_label(&self) -> &str {
        self.form
            .activity
            .as_deref()
            .and_then(|name| self.options.iter().find(|option| option.value == name))
            .map(|option| option.label.as_str())
            .unwrap_or(TEXT_SELECT_ACTIVITY)
    }

    fn field_style(&self, field: FormField) -> Style {
        if self.focus == Some(field) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

impl Component for SignupFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.focus {
            Some(FormField::Email) => match key.code {
                KeyCode::Enter => Action::SubmitSignup,
                KeyCode::Backspace => Action::EditEmail(EmailEdit::Backspace),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Action::EditEmail(EmailEdit::Clear)
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Action::EditEmail(EmailEdit::Insert(c))
                }
                _ => Action::None,
            },
            Some(FormField::Activity) => match key.code {
                KeyCode::Enter => Action::SubmitSignup,
                KeyCode::Left | KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('h') => {
                    Action::CycleActivity(Step::Backward)
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Char(' ') => {
                    Action::CycleActivity(Step::Forward)
                }
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let label_style = Style::default().add_modifier(Modifier::BOLD);
        let cursor = if self.focus == Some(FormField::Email) { "▏" } else { "" };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Email:    ", label_style),
                Span::styled(format!("{}{}", self.form.email, cursor), self.field_style(FormField::Email)),
            ]),
            Line::from(vec![
                Span::styled("Activity: ", label_style),
                Span::styled(
                    format!("◀ {} ▶", self.activity_label()),
                    self.field_style(FormField::Activity),
                ),
            ]),
            Line::from(""),
        ];

        if let Some(error) = &self.validation_error {
            lines.push(Line::from(Span::styled(
                format!("❌ {}", error),
                Style::default().fg(Color::Red),
            )));
        }

        lines.push(Line::from(Span::styled(
            "Enter: sign up • ←/→: choose activity",
            Style::default().fg(Color::DarkGray),
        )));

        let border_style = if self.focus.is_some() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Sign Up")
                    .border_style(border_style),
            );
        f.render_widget(paragraph, rect);
    }
}
