//! Top-level terminal component: focus, key routing and composition.

use crate::logger::Logger;
use crate::sync::{Action, SyncController};
use crate::ui::components::{
    ActivityListComponent, FormField, LogPanelComponent, SignupFormComponent, StatusBarComponent,
};
use crate::ui::core::{Component, EventType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Which panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Activities,
    Email,
    Activity,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Activities => Self::Email,
            Self::Email => Self::Activity,
            Self::Activity => Self::Activities,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Activities => Self::Activity,
            Self::Email => Self::Activities,
            Self::Activity => Self::Email,
        }
    }

    fn form_field(self) -> Option<FormField> {
        match self {
            Self::Activities => None,
            Self::Email => Some(FormField::Email),
            Self::Activity => Some(FormField::Activity),
        }
    }
}

pub struct AppComponent {
    // Component composition
    activity_list: ActivityListComponent,
    signup_form: SignupFormComponent,
    status_bar: StatusBarComponent,
    log_panel: LogPanelComponent,

    // Synchronization with the roster service
    controller: SyncController,

    focus: Focus,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(controller: SyncController, logger: Logger) -> Self {
        let mut app = Self {
            activity_list: ActivityListComponent::new(),
            signup_form: SignupFormComponent::new(),
            status_bar: StatusBarComponent::new(),
            log_panel: LogPanelComponent::new(logger),
            controller,
            focus: Focus::Activities,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    /// Kick off the initial roster load
    pub fn start(&mut self) {
        self.controller.start();
        self.sync_component_data();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn controller(&self) -> &SyncController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SyncController {
        &mut self.controller
    }

    pub fn logs_visible(&self) -> bool {
        self.log_panel.is_visible()
    }

    /// Push controller state into the components
    fn sync_component_data(&mut self) {
        let phase = self.controller.phase().clone();
        self.activity_list.update_data(&phase, self.controller.view());
        self.activity_list.set_focused(self.focus == Focus::Activities);

        self.signup_form.update_data(
            self.controller.form(),
            &self.controller.view().options,
            self.controller.validation_error(),
        );
        self.signup_form.set_focus(self.focus.form_field());

        self.status_bar
            .update_data(self.controller.status_message(), self.controller.is_busy());
    }

    /// Keys that apply regardless of the focused panel
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            _ => Action::None,
        }
    }

    /// Keys left over after the focused panel had its turn
    fn handle_fallback_key(&mut self, key: KeyEvent) -> Action {
        match (self.focus, key.code) {
            (Focus::Activities, KeyCode::Char('q')) | (Focus::Activities, KeyCode::Esc) => {
                log::info!("Global key: quitting application");
                Action::Quit
            }
            (Focus::Activities, KeyCode::Char('G')) => Action::ShowLogs(true),
            (_, KeyCode::Esc) => {
                self.focus = Focus::Activities;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_global_key(key);
        }
        if self.log_panel.is_visible() {
            return self.log_panel.handle_key_events(key);
        }

        let global = self.handle_global_key(key);
        if !matches!(global, Action::None) {
            return global;
        }

        let focused = match self.focus {
            Focus::Activities => self.activity_list.handle_key_events(key),
            Focus::Email | Focus::Activity => self.signup_form.handle_key_events(key),
        };
        if !matches!(focused, Action::None) {
            return focused;
        }

        self.handle_fallback_key(key)
    }

    /// Apply an action: the controller first, then UI-only leftovers
    pub fn dispatch(&mut self, action: Action) {
        let action = self.controller.handle_action(action);
        let action = self.log_panel.update(action);

        match action {
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrevious => self.focus = self.focus.previous(),
            Action::Quit => self.should_quit = true,
            Action::None => {}
            other => log::debug!("Unhandled action {:?}", other),
        }

        self.sync_component_data();
    }

    /// Apply results reported by background requests
    pub fn process_background_actions(&mut self) {
        for action in self.controller.process_background_actions() {
            self.dispatch(action);
        }
        self.sync_component_data();
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType) -> anyhow::Result<()> {
        let action = match event {
            EventType::Key(key) => self.route_key(key),
            EventType::Tick => {
                self.controller.tick();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dispatch(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);
        let top_chunks = LayoutManager::top_pane_layout(chunks[0]);

        self.activity_list.render(f, top_chunks[0]);
        self.signup_form.render(f, top_chunks[1]);
        self.status_bar.render(f, chunks[1]);

        // Overlay last
        self.log_panel.render(f, rect);
    }
}
