//! View synchronization.
//!
//! [`SyncController`] owns the view lifecycle: it loads the roster on
//! startup, turns user intents into background requests, re-fetches the
//! whole roster after every confirmed mutation and keeps the status message
//! current. It never patches the roster locally; the server is the only
//! source of truth.
//!
//! # Phases
//!
//! - [`ViewPhase::Initial`] until the first fetch resolves.
//! - [`ViewPhase::Ready`] once a roster has been rendered. Mutations are only
//!   accepted here.
//! - [`ViewPhase::LoadError`] if the first fetch failed. There is no retry;
//!   restarting the client is the only way out.

pub mod actions;
pub mod form;
pub mod task_manager;

pub use actions::{Action, EmailEdit, Mutation, Step};
pub use form::{SignupForm, ValidationError};
pub use task_manager::{TaskId, TaskKind, TaskManager};

use crate::client::{ClientError, ErrorKind, MutationReceipt, RosterApi};
use crate::constants::ERROR_LOAD_ACTIVITIES;
use crate::render::{render_roster, RemoveTarget, RosterView};
use crate::roster::Roster;
use crate::status::{StatusBoard, StatusKind, StatusMessage};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    Initial,
    Ready,
    /// Terminal failure of the first fetch, with the notice to display.
    LoadError(String),
}

pub struct SyncController {
    api: Arc<dyn RosterApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    phase: ViewPhase,
    view: RosterView,
    form: SignupForm,
    validation_error: Option<ValidationError>,
    status: StatusBoard,
    started: bool,
}

impl SyncController {
    pub fn new(api: Arc<dyn RosterApi>, status_ttl: Duration) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            api,
            task_manager,
            background_action_rx,
            phase: ViewPhase::Initial,
            view: RosterView::default(),
            form: SignupForm::default(),
            validation_error: None,
            status: StatusBoard::new(status_ttl),
            started: false,
        }
    }

    /// Issue the initial roster fetch. Later calls do nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        log::info!("Sync: starting initial roster load");
        self.task_manager.spawn_roster_load(self.api.clone(), true);
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    /// Last rendered roster. Empty until the first successful fetch.
    pub fn view(&self) -> &RosterView {
        &self.view
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    /// Currently visible status message, if any.
    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status.current()
    }

    /// Hide the status message once its window has passed.
    pub fn tick(&mut self) -> bool {
        let hidden = self.status.expire();
        if hidden {
            log::debug!("Status: message expired");
        }
        hidden
    }

    pub fn is_loading(&self) -> bool {
        self.task_manager.is_loading()
    }

    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Apply an action. UI-only actions are handed back unchanged; everything
    /// this controller consumes turns into [`Action::None`].
    pub fn handle_action(&mut self, action: Action) -> Action {
        match action {
            Action::SubmitSignup => {
                self.submit_signup();
                Action::None
            }
            Action::RemoveParticipant(target) => {
                self.remove_participant(target);
                Action::None
            }
            Action::EditEmail(edit) => {
                self.form.apply_edit(&edit);
                Action::None
            }
            Action::CycleActivity(step) => {
                self.form.cycle_activity(&self.view.options, step);
                Action::None
            }
            Action::InitialRosterLoaded(roster) => {
                log::info!("Sync: initial roster loaded with {} activities", roster.len());
                self.phase = ViewPhase::Ready;
                self.apply_roster(&roster);
                Action::None
            }
            Action::InitialLoadFailed(error) => {
                log::error!("Sync: initial roster load failed ({}): {}", error.kind().as_str(), error);
                self.phase = ViewPhase::LoadError(ERROR_LOAD_ACTIVITIES.to_string());
                Action::None
            }
            Action::RosterLoaded(roster) => {
                if self.phase == ViewPhase::Ready {
                    log::info!("Sync: roster refreshed with {} activities", roster.len());
                    self.apply_roster(&roster);
                } else {
                    log::warn!("Sync: ignoring roster refresh in phase {:?}", self.phase);
                }
                Action::None
            }
            Action::RosterRefreshFailed(error) => {
                log::warn!(
                    "Sync: roster refresh failed ({}), keeping the last rendered roster: {}",
                    error.kind().as_str(),
                    error
                );
                Action::None
            }
            Action::MutationSucceeded { mutation, receipt } => {
                let text = success_text(&mutation, &receipt);
                log::info!("Sync: {} succeeded: {}", mutation.describe(), text);
                self.status.show(StatusKind::Success, text);
                if matches!(mutation, Mutation::Signup { .. }) {
                    self.form.reset();
                    self.validation_error = None;
                }
                self.task_manager.spawn_roster_load(self.api.clone(), false);
                Action::None
            }
            Action::MutationFailed { mutation, error } => {
                let text = failure_text(&mutation, &error);
                match error.kind() {
                    ErrorKind::Transport => {
                        log::warn!("Sync: {} failed (transport): {}", mutation.describe(), error)
                    }
                    ErrorKind::Remote => {
                        log::info!("Sync: {} rejected (remote): {}", mutation.describe(), error)
                    }
                    ErrorKind::Validation => {
                        log::warn!("Sync: {} refused by client (validation): {}", mutation.describe(), error)
                    }
                }
                self.status.show(StatusKind::Error, text);
                Action::None
            }
            other => other,
        }
    }

    fn submit_signup(&mut self) {
        if self.phase != ViewPhase::Ready {
            log::debug!("Sync: ignoring signup in phase {:?}", self.phase);
            return;
        }

        match self.form.validate() {
            Ok((activity, email)) => {
                self.validation_error = None;
                log::info!("Sync: signing up {} for '{}'", email, activity);
                self.task_manager
                    .spawn_mutation(self.api.clone(), Mutation::Signup { activity, email });
            }
            Err(error) => {
                log::debug!("Sync: signup form incomplete: {}", error);
                self.validation_error = Some(error);
            }
        }
    }

    fn remove_participant(&mut self, target: RemoveTarget) {
        if self.phase != ViewPhase::Ready {
            log::debug!("Sync: ignoring removal in phase {:?}", self.phase);
            return;
        }

        log::info!("Sync: removing {} from '{}'", target.email, target.activity);
        self.task_manager.spawn_mutation(self.api.clone(), Mutation::Remove(target));
    }

    fn apply_roster(&mut self, roster: &Roster) {
        self.view = render_roster(roster);
        self.form.reconcile(&self.view.options);
    }

    /// Drain results that background tasks have reported so far
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received action {:?}", action);
            actions.push(action);
        }

        self.task_manager.cleanup_finished_tasks();
        actions
    }

    /// Wait for the next background result.
    pub async fn next_background_action(&mut self) -> Option<Action> {
        let action = self.background_action_rx.recv().await;
        self.task_manager.cleanup_finished_tasks();
        action
    }
}

/// Message shown for a failed mutation.
///
/// Server detail wins; otherwise a fallback that depends on whether the
/// service answered at all.
/// Status text for a confirmed mutation.
pub fn success_text(mutation: &Mutation, receipt: &MutationReceipt) -> String {
    if receipt.message.is_empty() {
        mutation.success_fallback().to_string()
    } else {
        receipt.message.clone()
    }
}

pub fn failure_text(mutation: &Mutation, error: &ClientError) -> String {
    if let Some(detail) = error.detail() {
        return detail.to_string();
    }
    match error.kind() {
        ErrorKind::Transport => mutation.transport_fallback().to_string(),
        ErrorKind::Remote | ErrorKind::Validation => mutation.rejected_fallback().to_string(),
    }
}
