use super::actions::{EmailEdit, Step};
use crate::constants::{ERROR_ACTIVITY_REQUIRED, ERROR_EMAIL_REQUIRED};
use crate::render::ActivityOption;

/// Local check failure on the signup form. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", ERROR_EMAIL_REQUIRED)]
    MissingEmail,
    #[error("{}", ERROR_ACTIVITY_REQUIRED)]
    MissingActivity,
}

/// Contents of the signup form.
///
/// `activity` is `None` while the chooser sits on its placeholder entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: Option<String>,
}

impl SignupForm {
    pub fn apply_edit(&mut self, edit: &EmailEdit) {
        match edit {
            EmailEdit::Insert(c) => self.email.push(*c),
            EmailEdit::Backspace => {
                self.email.pop();
            }
            EmailEdit::Clear => self.email.clear(),
        }
    }

    /// Move the chooser one entry, wrapping through the placeholder.
    pub fn cycle_activity(&mut self, options: &[ActivityOption], step: Step) {
        if options.is_empty() {
            self.activity = None;
            return;
        }

        let current = self
            .activity
            .as_deref()
            .and_then(|name| options.iter().position(|option| option.value == name));
        let last = options.len() - 1;

        let next = match (current, step) {
            (None, Step::Forward) => Some(0),
            (None, Step::Backward) => Some(last),
            (Some(i), Step::Forward) if i == last => None,
            (Some(i), Step::Forward) => Some(i + 1),
            (Some(0), Step::Backward) => None,
            (Some(i), Step::Backward) => Some(i - 1),
        };

        self.activity = next.map(|i| options[i].value.clone());
    }

    /// Drop the chosen activity if a re-render no longer offers it.
    pub fn reconcile(&mut self, options: &[ActivityOption]) {
        if let Some(name) = &self.activity {
            if !options.iter().any(|option| &option.value == name) {
                self.activity = None;
            }
        }
    }

    /// Return `(activity, email)` ready to send, or the first missing field.
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        match self.activity.as_deref() {
            Some(activity) if !activity.is_empty() => Ok((activity.to_string(), email.to_string())),
            _ => Err(ValidationError::MissingActivity),
        }
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.activity = None;
    }
}
