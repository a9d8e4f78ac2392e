use crate::client::{ClientError, MutationReceipt};
use crate::constants::{
    ERROR_REMOVE_REJECTED, ERROR_REMOVE_TRANSPORT, ERROR_SIGNUP_REJECTED, ERROR_SIGNUP_TRANSPORT, TEXT_REMOVE_DONE,
    TEXT_SIGNUP_DONE,
};
use crate::render::RemoveTarget;
use crate::roster::Roster;

/// A state-changing request against the roster service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Signup { activity: String, email: String },
    Remove(RemoveTarget),
}

impl Mutation {
    pub fn describe(&self) -> String {
        match self {
            Self::Signup { activity, email } => format!("Sign up {} for '{}'", email, activity),
            Self::Remove(target) => format!("Remove {} from '{}'", target.email, target.activity),
        }
    }

    pub fn success_fallback(&self) -> &'static str {
        match self {
            Self::Signup { .. } => TEXT_SIGNUP_DONE,
            Self::Remove(_) => TEXT_REMOVE_DONE,
        }
    }

    /// Text shown when the service rejected the request without a detail
    pub fn rejected_fallback(&self) -> &'static str {
        match self {
            Self::Signup { .. } => ERROR_SIGNUP_REJECTED,
            Self::Remove(_) => ERROR_REMOVE_REJECTED,
        }
    }

    /// Text shown when the request never got a well-formed answer
    pub fn transport_fallback(&self) -> &'static str {
        match self {
            Self::Signup { .. } => ERROR_SIGNUP_TRANSPORT,
            Self::Remove(_) => ERROR_REMOVE_TRANSPORT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailEdit {
    Insert(char),
    Backspace,
    Clear,
}

#[derive(Debug, Clone)]
pub enum Action {
    // User intents
    SubmitSignup,
    RemoveParticipant(RemoveTarget),
    EditEmail(EmailEdit),
    CycleActivity(Step),

    // Background results
    InitialRosterLoaded(Roster),
    InitialLoadFailed(ClientError),
    RosterLoaded(Roster),
    RosterRefreshFailed(ClientError),
    MutationSucceeded {
        mutation: Mutation,
        receipt: MutationReceipt,
    },
    MutationFailed {
        mutation: Mutation,
        error: ClientError,
    },

    // UI operations
    FocusNext,
    FocusPrevious,
    ShowLogs(bool),

    // App control
    Quit,
    None,
}
