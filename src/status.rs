//! Transient status messages.
//!
//! A message carries its own deadline. Showing a new message replaces the
//! old one together with its deadline, so an earlier message can never hide
//! a later one.

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: StatusKind,
    pub text: String,
    pub shown_at: Instant,
    pub expires_at: Instant,
}

impl StatusMessage {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Holder for the single visible status message.
#[derive(Debug, Clone)]
pub struct StatusBoard {
    current: Option<StatusMessage>,
    ttl: Duration,
    next_id: u64,
}

impl StatusBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            ttl,
            next_id: 1,
        }
    }

    /// Show a message now, superseding any visible one.
    pub fn show(&mut self, kind: StatusKind, text: impl Into<String>) -> &StatusMessage {
        self.show_at(kind, text, Instant::now())
    }

    pub fn show_at(&mut self, kind: StatusKind, text: impl Into<String>, now: Instant) -> &StatusMessage {
        let id = self.next_id;
        self.next_id += 1;
        if let Some(previous) = &self.current {
            if previous.is_visible_at(now) {
                log::debug!("Status #{} superseded by #{}", previous.id, id);
            }
        }
        self.current.insert(StatusMessage {
            id,
            kind,
            text: text.into(),
            shown_at: now,
            expires_at: now + self.ttl,
        })
    }

    /// Visible message at `now`, if any.
    pub fn current_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.current.as_ref().filter(|message| message.is_visible_at(now))
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current_at(Instant::now())
    }

    /// Drop an expired message. Returns true if one was hidden.
    pub fn expire_at(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|message| !message.is_visible_at(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn expire(&mut self) -> bool {
        self.expire_at(Instant::now())
    }
}
