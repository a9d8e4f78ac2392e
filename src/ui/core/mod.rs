//! Core UI building blocks.
//!
//! - [`component`] - Base component trait shared by every panel
//! - [`event_handler`] - Terminal input polling and ticks

pub mod component;
pub mod event_handler;

pub use component::Component;
pub use event_handler::{EventHandler, EventType};
