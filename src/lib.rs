//! Rollcall - a terminal client for an activities roster service
//!
//! This library keeps a terminal view of a remote activities roster in sync
//! with the service and relays signups and participant removals back to it.
//! The server is the only source of truth: every confirmed change is
//! followed by a full re-fetch.
//!
//! # Modules
//!
//! * [`client`] - Roster service client (list, signup, remove)
//! * [`roster`] - Roster data model as served by the API
//! * [`render`] - Pure roster-to-view rendering
//! * [`sync`] - Sync controller, background requests and actions
//! * [`status`] - Transient status messages
//! * [`ui`] - Terminal user interface components
//! * [`config`] - Application configuration management

/// Roster service client and error types
pub mod client;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing text
pub mod constants;

/// Logging setup on top of `log` and `fern`
pub mod logger;

/// Pure rendering of a roster into display blocks
pub mod render;

/// Roster data model
pub mod roster;

/// Transient status messages with expiry
pub mod status;

/// View synchronization controller
pub mod sync;

/// Terminal user interface components and rendering
pub mod ui;

pub use client::{ClientError, HttpRosterClient, MutationReceipt, RosterApi};
pub use roster::{Activity, Roster};
pub use sync::{SyncController, ViewPhase};
