//! Constants used throughout the application
//!
//! This module centralizes user-facing strings and default values so the
//! controller, renderer and terminal components agree on them.

use std::time::Duration;

// Roster rendering
pub const TEXT_NO_PARTICIPANTS: &str = "No participants yet";
pub const TEXT_SELECT_ACTIVITY: &str = "-- Select an activity --";
pub const TEXT_LOADING_ACTIVITIES: &str = "Loading activities...";
pub const ERROR_LOAD_ACTIVITIES: &str = "Failed to load activities. Please try again later.";

// Mutation confirmations (server sent no message)
pub const TEXT_SIGNUP_DONE: &str = "Signed up";
pub const TEXT_REMOVE_DONE: &str = "Participant removed";

// Mutation fallbacks (server sent no usable detail)
pub const ERROR_SIGNUP_REJECTED: &str = "An error occurred";
pub const ERROR_REMOVE_REJECTED: &str = "Failed to remove participant";

// Mutation fallbacks (request never produced a well-formed answer)
pub const ERROR_SIGNUP_TRANSPORT: &str = "Failed to sign up. Please try again.";
pub const ERROR_REMOVE_TRANSPORT: &str = "Failed to remove participant. Please try again.";

// Local validation
pub const ERROR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERROR_ACTIVITY_REQUIRED: &str = "Choose an activity";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const HINT_KEYS: &str = "Tab: focus • j/k: move • d: remove • Enter: sign up • G: logs • q: quit";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - 'c' to clear, 'Esc' or 'G' to close";

/// How long a status message stays visible unless superseded
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Default per-request timeout for the roster service
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default roster service address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding `api.base_url`
pub const ENV_BASE_URL: &str = "ROLLCALL_BASE_URL";

/// Number of log lines kept in memory for the log panel
pub const MAX_LOG_ENTRIES: usize = 500;
