//! Reusable UI components

pub mod activity_list;
pub mod log_panel;
pub mod signup_form;
pub mod status_bar;

pub use activity_list::ActivityListComponent;
pub use log_panel::LogPanelComponent;
pub use signup_form::{FormField, SignupFormComponent};
pub use status_bar::StatusBarComponent;
