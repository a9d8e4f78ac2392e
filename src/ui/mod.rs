//! Terminal user interface.
//!
//! Paints the controller's state (activity list, signup form, status line)
//! and turns key presses into actions.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::{AppComponent, Focus};
pub use layout::LayoutManager;
pub use renderer::run_app;
