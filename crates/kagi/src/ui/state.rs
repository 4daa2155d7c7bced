//! UI state shared between the runtime key handlers and renderers.

pub mod app_mode;
pub mod help_action;
