//! `AppMode`-specific key handling modules.

pub(crate) mod browse;
pub(crate) mod directory_prompt;
pub(crate) mod help;
