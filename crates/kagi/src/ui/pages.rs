//! Full-screen UI page modules.

pub mod browser;
