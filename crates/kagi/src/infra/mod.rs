//! Infrastructure adapters for the filesystem, change notifications, logging,
//! and the system browser.

/// Regular-file listing for one directory.
pub mod directory;
pub mod log;
/// System browser hand-off for rendered documents.
pub mod opener;
/// Single-subscription directory change notifications.
pub mod watcher;
