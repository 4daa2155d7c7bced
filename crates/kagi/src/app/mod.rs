//! App-layer composition root and shared state container.
//!
//! This module wires the browse workflow submodules and exposes [`App`],
//! which runtime mode handlers drive.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::file::ListRow;
use crate::domain::render::RenderInstruction;
use crate::infra::opener::{SystemUriOpener, UriOpener};
use crate::infra::watcher::{
    ChangeNotifier, DirectoryWatcher, NotifyDirectoryWatcher, WatchSubscription,
};
use crate::ui::state::app_mode::AppMode;

pub mod chooser;
pub mod classifier;
pub mod controller;
pub mod preview;
pub mod render;

pub use controller::{SelectionController, SelectionPolicy};
pub use preview::PreviewDocument;

/// Directory name under the home directory that stores the log file.
pub const KAGI_DIR: &str = ".kagi";
/// Default log file name under [`kagi_home`].
pub const LOG_FILE: &str = "kagi.log";

/// Returns the kagi home directory (`~/.kagi`).
pub fn kagi_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(KAGI_DIR);
    }

    PathBuf::from(KAGI_DIR)
}

/// Startup options resolved from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory opened before the first frame, when given.
    pub initial_directory: Option<PathBuf>,
    pub selection_policy: SelectionPolicy,
}

/// Internal app events emitted by background producers.
///
/// Producers only send events; state mutation is centralized in
/// [`App::process_pending_app_events`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum AppEvent {
    /// The watched directory reported a change.
    DirectoryChanged { subscription: WatchSubscription },
}

/// Stores application state and coordinates the browse workflow.
pub struct App {
    pub mode: AppMode,
    controller: SelectionController,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    opener: Arc<dyn UriOpener>,
    preview: Option<PreviewDocument>,
    preview_scroll: u16,
    status_message: Option<String>,
    working_dir: PathBuf,
}

impl App {
    /// Builds the app with the platform directory watcher and browser, and
    /// opens the configured initial directory.
    pub fn new(config: AppConfig, working_dir: PathBuf) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let notifier: ChangeNotifier = Arc::new(move |subscription| {
            let _ = event_tx.send(AppEvent::DirectoryChanged { subscription });
        });

        Self::with_services(
            config,
            working_dir,
            Box::new(NotifyDirectoryWatcher::new(notifier)),
            Arc::new(SystemUriOpener),
            event_rx,
        )
    }

    /// Builds the app around injected boundaries.
    pub(crate) fn with_services(
        config: AppConfig,
        working_dir: PathBuf,
        watcher: Box<dyn DirectoryWatcher>,
        opener: Arc<dyn UriOpener>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        let mut app = Self {
            mode: AppMode::Browse,
            controller: SelectionController::new(watcher, config.selection_policy),
            event_rx,
            opener,
            preview: None,
            preview_scroll: 0,
            status_message: None,
            working_dir,
        };

        if let Some(directory) = config.initial_directory {
            app.choose_directory(directory);
        }

        app
    }

    /// Returns the directory relative prompt input resolves against.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Returns the directory being browsed, once one was chosen.
    pub fn current_directory(&self) -> Option<&Path> {
        self.controller.current_directory()
    }

    /// Returns the list rows for the current listing.
    pub fn rows(&self) -> Vec<ListRow> {
        self.controller.rows()
    }

    /// Returns the list index of the selected row.
    pub fn selected_index(&self) -> Option<usize> {
        self.controller.selection().map(|row| row.index)
    }

    /// Returns the loaded preview for the current selection.
    pub fn preview(&self) -> Option<&PreviewDocument> {
        self.preview.as_ref()
    }

    /// Returns the preview pane scroll offset.
    pub fn preview_scroll(&self) -> u16 {
        self.preview_scroll
    }

    /// Returns the latest status line message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Returns whether the selection resolved to a document the browser can
    /// open.
    pub fn can_open_selection(&self) -> bool {
        self.controller
            .render_instruction()
            .and_then(RenderInstruction::uri)
            .is_some()
    }

    /// Returns whether the current directory is being watched for changes.
    pub fn is_watching(&self) -> bool {
        self.controller.is_watching()
    }

    /// Opens `directory` and replaces the listing. Clears the preview.
    pub fn choose_directory(&mut self, directory: PathBuf) {
        self.controller.directory_chosen(directory);
        self.preview = None;
        self.preview_scroll = 0;
        self.status_message = self.controller.listing_error().map(str::to_string);
    }

    /// Records that the directory prompt did not produce a directory.
    pub fn reject_directory_choice(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        debug!("Directory choice rejected: {reason}");

        self.status_message = Some(reason);
    }

    /// Moves the selection by `offset` rows and loads the new preview.
    ///
    /// With no selection, any movement selects the first row.
    pub async fn move_selection(&mut self, offset: isize) {
        let row_count = self.controller.entry_count();
        if row_count == 0 {
            return;
        }

        let next_index = match self.selected_index() {
            None => 0,
            Some(current_index) if offset.is_negative() => {
                current_index.saturating_sub(offset.unsigned_abs())
            }
            Some(current_index) => current_index
                .saturating_add(offset.unsigned_abs())
                .min(row_count - 1),
        };

        if self.selected_index() == Some(next_index) {
            return;
        }

        self.select_index(next_index).await;
    }

    /// Selects the row at `index` and loads its preview.
    pub async fn select_index(&mut self, index: usize) {
        let Some(row) = self.controller.row_id(index) else {
            return;
        };

        let instruction = self.controller.entry_selected(row).cloned();
        self.preview_scroll = 0;
        self.preview = match instruction {
            Some(instruction) => Some(load_preview(instruction).await),
            None => None,
        };
    }

    /// Re-lists the current directory on user request.
    pub async fn refresh(&mut self) {
        self.controller.refresh();
        self.after_refresh().await;
    }

    /// Hands the selected document to the system browser.
    pub fn open_selection_in_browser(&mut self) {
        let Some(uri) = self
            .controller
            .render_instruction()
            .and_then(RenderInstruction::uri)
        else {
            self.status_message = Some("Select an HTML file to open it".to_string());

            return;
        };

        match self.opener.open(uri) {
            Ok(()) => {
                info!("Opened {uri} in browser");
                self.status_message = Some(format!("Opened {uri}"));
            }
            Err(error) => {
                warn!("{error}");
                self.status_message = Some(error.to_string());
            }
        }
    }

    /// Scrolls the preview pane by `offset` lines.
    pub fn scroll_preview(&mut self, offset: i16) {
        if offset.is_negative() {
            self.preview_scroll = self.preview_scroll.saturating_sub(offset.unsigned_abs());

            return;
        }

        self.preview_scroll = self.preview_scroll.saturating_add(offset.unsigned_abs());
    }

    /// Applies every queued background event.
    ///
    /// Change notifications are coalesced per subscription, so a burst of
    /// filesystem events causes one re-list.
    pub async fn process_pending_app_events(&mut self) {
        let mut subscriptions = BTreeSet::new();
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::DirectoryChanged { subscription } => {
                    subscriptions.insert(subscription.0);
                }
            }
        }

        let mut refreshed = false;
        for subscription in subscriptions {
            refreshed |= self
                .controller
                .directory_changed(WatchSubscription(subscription));
        }

        if refreshed {
            debug!("Directory changed; listing refreshed");
            self.after_refresh().await;
        }
    }

    async fn after_refresh(&mut self) {
        self.status_message = self.controller.listing_error().map(str::to_string);
        self.preview_scroll = 0;
        self.preview = match self.controller.render_instruction().cloned() {
            Some(instruction) => Some(load_preview(instruction).await),
            None => None,
        };
    }
}

/// Loads preview text off the event loop thread.
async fn load_preview(instruction: RenderInstruction) -> PreviewDocument {
    let fallback_source = instruction
        .uri()
        .map_or_else(|| "inline".to_string(), ToString::to_string);

    tokio::task::spawn_blocking(move || preview::load_preview(&instruction))
        .await
        .unwrap_or_else(|error| PreviewDocument {
            source: fallback_source,
            text: format!("Failed to load preview: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::infra::opener::{MockUriOpener, OpenError};
    use crate::infra::watcher::MockDirectoryWatcher;

    const SUBSCRIPTION: WatchSubscription = WatchSubscription(7);

    /// Returns a mock watcher that accepts any path and reports
    /// [`SUBSCRIPTION`] as active.
    fn accepting_watcher(watched: Option<PathBuf>) -> MockDirectoryWatcher {
        let mut watcher = MockDirectoryWatcher::new();
        watcher.expect_watch().return_const(());
        watcher.expect_watched_path().return_const(watched);
        watcher
            .expect_active_subscription()
            .return_const(Some(SUBSCRIPTION));

        watcher
    }

    fn test_app(
        directory: &Path,
        opener: MockUriOpener,
    ) -> (App, mpsc::UnboundedSender<AppEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let config = AppConfig {
            initial_directory: Some(directory.to_path_buf()),
            selection_policy: SelectionPolicy::ClearOnRefresh,
        };
        let app = App::with_services(
            config,
            directory.to_path_buf(),
            Box::new(accepting_watcher(Some(directory.to_path_buf()))),
            Arc::new(opener),
            event_rx,
        );

        (app, event_tx)
    }

    #[test]
    fn test_kagi_home_ends_with_kagi_dir() {
        // Arrange & Act
        let home = kagi_home();

        // Assert
        assert!(home.ends_with(KAGI_DIR));
    }

    #[test]
    fn test_new_opens_initial_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("a.html"), "").expect("failed to write file");

        // Act
        let (app, _event_tx) = test_app(temp_dir.path(), MockUriOpener::new());

        // Assert
        assert_eq!(app.current_directory(), Some(temp_dir.path()));
        assert_eq!(app.rows().len(), 1);
        assert_eq!(app.selected_index(), None);
        assert!(app.preview().is_none());
    }

    #[tokio::test]
    async fn test_move_selection_selects_first_row_then_advances() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("a.html"), "<p>alpha</p>").expect("failed to write file");
        fs::write(temp_dir.path().join("b.txt"), "beta").expect("failed to write file");
        let (mut app, _event_tx) = test_app(temp_dir.path(), MockUriOpener::new());

        // Act
        app.move_selection(1).await;
        let first_preview = app.preview().cloned();
        app.move_selection(1).await;
        app.move_selection(1).await;

        // Assert
        assert_eq!(
            first_preview.map(|document| document.text),
            Some("alpha".to_string())
        );
        assert_eq!(app.selected_index(), Some(1));
        assert_eq!(
            app.preview().map(|document| document.text.as_str()),
            Some("Not an HTML file\n\nSelect an HTML file to view its contents.")
        );
    }

    #[tokio::test]
    async fn test_directory_changed_event_refreshes_and_clears_selection() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("a.html"), "").expect("failed to write file");
        let (mut app, event_tx) = test_app(temp_dir.path(), MockUriOpener::new());
        app.move_selection(1).await;
        fs::write(temp_dir.path().join("b.html"), "").expect("failed to write file");

        // Act
        for _ in 0..3 {
            event_tx
                .send(AppEvent::DirectoryChanged {
                    subscription: SUBSCRIPTION,
                })
                .expect("failed to send event");
        }
        app.process_pending_app_events().await;

        // Assert
        assert_eq!(app.rows().len(), 2);
        assert_eq!(app.selected_index(), None);
        assert!(app.preview().is_none());
    }

    #[tokio::test]
    async fn test_stale_subscription_event_is_ignored() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let (mut app, event_tx) = test_app(temp_dir.path(), MockUriOpener::new());
        fs::write(temp_dir.path().join("late.html"), "").expect("failed to write file");

        // Act
        event_tx
            .send(AppEvent::DirectoryChanged {
                subscription: WatchSubscription(1),
            })
            .expect("failed to send event");
        app.process_pending_app_events().await;

        // Assert
        assert!(app.rows().is_empty());
    }

    #[tokio::test]
    async fn test_open_selection_in_browser_uses_opener() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("index.html"), "").expect("failed to write file");
        let mut opener = MockUriOpener::new();
        opener
            .expect_open()
            .withf(|uri| uri.as_str().ends_with("/index.html"))
            .times(1)
            .returning(|_| Ok(()));
        let (mut app, _event_tx) = test_app(temp_dir.path(), opener);
        app.move_selection(1).await;

        // Act
        app.open_selection_in_browser();

        // Assert
        assert!(
            app.status_message()
                .is_some_and(|message| message.starts_with("Opened file://"))
        );
    }

    #[tokio::test]
    async fn test_open_selection_in_browser_reports_failure() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("index.html"), "").expect("failed to write file");
        let mut opener = MockUriOpener::new();
        opener.expect_open().returning(|uri| {
            Err(OpenError {
                uri: uri.to_string(),
                source: io::Error::other("no browser"),
            })
        });
        let (mut app, _event_tx) = test_app(temp_dir.path(), opener);
        app.move_selection(1).await;

        // Act
        app.open_selection_in_browser();

        // Assert
        assert!(
            app.status_message()
                .is_some_and(|message| message.contains("no browser"))
        );
    }

    #[tokio::test]
    async fn test_open_selection_in_browser_requires_html_selection() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("notes.txt"), "").expect("failed to write file");
        let mut opener = MockUriOpener::new();
        opener.expect_open().never();
        let (mut app, _event_tx) = test_app(temp_dir.path(), opener);
        app.move_selection(1).await;

        // Act
        app.open_selection_in_browser();

        // Assert
        assert_eq!(
            app.status_message(),
            Some("Select an HTML file to open it")
        );
    }

    #[test]
    fn test_scroll_preview_saturates() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let (mut app, _event_tx) = test_app(temp_dir.path(), MockUriOpener::new());

        // Act
        app.scroll_preview(-3);
        let after_up = app.preview_scroll();
        app.scroll_preview(2);

        // Assert
        assert_eq!(after_up, 0);
        assert_eq!(app.preview_scroll(), 2);
    }

    #[tokio::test]
    async fn test_real_watcher_refreshes_listing_on_file_creation() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let config = AppConfig {
            initial_directory: Some(temp_dir.path().to_path_buf()),
            selection_policy: SelectionPolicy::ClearOnRefresh,
        };
        let mut app = App::new(config, temp_dir.path().to_path_buf());
        assert!(app.is_watching());

        // Act
        fs::write(temp_dir.path().join("fresh.html"), "").expect("failed to write file");
        let refreshed = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                app.process_pending_app_events().await;
                if !app.rows().is_empty() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
        .await;

        // Assert
        assert!(refreshed.is_ok());
        assert_eq!(app.rows()[0].label, "fresh.html");
    }
}
