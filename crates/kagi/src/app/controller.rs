//! Browse session state and the selection workflow.
//!
//! [`SelectionController`] is the single owner of the current directory, its
//! listing, the selection, and the directory watcher. All mutations run on
//! the event loop thread, in event-arrival order.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::classifier::classify;
use crate::app::render::render_for;
use crate::domain::file::{DirectoryEntry, ListRow, RowId};
use crate::domain::render::RenderInstruction;
use crate::infra::directory::list_directory;
use crate::infra::watcher::{DirectoryWatcher, WatchSubscription};

/// What happens to the selection when the listing is refreshed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Every refresh clears the selection and the preview.
    #[default]
    ClearOnRefresh,
    /// Keep the selected file selected while it is still listed.
    PreserveIfPresent,
}

/// State of one browse session, owned by the window for its lifetime.
#[derive(Debug, Default)]
struct BrowseSession {
    current_directory: Option<PathBuf>,
    entries: Vec<DirectoryEntry>,
    generation: u64,
    listing_error: Option<String>,
    render_instruction: Option<RenderInstruction>,
    selection: Option<RowId>,
}

impl BrowseSession {
    fn entry(&self, row: RowId) -> Option<&DirectoryEntry> {
        if row.generation != self.generation {
            return None;
        }

        self.entries.get(row.index)
    }

    fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.entry(self.selection?)
    }
}

/// Coordinates listing, watching, classification, and rendering.
pub struct SelectionController {
    policy: SelectionPolicy,
    session: BrowseSession,
    watcher: Box<dyn DirectoryWatcher>,
}

impl SelectionController {
    /// Creates a controller with no directory chosen.
    pub fn new(watcher: Box<dyn DirectoryWatcher>, policy: SelectionPolicy) -> Self {
        Self {
            policy,
            session: BrowseSession::default(),
            watcher,
        }
    }

    /// Makes `path` the current directory, subscribes to its changes, and
    /// replaces the listing.
    ///
    /// The selection is always cleared. The subscription starts before the
    /// listing is read so a change in between is not lost.
    pub fn directory_chosen(&mut self, path: PathBuf) {
        info!("Opening directory {}", path.display());

        self.watcher.watch(&path);
        self.session.current_directory = Some(path);
        self.relist(SelectionPolicy::ClearOnRefresh);
    }

    /// Selects the row `row` and computes its render instruction.
    ///
    /// Returns `None` and leaves the selection untouched when `row` does not
    /// belong to the current listing.
    pub fn entry_selected(&mut self, row: RowId) -> Option<&RenderInstruction> {
        let Some(entry) = self.session.entry(row) else {
            debug!("Ignoring selection of stale row {row:?}");

            return None;
        };

        let instruction = render_for(entry, &classify(entry.display_name()));
        self.session.selection = Some(row);

        Some(&*self.session.render_instruction.insert(instruction))
    }

    /// Handles a change notification from `subscription`.
    ///
    /// Returns whether the listing was refreshed. Notifications from a
    /// replaced or cancelled subscription are ignored.
    pub fn directory_changed(&mut self, subscription: WatchSubscription) -> bool {
        if self.watcher.active_subscription() != Some(subscription) {
            debug!("Ignoring change from inactive {subscription:?}");

            return false;
        }

        self.refresh();

        true
    }

    /// Re-lists the current directory, applying the selection policy.
    ///
    /// Re-subscribes when the watcher no longer watches the current
    /// directory, e.g. after it was removed and recreated.
    pub fn refresh(&mut self) {
        let Some(directory) = self.session.current_directory.clone() else {
            return;
        };

        if self.watcher.watched_path().as_deref() != Some(directory.as_path()) {
            self.watcher.watch(&directory);
        }

        self.relist(self.policy);
    }

    /// Returns the presentation rows of the current listing, in order.
    pub fn rows(&self) -> Vec<ListRow> {
        self.session
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                present(
                    RowId {
                        generation: self.session.generation,
                        index,
                    },
                    entry,
                )
            })
            .collect()
    }

    /// Returns the id of the row at `index` in the current listing.
    pub fn row_id(&self, index: usize) -> Option<RowId> {
        (index < self.session.entries.len()).then_some(RowId {
            generation: self.session.generation,
            index,
        })
    }

    /// Returns the number of listed entries.
    pub fn entry_count(&self) -> usize {
        self.session.entries.len()
    }

    /// Returns the selected row id, when the selection is valid.
    pub fn selection(&self) -> Option<RowId> {
        self.session
            .selection
            .filter(|row| row.generation == self.session.generation)
    }

    /// Returns the selected entry, when any.
    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.session.selected_entry()
    }

    /// Returns the render instruction for the current selection.
    pub fn render_instruction(&self) -> Option<&RenderInstruction> {
        self.session.render_instruction.as_ref()
    }

    /// Returns the current directory, once one was chosen.
    pub fn current_directory(&self) -> Option<&Path> {
        self.session.current_directory.as_deref()
    }

    /// Returns the description of the last listing failure, if the current
    /// listing is empty because of one.
    pub fn listing_error(&self) -> Option<&str> {
        self.session.listing_error.as_deref()
    }

    /// Returns whether a change subscription is active.
    pub fn is_watching(&self) -> bool {
        self.watcher.active_subscription().is_some()
    }

    fn relist(&mut self, policy: SelectionPolicy) {
        let Some(directory) = self.session.current_directory.as_deref() else {
            return;
        };

        let previous_path = self
            .session
            .selected_entry()
            .map(|entry| entry.full_path().to_path_buf());

        let (entries, listing_error) = match list_directory(directory) {
            Ok(entries) => (entries, None),
            Err(error) => {
                warn!("{error}");

                (Vec::new(), Some(error.to_string()))
            }
        };
        debug!(
            "Listed {} files in {}",
            entries.len(),
            directory.display()
        );

        self.session.generation += 1;
        self.session.entries = entries;
        self.session.listing_error = listing_error;
        self.session.selection = None;
        self.session.render_instruction = None;

        if policy == SelectionPolicy::PreserveIfPresent
            && let Some(previous_path) = previous_path
            && let Some(index) = self
                .session
                .entries
                .iter()
                .position(|entry| entry.full_path() == previous_path)
        {
            let row = RowId {
                generation: self.session.generation,
                index,
            };
            self.entry_selected(row);
        }
    }
}

/// Maps one entry to its list display row.
pub fn present(id: RowId, entry: &DirectoryEntry) -> ListRow {
    let classification = classify(entry.display_name());

    ListRow {
        icon: classification.icon,
        id,
        label: entry.display_name().to_string(),
        subtitle: classification.label,
    }
}
