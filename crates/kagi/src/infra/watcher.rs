//! Single-subscription filesystem change notifications for one directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

/// Identifies one `watch` call.
///
/// Change events carry the subscription that produced them so consumers can
/// drop events that were queued before the subscription was replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchSubscription(pub u64);

/// Callback invoked from the notification backend thread for every change.
pub type ChangeNotifier = Arc<dyn Fn(WatchSubscription) + Send + Sync>;

/// Directory change notification boundary used by the selection controller.
///
/// Production uses [`NotifyDirectoryWatcher`], while tests can inject
/// `MockDirectoryWatcher` to drive subscriptions deterministically.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryWatcher: Send {
    /// Starts watching `path`, replacing any existing subscription.
    ///
    /// Stays idle when `path` does not exist or cannot be watched.
    fn watch(&mut self, path: &Path);

    /// Stops the active subscription, if any.
    fn cancel(&mut self);

    /// Returns the directory of the active subscription.
    fn watched_path(&self) -> Option<PathBuf>;

    /// Returns the id of the active subscription.
    fn active_subscription(&self) -> Option<WatchSubscription>;
}

enum WatchState {
    Idle,
    Watching {
        path: PathBuf,
        subscription: WatchSubscription,
        // Dropping the backend watcher ends the subscription.
        _watcher: RecommendedWatcher,
    },
}

/// [`DirectoryWatcher`] backed by the platform's recommended `notify`
/// backend, watching non-recursively.
pub struct NotifyDirectoryWatcher {
    next_subscription: u64,
    notifier: ChangeNotifier,
    state: WatchState,
}

impl NotifyDirectoryWatcher {
    /// Creates an idle watcher that reports changes through `notifier`.
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            next_subscription: 0,
            notifier,
            state: WatchState::Idle,
        }
    }

    fn subscribe(
        &mut self,
        path: &Path,
    ) -> notify::Result<(WatchSubscription, RecommendedWatcher)> {
        self.next_subscription += 1;
        let subscription = WatchSubscription(self.next_subscription);
        let notifier = Arc::clone(&self.notifier);

        let mut watcher =
            notify::recommended_watcher(move |result: notify::Result<notify::Event>| {
                match result {
                    Ok(event) if is_change(&event.kind) => notifier(subscription),
                    Ok(_) => {}
                    Err(error) => warn!("Directory watch error: {error}"),
                }
            })?;
        watcher.watch(path, RecursiveMode::NonRecursive)?;

        Ok((subscription, watcher))
    }
}

impl DirectoryWatcher for NotifyDirectoryWatcher {
    fn watch(&mut self, path: &Path) {
        self.cancel();

        if !path.exists() {
            debug!("Not watching missing directory {}", path.display());

            return;
        }

        match self.subscribe(path) {
            Ok((subscription, watcher)) => {
                debug!("Watching {} ({subscription:?})", path.display());
                self.state = WatchState::Watching {
                    path: path.to_path_buf(),
                    subscription,
                    _watcher: watcher,
                };
            }
            Err(error) => {
                warn!("Failed to watch {}: {error}", path.display());
            }
        }
    }

    fn cancel(&mut self) {
        if let WatchState::Watching { path, .. } =
            std::mem::replace(&mut self.state, WatchState::Idle)
        {
            debug!("Stopped watching {}", path.display());
        }
    }

    fn watched_path(&self) -> Option<PathBuf> {
        match &self.state {
            WatchState::Idle => None,
            WatchState::Watching { path, .. } => Some(path.clone()),
        }
    }

    fn active_subscription(&self) -> Option<WatchSubscription> {
        match &self.state {
            WatchState::Idle => None,
            WatchState::Watching { subscription, .. } => Some(*subscription),
        }
    }
}

/// Returns whether `kind` reports a change to the directory contents.
///
/// Access events are ignored; reading a file for preview must not trigger a
/// refresh.
fn is_change(kind: &EventKind) -> bool {
    !matches!(kind, EventKind::Access(_))
}
