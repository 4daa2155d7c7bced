//! Non-recursive listing of the regular files inside one directory.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::file::DirectoryEntry;

/// Failure to enumerate a directory.
///
/// Callers treat every variant as an empty listing.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("Permission denied accessing {}", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("Directory not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Error reading directory {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        let path = path.to_path_buf();

        match error.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Unreadable {
                path,
                source: error,
            },
        }
    }
}

/// Lists the regular files directly inside `path`.
///
/// Symlinks are followed, so a link to a file is listed and a link to a
/// directory is not. Subdirectories and special files are excluded. Results
/// are sorted by display name, case-insensitively.
///
/// # Errors
/// Returns a [`ListingError`] when the directory itself cannot be read.
/// Children that disappear or cannot be inspected mid-listing are skipped.
pub fn list_directory(path: &Path) -> Result<Vec<DirectoryEntry>, ListingError> {
    let read_dir = fs::read_dir(path).map_err(|error| ListingError::from_io(path, error))?;

    let mut entries: Vec<DirectoryEntry> = read_dir
        .filter_map(Result::ok)
        .filter_map(|child| {
            let full_path = child.path();
            let is_file = fs::metadata(&full_path).is_ok_and(|metadata| metadata.is_file());
            if !is_file {
                return None;
            }

            let display_name = child.file_name().to_string_lossy().to_string();

            Some(DirectoryEntry::new(display_name, full_path))
        })
        .collect();

    sort_entries(&mut entries);

    Ok(entries)
}

/// Sorts entries by lowercased display name, falling back to the exact name
/// so names differing only in case keep a stable order.
fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|first, second| compare_names(first.display_name(), second.display_name()));
}

fn compare_names(first: &str, second: &str) -> Ordering {
    first
        .to_lowercase()
        .cmp(&second.to_lowercase())
        .then_with(|| first.cmp(second))
}
