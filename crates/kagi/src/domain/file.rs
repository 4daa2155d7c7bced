use std::fmt;
use std::path::{Path, PathBuf};

use ratatui::style::Color;

/// One regular file found by a directory listing pass.
///
/// Entries are immutable and only live as long as the listing that produced
/// them; a refresh replaces the whole set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    display_name: String,
    full_path: PathBuf,
}

impl DirectoryEntry {
    /// Creates one entry from the file name shown to the user and its full
    /// path on disk.
    pub fn new(display_name: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            display_name: display_name.into(),
            full_path: full_path.into(),
        }
    }

    /// Returns the file name shown in the list.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the absolute path of the file.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}

/// Icon family chosen for one listed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Html,
    Generic,
}

impl IconKind {
    /// Returns the glyph drawn in front of the row label.
    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Html => "◆",
            IconKind::Generic => "·",
        }
    }

    /// Returns the UI color associated with this icon kind.
    pub fn color(self) -> Color {
        match self {
            IconKind::Html => Color::LightBlue,
            IconKind::Generic => Color::Gray,
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Result of classifying one file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub icon: IconKind,
    pub is_html: bool,
    /// Row subtitle, e.g. `HTML file`.
    pub label: &'static str,
}

/// Identifies one row of one listing pass.
///
/// `generation` changes on every listing pass, so ids handed out before a
/// refresh never resolve against the refreshed listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowId {
    pub generation: u64,
    pub index: usize,
}

/// Presentation of one entry for the list display surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub icon: IconKind,
    pub id: RowId,
    pub label: String,
    pub subtitle: &'static str,
}
