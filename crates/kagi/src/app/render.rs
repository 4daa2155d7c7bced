//! Maps a classified selection to what the render surface should show.

use std::io;
use std::path::{Path, PathBuf};

use askama::Template;
use tracing::warn;
use url::Url;

use crate::domain::file::{Classification, DirectoryEntry};
use crate::domain::render::RenderInstruction;

const NOT_HTML_HEADING: &str = "Not an HTML file";
const NOT_HTML_DETAIL: &str = "Select an HTML file to view its contents.";
const NOT_FOUND_HEADING: &str = "File not found";
const NOT_FOUND_DETAIL: &str = "The selected file could not be loaded.";
const ERROR_HEADING: &str = "Error loading file";
const FALLBACK_PAGE: &str = "<html><body><h3>Error loading file</h3></body></html>";

/// Askama view model for the centered placeholder page.
#[derive(Template)]
#[template(path = "placeholder.html")]
struct PlaceholderTemplate<'a> {
    detail: &'a str,
    heading: &'a str,
}

/// Failure to resolve an HTML selection to a loadable URI.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to check {}: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot build a file URI for {}", path.display())]
    FileUri { path: PathBuf },
}

/// Produces the render instruction for `entry`.
///
/// Non-HTML files get a fixed placeholder page. HTML files are checked for
/// existence at call time, since they may have been removed after listing.
/// Every failure degrades to an inline explanatory page.
pub fn render_for(entry: &DirectoryEntry, classification: &Classification) -> RenderInstruction {
    if !classification.is_html {
        return placeholder(NOT_HTML_HEADING, NOT_HTML_DETAIL);
    }

    match resolve_uri(entry.full_path()) {
        Ok(Some(uri)) => RenderInstruction::LoadUri(uri),
        Ok(None) => placeholder(NOT_FOUND_HEADING, NOT_FOUND_DETAIL),
        Err(error) => {
            warn!("{error}");

            placeholder(ERROR_HEADING, &error.to_string())
        }
    }
}

/// Returns the file URI for `path`, or `None` when the file is gone.
fn resolve_uri(path: &Path) -> Result<Option<Url>, RenderError> {
    let exists = path.try_exists().map_err(|source| RenderError::Probe {
        path: path.to_path_buf(),
        source,
    })?;
    if !exists {
        return Ok(None);
    }

    file_uri(path).map(Some)
}

fn file_uri(path: &Path) -> Result<Url, RenderError> {
    Url::from_file_path(path).map_err(|()| RenderError::FileUri {
        path: path.to_path_buf(),
    })
}

fn placeholder(heading: &str, detail: &str) -> RenderInstruction {
    let page = PlaceholderTemplate { detail, heading }
        .render()
        .unwrap_or_else(|error| {
            warn!("Failed to render placeholder page: {error}");

            FALLBACK_PAGE.to_string()
        });

    RenderInstruction::LoadInlineHtml(page)
}
