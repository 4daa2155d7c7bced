use std::io;

use url::Url;

/// Failure to hand a document to the system browser.
#[derive(Debug, thiserror::Error)]
#[error("Failed to open {uri}: {source}")]
pub struct OpenError {
    pub uri: String,
    #[source]
    pub source: io::Error,
}

/// Boundary for handing a rendered document to an external viewer.
#[cfg_attr(test, mockall::automock)]
pub trait UriOpener: Send + Sync {
    /// Opens `uri` without waiting for the viewer to exit.
    ///
    /// # Errors
    /// Returns an [`OpenError`] when no viewer could be launched.
    fn open(&self, uri: &Url) -> Result<(), OpenError>;
}

/// Opens URIs with the platform default handler.
pub struct SystemUriOpener;

impl UriOpener for SystemUriOpener {
    fn open(&self, uri: &Url) -> Result<(), OpenError> {
        open::that_detached(uri.as_str()).map_err(|source| OpenError {
            uri: uri.to_string(),
            source,
        })
    }
}
