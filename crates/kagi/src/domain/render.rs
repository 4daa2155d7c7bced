use url::Url;

/// What the render surface should show for the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Load the document behind this URI.
    LoadUri(Url),
    /// Display this literal markup.
    LoadInlineHtml(String),
}

impl RenderInstruction {
    /// Returns the URI to load, when the instruction points at a document.
    pub fn uri(&self) -> Option<&Url> {
        match self {
            Self::LoadUri(uri) => Some(uri),
            Self::LoadInlineHtml(_) => None,
        }
    }
}
