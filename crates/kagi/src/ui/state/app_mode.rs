/// Which surface currently receives key input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// File list and preview.
    #[default]
    Browse,
    /// Directory chooser prompt over the browser.
    DirectoryPrompt { input: String },
    Help { scroll_offset: u16 },
}
