/// One user-visible shortcut entry that can be rendered in the footer and
/// in the help popup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HelpAction {
    pub(crate) footer_label: &'static str,
    pub(crate) key: &'static str,
    pub(crate) popup_label: &'static str,
}

impl HelpAction {
    /// Creates one help action descriptor.
    pub(crate) const fn new(
        footer_label: &'static str,
        key: &'static str,
        popup_label: &'static str,
    ) -> Self {
        Self {
            footer_label,
            key,
            popup_label,
        }
    }
}

/// Returns every browse-mode action for the help overlay.
///
/// `Enter` is listed only when the selection resolved to a loadable
/// document.
pub(crate) fn browse_actions(can_open_selection: bool) -> Vec<HelpAction> {
    let mut actions = vec![
        HelpAction::new("quit", "q", "Quit"),
        HelpAction::new("open dir", "o", "Choose directory"),
        HelpAction::new("nav", "j/k", "Select file"),
    ];

    if can_open_selection {
        actions.push(HelpAction::new("browser", "Enter", "Open in browser"));
    }

    actions.push(HelpAction::new("scroll", "J/K", "Scroll preview"));
    actions.push(HelpAction::new("page", "PgDn/PgUp", "Scroll preview by page"));
    actions.push(HelpAction::new("refresh", "r", "Refresh listing"));
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns compact browse footer actions for the page-level hint line.
pub(crate) fn browse_footer_actions(can_open_selection: bool) -> Vec<HelpAction> {
    let mut actions = vec![
        HelpAction::new("quit", "q", "Quit"),
        HelpAction::new("open dir", "o", "Choose directory"),
        HelpAction::new("nav", "j/k", "Select file"),
    ];

    if can_open_selection {
        actions.push(HelpAction::new("browser", "Enter", "Open in browser"));
    }

    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns directory prompt actions for the overlay hint line.
pub(crate) fn directory_prompt_actions() -> Vec<HelpAction> {
    vec![
        HelpAction::new("open", "Enter", "Open directory"),
        HelpAction::new("cancel", "Esc", "Cancel"),
    ]
}

/// Renders one-line footer help text from projected actions.
pub(crate) fn footer_text(actions: &[HelpAction]) -> String {
    let mut help_text = String::new();

    for (index, action) in actions.iter().enumerate() {
        if index > 0 {
            help_text.push_str(" | ");
        }

        help_text.push_str(action.key);
        help_text.push_str(": ");
        help_text.push_str(action.footer_label);
    }

    help_text
}
