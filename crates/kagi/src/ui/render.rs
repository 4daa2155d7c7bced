use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::PreviewDocument;
use crate::domain::file::ListRow;
use crate::ui::components;
use crate::ui::pages::browser::BrowserPage;
use crate::ui::state::app_mode::AppMode;
use crate::ui::state::help_action;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Immutable data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub can_open_selection: bool,
    pub current_directory: Option<&'a Path>,
    pub is_watching: bool,
    pub mode: &'a AppMode,
    pub preview: Option<&'a PreviewDocument>,
    pub preview_scroll: u16,
    pub rows: &'a [ListRow],
    pub selected_index: Option<usize>,
    pub status_message: Option<&'a str>,
}

/// Renders a complete frame including status bar, content area, and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let area = f.area();
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(context.is_watching).render(f, status_bar_area);
    components::footer_bar::FooterBar::new(
        context
            .current_directory
            .map(|directory| directory.to_string_lossy().to_string()),
        context.status_message.map(ToString::to_string),
    )
    .render(f, footer_bar_area);

    BrowserPage::new(
        context.rows,
        context.selected_index,
        context.preview,
        context.preview_scroll,
        context.can_open_selection,
    )
    .render(f, content_area);

    render_overlay(f, content_area, context.mode, context.can_open_selection);
}

/// Draws the overlay for modes that sit on top of the browser page.
fn render_overlay(f: &mut Frame, area: Rect, mode: &AppMode, can_open_selection: bool) {
    match mode {
        AppMode::Browse => {}
        AppMode::DirectoryPrompt { input } => {
            components::directory_prompt_overlay::DirectoryPromptOverlay::new(input)
                .render(f, area);
        }
        AppMode::Help { scroll_offset } => {
            components::help_overlay::HelpOverlay::new(
                help_action::browse_actions(can_open_selection),
                *scroll_offset,
            )
            .render(f, area);
        }
    }
}
