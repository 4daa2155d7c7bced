use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::state::help_action;

const OVERLAY_HEIGHT: u16 = 5;
const HORIZONTAL_MARGIN: u16 = 4;
const INPUT_PREFIX: &str = " › ";

/// Single-line input box for choosing the directory to browse.
pub struct DirectoryPromptOverlay<'a> {
    input: &'a str,
}

impl<'a> DirectoryPromptOverlay<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl Component for DirectoryPromptOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = prompt_rect(area);

        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " Open Directory ",
                Style::default().fg(Color::Cyan),
            ));
        let inner_area = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner_area);

        let input_line = Line::from(vec![
            Span::styled(INPUT_PREFIX, Style::default().fg(Color::Cyan)),
            Span::raw(self.input),
        ]);
        f.render_widget(Paragraph::new(input_line), chunks[0]);

        let hint = help_action::footer_text(&help_action::directory_prompt_actions());
        f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
            chunks[2],
        );

        let prefix_width = u16::try_from(INPUT_PREFIX.chars().count()).unwrap_or(u16::MAX);
        let input_width = u16::try_from(self.input.chars().count()).unwrap_or(u16::MAX);
        let cursor_x = chunks[0]
            .x
            .saturating_add(prefix_width)
            .saturating_add(input_width)
            .min(chunks[0].right().saturating_sub(1));
        f.set_cursor_position((cursor_x, chunks[0].y));
    }
}

/// Returns a full-width box vertically centered in `area`.
fn prompt_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
    let height = OVERLAY_HEIGHT.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_prompt_rect_is_centered_with_margins() {
        // Arrange
        let area = Rect::new(0, 0, 80, 21);

        // Act
        let popup = prompt_rect(area);

        // Assert
        assert_eq!(popup, Rect::new(4, 8, 72, 5));
    }

    #[test]
    fn test_directory_prompt_overlay_renders_input_and_hint() {
        // Arrange
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let overlay = DirectoryPromptOverlay::new("/var/www");

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                overlay.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Open Directory"));
        assert!(text.contains("/var/www"));
        assert!(text.contains("Esc: cancel"));
    }
}
