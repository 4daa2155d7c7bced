use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::components::centered_rect;
use crate::ui::state::help_action::HelpAction;

const BORDER_SIZE: u16 = 2;
const SCROLL_X_OFFSET: u16 = 0;
const TITLE: &str = " Keybindings ";

/// Centered popup overlay listing the available keybindings.
pub struct HelpOverlay {
    actions: Vec<HelpAction>,
    scroll_offset: u16,
}

impl HelpOverlay {
    /// Creates a help overlay for the given actions and scroll position.
    pub fn new(actions: Vec<HelpAction>, scroll_offset: u16) -> Self {
        Self {
            actions,
            scroll_offset,
        }
    }
}

impl Component for HelpOverlay {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(area);

        f.render_widget(Clear, popup_area);

        let key_width = self
            .actions
            .iter()
            .map(|action| action.key.len())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line<'_>> =
            Vec::with_capacity(self.actions.len() + BORDER_SIZE as usize);
        lines.push(Line::from(""));

        for action in &self.actions {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:>key_width$}", action.key),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(": ", Style::default().fg(Color::White)),
                Span::styled(action.popup_label, Style::default().fg(Color::White)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press ? / q / Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(Span::styled(TITLE, Style::default().fg(Color::Cyan))),
            )
            .scroll((self.scroll_offset, SCROLL_X_OFFSET));

        f.render_widget(paragraph, popup_area);
    }
}
