use std::path::Path;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

const NO_DIRECTORY_TEXT: &str = "No directory (press o to choose one)";

/// Bottom bar with the browsed directory and the latest status message.
pub struct FooterBar {
    directory: Option<String>,
    status_message: Option<String>,
}

impl FooterBar {
    pub fn new(directory: Option<String>, status_message: Option<String>) -> Self {
        Self {
            directory,
            status_message,
        }
    }

    /// Returns the directory with the home prefix shortened to `~`.
    fn display_directory(&self) -> String {
        let Some(directory) = &self.directory else {
            return NO_DIRECTORY_TEXT.to_string();
        };

        if let Some(home) = dirs::home_dir()
            && let Ok(path) = Path::new(directory).strip_prefix(home)
        {
            return format!("~/{}", path.display());
        }

        directory.clone()
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let left = format!(" Dir: {}", self.display_directory());
        let left_width = left.chars().count();
        let mut spans = vec![Span::styled(
            left,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        )];

        if let Some(message) = &self.status_message {
            let message_text = format!("{message} ");
            let message_width = message_text.chars().count();
            let total_width = area.width as usize;

            if left_width + message_width + 1 < total_width {
                let padding = " ".repeat(total_width - left_width - message_width);

                spans.push(Span::raw(padding));
                spans.push(Span::styled(
                    message_text,
                    Style::default().fg(Color::Yellow),
                ));
            }
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_text(footer: &FooterBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                footer.render(f, area);
            })
            .expect("failed to draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_footer_bar_shortens_home_directory() {
        // Arrange
        let path = if let Some(home) = dirs::home_dir() {
            home.join("sites").to_string_lossy().to_string()
        } else {
            "/tmp/sites".to_string()
        };
        let footer = FooterBar::new(Some(path), None);

        // Act
        let text = render_text(&footer, 80);

        // Assert
        if dirs::home_dir().is_some() {
            assert!(text.contains("Dir: ~/sites"));
        } else {
            assert!(text.contains("Dir: /tmp/sites"));
        }
    }

    #[test]
    fn test_footer_bar_without_directory_shows_hint() {
        // Arrange
        let footer = FooterBar::new(None, None);

        // Act
        let text = render_text(&footer, 80);

        // Assert
        assert!(text.contains(NO_DIRECTORY_TEXT));
    }

    #[test]
    fn test_footer_bar_shows_status_message_when_it_fits() {
        // Arrange
        let footer = FooterBar::new(
            Some("/srv".to_string()),
            Some("Directory not found: /srv".to_string()),
        );

        // Act
        let wide = render_text(&footer, 80);
        let narrow = render_text(&footer, 20);

        // Assert
        assert!(wide.contains("Directory not found: /srv"));
        assert!(!narrow.contains("Directory not found"));
    }
}
