use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;

const WATCHING_INDICATOR: char = '\u{25cf}'; // ●

/// Top bar with the app version and the live-refresh indicator.
pub struct StatusBar {
    is_watching: bool,
}

impl StatusBar {
    pub fn new(is_watching: bool) -> Self {
        Self { is_watching }
    }

    fn watch_span(&self) -> Span<'static> {
        if self.is_watching {
            return Span::styled(
                format!("{WATCHING_INDICATOR} live "),
                Style::default().fg(Color::Green),
            );
        }

        Span::styled("not watching ", Style::default().fg(Color::Gray))
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" Kagi v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let right_text = self.watch_span();
        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.width()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            right_text,
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}
