use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use crate::app::PreviewDocument;
use crate::domain::file::ListRow;
use crate::ui::Page;
use crate::ui::state::help_action;

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";
const LIST_PERCENT: u16 = 35;
const PREVIEW_PERCENT: u16 = 65;
const EMPTY_LIST_TEXT: &str = "No files";
const EMPTY_PREVIEW_TEXT: &str = "Select a file to preview it.";
const PREVIEW_TITLE: &str = "Preview";

/// File list on the left, preview of the selected file on the right.
pub struct BrowserPage<'a> {
    can_open_selection: bool,
    preview: Option<&'a PreviewDocument>,
    preview_scroll: u16,
    rows: &'a [ListRow],
    selected_index: Option<usize>,
}

impl<'a> BrowserPage<'a> {
    pub fn new(
        rows: &'a [ListRow],
        selected_index: Option<usize>,
        preview: Option<&'a PreviewDocument>,
        preview_scroll: u16,
        can_open_selection: bool,
    ) -> Self {
        Self {
            can_open_selection,
            preview,
            preview_scroll,
            rows,
            selected_index,
        }
    }

    fn render_list(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Files");

        if self.rows.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_TEXT)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(empty, area);

            return;
        }

        let table = Table::new(
            self.rows.iter().map(render_file_row),
            [
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(9),
            ],
        )
        .column_spacing(1)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

        let mut table_state = TableState::default().with_selected(self.selected_index);
        f.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_preview(&self, f: &mut Frame, area: Rect) {
        let Some(preview) = self.preview else {
            let empty = Paragraph::new(EMPTY_PREVIEW_TEXT)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title(PREVIEW_TITLE));
            f.render_widget(empty, area);

            return;
        };

        let title = format!("{PREVIEW_TITLE}: {}", preview.source);
        let paragraph = Paragraph::new(preview.text.as_str())
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .scroll((self.preview_scroll, 0));
        f.render_widget(paragraph, area);
    }
}

impl Page for BrowserPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);
        let main_area = chunks[0];
        let footer_area = chunks[1];

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(LIST_PERCENT),
                Constraint::Percentage(PREVIEW_PERCENT),
            ])
            .split(main_area);

        self.render_list(f, panes[0]);
        self.render_preview(f, panes[1]);

        let help_text =
            help_action::footer_text(&help_action::browse_footer_actions(self.can_open_selection));
        let help_message = Paragraph::new(help_text).style(Style::default().fg(Color::Gray));
        f.render_widget(help_message, footer_area);
    }
}

/// Renders one file row: icon, name, and kind.
fn render_file_row(row: &ListRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(Span::styled(
            row.icon.glyph(),
            Style::default().fg(row.icon.color()),
        )),
        Cell::from(
            Line::from(row.label.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
        ),
        Cell::from(Span::styled(row.subtitle, Style::default().fg(Color::Gray))),
    ])
}
