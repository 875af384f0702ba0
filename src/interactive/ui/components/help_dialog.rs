use crate::interactive::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(title, Styles::label()))
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("Movie Finder - Interactive Mode", Styles::title())),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  Type          - Search after one second without typing"),
            Line::from("  (empty)       - Show popular movies"),
            Line::from("  Ctrl+W/U/K    - Delete word / to start / to end"),
            Line::from(""),
            Self::section("Results:"),
            Line::from("  ↑/↓           - Highlight a movie"),
            Line::from("  PgUp/PgDn     - Previous / next page"),
            Line::from("  Alt+←/→       - Previous / next page"),
            Line::from(""),
            Self::section("Other:"),
            Line::from("  Ctrl+R        - Refresh trending searches"),
            Line::from("  F1            - Show this help"),
            Line::from("  Esc / Ctrl+C×2 - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        // Center the dialog
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
