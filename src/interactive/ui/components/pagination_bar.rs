use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// "◀ Prev  Page x of y  Next ▶". Each control is dimmed when it would be a
/// no-op, and navigation keys only produce messages when enabled.
#[derive(Default)]
pub struct PaginationBar {
    current_page: u32,
    total_pages: u32,
    has_previous: bool,
    has_more: bool,
    is_loading: bool,
}

impl PaginationBar {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            ..Self::default()
        }
    }

    pub fn set_page(&mut self, current_page: u32, total_pages: u32) {
        self.current_page = current_page;
        self.total_pages = total_pages;
    }

    pub fn set_navigation(&mut self, has_previous: bool, has_more: bool) {
        self.has_previous = has_previous;
        self.has_more = has_more;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    fn control_style(enabled: bool) -> Style {
        if enabled {
            Styles::label()
        } else {
            Styles::dimmed()
        }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("◀ Prev", Self::control_style(self.has_previous)),
            Span::raw("  "),
            Span::styled(
                format!("Page {} of {}", self.current_page, self.total_pages),
                Styles::normal(),
            ),
            Span::raw("  "),
            Span::styled("Next ▶", Self::control_style(self.has_more)),
        ];
        if self.is_loading {
            spans.push(Span::styled("  loading...", Styles::dimmed()));
        }
        Line::from(spans)
    }
}

impl Component for PaginationBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()).alignment(Alignment::Center), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let previous = match key.code {
            KeyCode::PageUp => true,
            KeyCode::PageDown => false,
            KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => true,
            KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => false,
            _ => return None,
        };

        match (previous, self.has_previous, self.has_more) {
            (true, true, _) => Some(Message::PreviousPage),
            (false, _, true) => Some(Message::NextPage),
            _ => None,
        }
    }
}
