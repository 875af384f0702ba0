use crate::interactive::ui::components::{Component, is_exit_prompt, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line query editor with emacs-style bindings.
///
/// Every edit that changes the text yields `QueryChanged` with the full query;
/// cursor movement yields nothing.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.query = query;
            self.cursor_position = self.char_count();
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    #[cfg(test)]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    /// Delete chars in `start..end` and park the cursor at `start`
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_count() {
            return None;
        }
        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn insert_char(&mut self, c: char) -> Option<Message> {
        let byte_pos = self.byte_index(self.cursor_position);
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn delete_before_cursor(&mut self) -> Option<Message> {
        if self.cursor_position == 0 {
            return None;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_at_cursor(&mut self) -> Option<Message> {
        self.delete_range(self.cursor_position, self.cursor_position + 1)
    }

    fn title(&self) -> String {
        let mut title = "Search movies".to_string();
        if self.is_loading {
            title.push_str(" [loading...]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }
        title
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let split = self.byte_index(self.cursor_position);
        let (before, rest) = self.query.split_at(split);

        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next().unwrap_or(' ').to_string();
        let after: String = rest_chars.collect();

        let input_text = if self.query.is_empty() {
            vec![
                Span::styled(" ", cursor_style),
                Span::styled("Search through thousands of movies", Styles::dimmed()),
            ]
        } else {
            vec![
                Span::raw(before.to_string()),
                Span::styled(under_cursor, cursor_style),
                Span::raw(after),
            ]
        };

        let mut block = Block::default().title(self.title()).borders(Borders::ALL);
        if is_exit_prompt(&self.message) {
            block = block.border_style(Styles::error());
        }
        let input = Paragraph::new(Line::from(input_text))
            .block(block)
            .style(Styles::label());

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                    None
                }
                KeyCode::Char('h') => self.delete_before_cursor(),
                KeyCode::Char('d') => self.delete_at_cursor(),
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_count()),
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
