use crate::interactive::constants::DETAIL_LINE_HEIGHT;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::Movie;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// The current page of movies plus a detail line for the highlighted one.
#[derive(Default)]
pub struct MovieList {
    movies: Vec<Movie>,
    heading: String,
    is_loading: bool,
    error_message: Option<String>,
    list_state: ListState,
}

impl MovieList {
    pub fn new() -> Self {
        Self {
            heading: "Popular movies".to_string(),
            ..Self::default()
        }
    }

    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        if self.movies.is_empty() {
            self.list_state.select(None);
        } else if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    pub fn set_heading(&mut self, heading: String) {
        self.heading = heading;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_error_message(&mut self, error_message: Option<String>) {
        self.error_message = error_message;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.movies.len() {
            self.list_state.select(Some(index));
        }
    }

    pub fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.list_state.selected().and_then(|i| self.movies.get(i))
    }

    fn move_by(&mut self, delta: isize) -> Option<Message> {
        if self.movies.is_empty() {
            return None;
        }
        let current = self.selected_index();
        let last = self.movies.len() - 1;
        let next = current.saturating_add_signed(delta).min(last);
        if next == current {
            return None;
        }
        self.list_state.select(Some(next));
        Some(Message::SelectResult(next))
    }

    fn movie_line(movie: &Movie) -> Line<'_> {
        Line::from(vec![
            Span::styled(movie.title.as_str(), Styles::normal()),
            Span::styled(format!(" ({})", movie.year_label()), Styles::dimmed()),
            Span::styled(format!("  ★ {}", movie.rating_label()), Styles::label()),
            Span::styled(format!("  {}", movie.language_label()), Styles::accent()),
        ])
    }

    fn detail_lines(&self) -> Vec<Line<'_>> {
        match self.selected_movie() {
            Some(movie) => vec![
                Line::from(vec![
                    Span::styled("Poster: ", Styles::label()),
                    Span::raw(
                        movie
                            .poster_url()
                            .unwrap_or_else(|| "no poster available".to_string()),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Popularity: ", Styles::label()),
                    Span::raw(format!("{:.1}", movie.popularity)),
                ]),
            ],
            None => Vec::new(),
        }
    }

    fn render_notice(&self, f: &mut Frame, area: Rect, block: Block, text: &str, error: bool) {
        let style = if error { Styles::error() } else { Styles::dimmed() };
        let notice = Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(notice, area);
    }
}

impl Component for MovieList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(DETAIL_LINE_HEIGHT),
            ])
            .split(area);

        let block = Block::default()
            .title(Span::styled(self.heading.clone(), Styles::title()))
            .borders(Borders::ALL);

        if let Some(error) = &self.error_message {
            self.render_notice(f, chunks[0], block, error, true);
            return;
        }
        if self.movies.is_empty() {
            let text = if self.is_loading { "Loading movies..." } else { "" };
            self.render_notice(f, chunks[0], block, text, false);
            return;
        }

        let items: Vec<ListItem> = self
            .movies
            .iter()
            .map(|movie| ListItem::new(Self::movie_line(movie)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Styles::selected())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        f.render_widget(Paragraph::new(self.detail_lines()), chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.move_by(-1),
            KeyCode::Down => self.move_by(1),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => self.move_by(-1),
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => self.move_by(1),
            _ => None,
        }
    }
}
