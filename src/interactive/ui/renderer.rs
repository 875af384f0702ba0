use crate::interactive::constants::{PAGINATION_BAR_HEIGHT, SEARCH_BAR_HEIGHT, TRENDING_BAR_HEIGHT};
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component, help_dialog::HelpDialog, movie_list::MovieList, pagination_bar::PaginationBar,
    search_bar::SearchBar, trending_bar::TrendingBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

#[derive(Default)]
pub struct Renderer {
    search_bar: SearchBar,
    trending_bar: TrendingBar,
    movie_list: MovieList,
    pagination_bar: PaginationBar,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            trending_bar: TrendingBar::new(),
            movie_list: MovieList::new(),
            pagination_bar: PaginationBar::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.render_search_mode(f, state);
        if state.mode == Mode::Help {
            self.help_dialog.render(f, f.area());
        }
    }

    /// Push the latest state into the widgets so their key handling sees
    /// the same bounds that are on screen.
    pub fn sync(&mut self, state: &AppState) {
        self.search_bar.set_query(state.search.raw_query.clone());
        self.search_bar.set_loading(state.results.is_loading);
        self.search_bar.set_message(state.ui.message.clone());

        self.trending_bar.set_entries(state.trending.entries.clone());
        self.trending_bar.set_loading(state.trending.is_loading);

        let query = state.search.debounced_query.trim();
        self.movie_list.set_heading(if query.is_empty() {
            "Popular movies".to_string()
        } else {
            format!("Results for \"{query}\"")
        });
        self.movie_list.set_movies(state.results.movies.clone());
        self.movie_list.set_selected_index(state.results.selected_index);
        self.movie_list.set_loading(state.results.is_loading);
        self.movie_list
            .set_error_message(state.results.error_message.clone());

        self.pagination_bar
            .set_page(state.page.current_page, state.page.total_pages);
        self.pagination_bar
            .set_navigation(state.page.has_previous(), state.page.has_more);
        self.pagination_bar.set_loading(state.results.is_loading);
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(TRENDING_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(PAGINATION_BAR_HEIGHT),
            ])
            .split(f.area());

        self.sync(state);

        self.search_bar.render(f, chunks[0]);
        self.trending_bar.render(f, chunks[1]);
        self.movie_list.render(f, chunks[2]);
        self.pagination_bar.render(f, chunks[3]);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_movie_list_mut(&mut self) -> &mut MovieList {
        &mut self.movie_list
    }

    pub fn get_pagination_bar_mut(&mut self) -> &mut PaginationBar {
        &mut self.pagination_bar
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
