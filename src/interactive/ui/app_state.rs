use tracing::debug;

use crate::interactive::constants::*;
use crate::interactive::domain::models::{SearchRequest, SearchResponse, is_reportable};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::{Movie, TrendingEntry};

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub page: PageState,
    pub results: ResultState,
    pub trending: TrendingState,
    pub ui: UiState,
    debounce_ms: u64,
}

pub struct SearchState {
    pub raw_query: String,
    pub debounced_query: String,
    /// Sequence number of the most recently issued request
    pub latest_seq: u64,
}

pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_more: bool,
}

impl PageState {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    fn move_to(&mut self, page: u32) {
        self.current_page = page;
        self.has_more = self.current_page < self.total_pages;
    }
}

pub struct ResultState {
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub selected_index: usize,
}

impl ResultState {
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.get(self.selected_index)
    }

    fn fail(&mut self, message: &str) {
        self.movies.clear();
        self.selected_index = 0;
        self.error_message = Some(message.to_string());
    }
}

pub struct TrendingState {
    pub entries: Vec<TrendingEntry>,
    pub is_loading: bool,
    /// The mount-time load has finished, successfully or not. Later loads
    /// are user refreshes.
    pub attempted: bool,
}

pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl AppState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                raw_query: String::new(),
                debounced_query: String::new(),
                latest_seq: 0,
            },
            page: PageState {
                current_page: 1,
                total_pages: 1,
                has_more: false,
            },
            results: ResultState {
                movies: Vec::new(),
                is_loading: false,
                error_message: None,
                selected_index: 0,
            },
            trending: TrendingState {
                entries: Vec::new(),
                is_loading: false,
                attempted: false,
            },
            ui: UiState { message: None },
            debounce_ms,
        }
    }

    /// Start from `query` instead of an empty search box. Takes effect at mount.
    pub fn seed_query(&mut self, query: &str) {
        self.search.raw_query = query.to_string();
        self.search.debounced_query = query.to_string();
    }

    /// Commands to run when the view first appears: the trending snapshot
    /// and the listing for the initial query (discovery when it is empty).
    pub fn mount(&mut self) -> Command {
        self.trending.is_loading = true;
        Command::Batch(vec![Command::LoadTrending, self.start_search()])
    }

    /// Apply `query` at `page` immediately, skipping the quiet period.
    pub fn search_now(&mut self, query: &str, page: u32) -> Command {
        self.search.raw_query = query.to_string();
        self.search.debounced_query = query.to_string();
        self.page.move_to(page.max(1));
        self.start_search()
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.raw_query = q;
                self.ui.message = Some("[typing...]".to_string());
                Command::ScheduleDebounce(self.debounce_ms)
            }
            Message::DebounceElapsed => {
                if self.ui.message.as_deref() == Some("[typing...]") {
                    self.ui.message = None;
                }
                // Searches run only when the debounced query or the page actually changes
                if self.search.raw_query == self.search.debounced_query
                    && self.page.current_page == 1
                {
                    return Command::None;
                }
                self.search.debounced_query = self.search.raw_query.clone();
                self.page.move_to(1);
                self.start_search()
            }
            Message::PreviousPage => {
                if self.page.has_previous() {
                    self.page.move_to(self.page.current_page - 1);
                    self.start_search()
                } else {
                    Command::None
                }
            }
            Message::NextPage => {
                if self.page.has_more {
                    self.page.move_to(self.page.current_page + 1);
                    self.start_search()
                } else {
                    Command::None
                }
            }
            Message::ResponseArrived(response) => self.apply_response(response),
            Message::SelectResult(index) => {
                if index < self.results.movies.len() {
                    self.results.selected_index = index;
                }
                Command::None
            }
            Message::RefreshTrending => {
                if self.trending.is_loading {
                    return Command::None;
                }
                self.trending.is_loading = true;
                Command::LoadTrending
            }
            Message::TrendingLoaded(entries) => {
                let refreshed = self.trending.attempted;
                self.trending.entries = entries;
                self.trending.is_loading = false;
                self.trending.attempted = true;
                if refreshed {
                    self.ui.message = Some("Trending refreshed".to_string());
                    Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
                } else {
                    Command::None
                }
            }
            Message::TrendingUnavailable => {
                // Keep whatever snapshot is already shown
                self.trending.is_loading = false;
                self.trending.attempted = true;
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::None
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => {
                Command::None // Handle in main loop
            }
        }
    }

    fn start_search(&mut self) -> Command {
        self.search.latest_seq += 1;
        self.results.is_loading = true;
        self.results.error_message = None;

        Command::ExecuteSearch(SearchRequest {
            seq: self.search.latest_seq,
            query: self.search.debounced_query.clone(),
            page: self.page.current_page,
        })
    }

    fn apply_response(&mut self, response: SearchResponse) -> Command {
        if response.seq != self.search.latest_seq {
            debug!(
                seq = response.seq,
                latest = self.search.latest_seq,
                "discarding superseded response"
            );
            return Command::None;
        }

        self.results.is_loading = false;

        let page = match response.outcome {
            Ok(page) => page,
            Err(_) => {
                // Cause already logged by the catalog client
                self.results.fail(FETCH_FAILED);
                return Command::None;
            }
        };

        if page.results.is_empty() {
            self.results.fail(NO_MOVIES_FOUND);
            self.page.has_more = false;
            return Command::None;
        }

        self.results.movies = page.results;
        self.results.selected_index = 0;
        self.results.error_message = None;
        self.page.total_pages = page.total_pages.max(1);
        self.page.has_more = response.page < self.page.total_pages;

        if is_reportable(&response.query, response.page) {
            if let Some(top) = self.results.movies.first() {
                return Command::ReportSearch {
                    query: response.query,
                    movie: top.clone(),
                };
            }
        }
        Command::None
    }
}
