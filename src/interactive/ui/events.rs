use crate::interactive::domain::models::SearchResponse;
use crate::schemas::TrendingEntry;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    QueryChanged(String),
    DebounceElapsed,
    ResponseArrived(SearchResponse),

    // Pagination
    PreviousPage,
    NextPage,

    // Result list
    SelectResult(usize),

    // Trending
    RefreshTrending,
    TrendingLoaded(Vec<TrendingEntry>),
    TrendingUnavailable,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,

    // Terminal events
    Quit,
}
