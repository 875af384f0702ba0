//! Constants for the interactive movie finder
//!
//! Timing values, user-visible messages and layout sizes live here so the
//! reducer, the runtime loop and the widgets agree on them.

// Timing constants
/// Quiet period after the last keystroke before the query is searched
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Trending
/// Number of trending searches loaded on startup
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

// Messages
pub const NO_MOVIES_FOUND: &str = "No movies found.";
pub const FETCH_FAILED: &str = "Error in fetching movies. Please try again later.";
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the trending strip
pub const TRENDING_BAR_HEIGHT: u16 = 3;

/// Height of the pagination bar
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the selected-movie detail line
pub const DETAIL_LINE_HEIGHT: u16 = 2;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;
