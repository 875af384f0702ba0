pub mod movie_formatter;

pub use movie_formatter::{SearchReport, format_movie, format_report, format_trending};
