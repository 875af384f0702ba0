use colored::Colorize;
use serde::Serialize;

use crate::interactive::ui::app_state::AppState;
use crate::schemas::{Movie, TrendingEntry};

/// Outcome of a one-shot search, as printed to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub has_more: bool,
    pub movies: Vec<Movie>,
    pub error: Option<String>,
    pub trending: Vec<TrendingEntry>,
}

impl SearchReport {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            query: state.search.debounced_query.clone(),
            page: state.page.current_page,
            total_pages: state.page.total_pages,
            has_more: state.page.has_more,
            movies: state.results.movies.clone(),
            error: state.results.error_message.clone(),
            trending: state.trending.entries.clone(),
        }
    }

    fn heading(&self) -> String {
        let query = self.query.trim();
        if query.is_empty() {
            "Popular movies".to_string()
        } else {
            format!("Results for \"{query}\"")
        }
    }
}

/// Two-line movie card: title line, then the poster URL.
pub fn format_movie(movie: &Movie, use_color: bool) -> String {
    let poster = movie
        .poster_url()
        .unwrap_or_else(|| "no poster available".to_string());
    let year = format!("({})", movie.year_label());
    let rating = format!("★ {}", movie.rating_label());
    let language = movie.language_label();

    if use_color {
        format!(
            "{} {}  {}  {}\n  {}",
            movie.title.bold(),
            year.dimmed(),
            rating.bright_yellow(),
            language.bright_magenta(),
            poster.dimmed()
        )
    } else {
        format!("{} {year}  {rating}  {language}\n  {poster}", movie.title)
    }
}

pub fn format_trending(entries: &[TrendingEntry], use_color: bool) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            let rank = format!("{}.", rank + 1);
            let rank = if use_color {
                rank.bright_yellow().to_string()
            } else {
                rank
            };
            format!("{rank} {} ({})", entry.display_title(), entry.count)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_report(report: &SearchReport, use_color: bool) -> String {
    let mut out = String::new();

    let heading = format!(
        "{} - page {} of {}",
        report.heading(),
        report.page,
        report.total_pages
    );
    if use_color {
        out.push_str(&heading.cyan().bold().to_string());
    } else {
        out.push_str(&heading);
    }
    out.push_str("\n\n");

    match &report.error {
        Some(error) if use_color => out.push_str(&error.red().to_string()),
        Some(error) => out.push_str(error),
        None => {
            let cards: Vec<String> = report
                .movies
                .iter()
                .map(|movie| format_movie(movie, use_color))
                .collect();
            out.push_str(&cards.join("\n"));
        }
    }
    out.push('\n');

    if report.has_more {
        out.push_str(&format!("\n(more results: --page {})\n", report.page + 1));
    }
    if !report.trending.is_empty() {
        out.push_str(&format!(
            "\nTrending: {}\n",
            format_trending(&report.trending, use_color)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::constants::NO_MOVIES_FOUND;

    fn report(movies: Vec<Movie>, error: Option<&str>) -> SearchReport {
        SearchReport {
            query: "dune".to_string(),
            page: 1,
            total_pages: 3,
            has_more: true,
            movies,
            error: error.map(str::to_string),
            trending: Vec::new(),
        }
    }

    #[test]
    fn test_format_movie_plain() {
        let mut movie = Movie::new(1, "Dune");
        movie.release_date = Some("2021-09-15".to_string());
        movie.vote_average = Some(7.84);
        movie.original_language = Some("en".to_string());
        movie.poster_path = Some("/dune.jpg".to_string());

        assert_eq!(
            format_movie(&movie, false),
            "Dune (2021)  ★ 7.8  EN\n  https://image.tmdb.org/t/p/w500/dune.jpg"
        );
    }

    #[test]
    fn test_format_report_lists_movies() {
        let out = format_report(&report(vec![Movie::new(1, "Dune")], None), false);

        assert!(out.starts_with("Results for \"dune\" - page 1 of 3\n\n"));
        assert!(out.contains("Dune (N/A)  ★ N/A  N/A"));
        assert!(out.contains("--page 2"));
    }

    #[test]
    fn test_format_report_error() {
        let mut empty = report(Vec::new(), Some(NO_MOVIES_FOUND));
        empty.has_more = false;

        let out = format_report(&empty, false);
        assert!(out.contains(NO_MOVIES_FOUND));
        assert!(!out.contains("--page"));
    }

    #[test]
    fn test_format_trending() {
        let mut dune = TrendingEntry::first_search("1", "dune", &Movie::new(1, "Dune"));
        dune.count = 3;
        let alien = TrendingEntry::first_search("2", "alien", &Movie::new(2, "Alien"));

        assert_eq!(format_trending(&[dune, alien], false), "1. Dune (3)  2. Alien (1)");
    }

    #[test]
    fn test_report_serializes_for_json_output() {
        let value = serde_json::to_value(report(vec![Movie::new(7, "Se7en")], None)).unwrap();

        assert_eq!(value["query"], "dune");
        assert_eq!(value["movies"][0]["id"], 7);
        assert_eq!(value["error"], serde_json::Value::Null);
    }
}
