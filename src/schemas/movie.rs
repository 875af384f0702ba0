use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Base for poster images; the catalog only returns the path suffix.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

// Catalog movie as returned by the search and discover listings.
// Only the fields used for display are modelled; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            popularity: 0.0,
            vote_average: None,
            original_language: None,
            release_date: None,
        }
    }

    /// Full poster URL, or `None` when the catalog has no poster for this movie.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{POSTER_BASE_URL}{p}"))
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.year())
    }

    /// Rating with one decimal, "N/A" when unrated
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(v) if v > 0.0 => format!("{v:.1}"),
            _ => "N/A".to_string(),
        }
    }

    pub fn year_label(&self) -> String {
        self.release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn language_label(&self) -> String {
        self.original_language
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

// One page of a catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<Movie>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn default_total_pages() -> u32 {
    1
}
