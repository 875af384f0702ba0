use serde::{Deserialize, Deserializer, Serialize};

use super::movie::Movie;

// A counter-store document: how many times a search term led to a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingEntry {
    #[serde(rename = "$id", default)]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: u64,
    pub movie_id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl TrendingEntry {
    /// First-time entry for a search term, captured from the top result.
    pub fn first_search(id: impl Into<String>, search_term: &str, movie: &Movie) -> Self {
        Self {
            id: id.into(),
            search_term: search_term.to_string(),
            count: 1,
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_url(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.search_term
        } else {
            &self.title
        }
    }
}

// Unset optional attributes come back as an explicit `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
