use std::fmt;

/// Which catalog listing a request targets.
///
/// A blank query always maps to the popularity-sorted discovery listing;
/// anything else is a text search. No other parameters are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Discover { page: u32 },
    Search { query: String, page: u32 },
}

impl Endpoint {
    pub fn for_query(query: &str, page: u32) -> Self {
        if query.trim().is_empty() {
            Endpoint::Discover { page }
        } else {
            Endpoint::Search {
                query: query.to_string(),
                page,
            }
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            Endpoint::Discover { page } | Endpoint::Search { page, .. } => *page,
        }
    }

    /// Path and query string relative to the catalog base URL
    pub fn path_and_query(&self) -> String {
        match self {
            Endpoint::Discover { page } => {
                format!("/discover/movie?sort_by=popularity.desc&page={page}")
            }
            Endpoint::Search { query, page } => format!(
                "/search/movie?query={}&page={page}",
                urlencoding::encode(query)
            ),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path_and_query())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Discover { page } => write!(f, "discover(page={page})"),
            Endpoint::Search { query, page } => write!(f, "search({query:?}, page={page})"),
        }
    }
}
