use thiserror::Error;

/// Why a catalog request failed.
///
/// The distinction only matters for logs; the UI collapses every variant
/// into the same generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog responded with HTTP {0}")]
    Status(u16),

    #[error("malformed catalog response: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Short label for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Network(_) => "network",
            CatalogError::Status(_) => "status",
            CatalogError::Parse(_) => "parse",
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
