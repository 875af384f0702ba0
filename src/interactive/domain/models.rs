use crate::catalog::{CatalogError, Endpoint};
use crate::schemas::CatalogPage;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Search,
    Help,
}

// Search request and response for async communication.
// `seq` is assigned by the reducer and only grows; a response is applied
// only if its `seq` is still the latest one issued.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
    pub page: u32,
}

impl SearchRequest {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::for_query(&self.query, self.page)
    }
}

/// First page of a real text search; these are the ones counted as trending.
pub fn is_reportable(query: &str, page: u32) -> bool {
    page == 1 && !query.trim().is_empty()
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub seq: u64,
    pub query: String,
    pub page: u32,
    pub outcome: Result<CatalogPage, CatalogError>,
}

impl SearchResponse {
    pub fn for_request(request: &SearchRequest, outcome: Result<CatalogPage, CatalogError>) -> Self {
        Self {
            seq: request.seq,
            query: request.query.clone(),
            page: request.page,
            outcome,
        }
    }
}
