use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::CatalogClient;
use crate::interactive::domain::models::{SearchRequest, SearchResponse};

pub struct SearchService {
    catalog: Arc<dyn CatalogClient>,
}

impl SearchService {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }

    /// Fetch the page a request asks for. Failures are carried in the
    /// response so the caller can still match it against the latest `seq`.
    pub async fn run(&self, request: SearchRequest) -> SearchResponse {
        let endpoint = request.endpoint();
        debug!(seq = request.seq, %endpoint, "executing search");

        let outcome = self.catalog.fetch_page(&endpoint).await;
        match &outcome {
            Ok(page) => info!(
                seq = request.seq,
                %endpoint,
                results = page.results.len(),
                total_pages = page.total_pages,
                "search completed"
            ),
            Err(e) => info!(seq = request.seq, %endpoint, kind = e.kind(), "search failed"),
        }

        SearchResponse::for_request(&request, outcome)
    }
}
