#[cfg(test)]
mod tests {
    use super::super::controller::*;
    use super::super::search_service::SearchService;
    use super::super::trending_service::TrendingService;
    use crate::catalog::{CatalogClient, CatalogResult, Endpoint};
    use crate::interactive::constants::NO_MOVIES_FOUND;
    use crate::interactive::ui::app_state::AppState;
    use crate::interactive::ui::events::Message;
    use crate::schemas::{CatalogPage, Movie};
    use crate::trending::{CounterStore, MemoryStore};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    const TOTAL_PAGES: u32 = 10;

    /// Serves `TOTAL_PAGES` pages of one movie each; movie id is `page * 100`.
    /// "nothing" yields an empty page. Page 3 answers slowly.
    #[derive(Default)]
    struct FakeCatalog {
        requested: Mutex<Vec<Endpoint>>,
    }

    impl FakeCatalog {
        fn requested(&self) -> Vec<Endpoint> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogClient for FakeCatalog {
        async fn fetch_page(&self, endpoint: &Endpoint) -> CatalogResult<CatalogPage> {
            self.requested.lock().unwrap().push(endpoint.clone());

            let page = endpoint.page();
            let delay = if page == 3 { 500 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;

            let results = match endpoint {
                Endpoint::Search { query, .. } if query == "nothing" => Vec::new(),
                _ => vec![Movie::new(page as u64 * 100, format!("Movie {page}"))],
            };
            Ok(CatalogPage {
                page,
                total_results: results.len() as u64,
                results,
                total_pages: TOTAL_PAGES,
            })
        }
    }

    fn controller(catalog: Arc<FakeCatalog>, store: Arc<MemoryStore>) -> SearchController {
        SearchController::new(
            AppState::new(1000),
            SearchService::new(catalog),
            TrendingService::new(store, 5),
        )
    }

    async fn mounted() -> (SearchController, Arc<FakeCatalog>, Arc<MemoryStore>) {
        let catalog = Arc::new(FakeCatalog::default());
        let store = Arc::new(MemoryStore::new());
        let mut controller = controller(catalog.clone(), store.clone());
        controller.mount(Instant::now());
        controller.settle().await;
        (controller, catalog, store)
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_shows_discovery_and_trending() {
        let (controller, catalog, _) = mounted().await;

        assert_eq!(catalog.requested(), vec![Endpoint::Discover { page: 1 }]);
        let state = controller.state();
        assert_eq!(state.results.movies[0].id, 100);
        assert!(state.page.has_more);
        assert!(state.trending.attempted);
        assert!(!state.trending.is_loading);
        assert_eq!(controller.in_flight(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_burst_issues_one_search() {
        let (mut controller, catalog, _) = mounted().await;
        let t0 = Instant::now();

        controller.dispatch(Message::QueryChanged("a".to_string()), t0);
        controller.dispatch(Message::QueryChanged("ab".to_string()), t0 + Duration::from_millis(300));
        controller.dispatch(Message::QueryChanged("abc".to_string()), t0 + Duration::from_millis(600));

        controller.tick(t0 + Duration::from_millis(1500));
        assert_eq!(controller.in_flight(), 0);
        assert_eq!(controller.next_deadline(), Some(t0 + Duration::from_millis(1600)));

        controller.tick(t0 + Duration::from_millis(1600));
        controller.settle().await;

        assert_eq!(
            catalog.requested(),
            vec![
                Endpoint::Discover { page: 1 },
                Endpoint::Search {
                    query: "abc".to_string(),
                    page: 1
                },
            ]
        );
        assert_eq!(controller.state().search.debounced_query, "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_order_responses_keep_latest_page() {
        let (mut controller, _, _) = mounted().await;
        let now = Instant::now();

        controller.dispatch(Message::NextPage, now); // page 2
        controller.dispatch(Message::NextPage, now); // page 3, slow
        controller.dispatch(Message::PreviousPage, now); // page 2 again
        controller.settle().await;

        let state = controller.state();
        assert_eq!(state.page.current_page, 2);
        assert_eq!(state.results.movies.len(), 1);
        assert_eq!(state.results.movies[0].id, 200);
        assert!(!state.results.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_page_search_is_counted_once() {
        let (mut controller, _, store) = mounted().await;

        controller.search_now("dune", 1, Instant::now());
        controller.settle().await;

        let top = store.list_top(5).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].search_term, "dune");
        assert_eq!(top[0].movie_id, 100);
        assert_eq!(top[0].count, 1);

        controller.dispatch(Message::NextPage, Instant::now());
        controller.settle().await;

        assert_eq!(controller.state().page.current_page, 2);
        assert_eq!(store.list_top(5).await.unwrap()[0].count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_search_is_not_counted() {
        let (mut controller, _, store) = mounted().await;

        controller.search_now("nothing", 1, Instant::now());
        controller.settle().await;

        assert_eq!(
            controller.state().results.error_message.as_deref(),
            Some(NO_MOVIES_FOUND)
        );
        assert!(store.list_top(5).await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_trending_and_clear_message() {
        let (mut controller, _, _) = mounted().await;
        controller.search_now("dune", 1, Instant::now());
        controller.settle().await;

        let now = Instant::now();
        controller.dispatch(Message::RefreshTrending, now);
        controller.settle().await;

        let state = controller.state();
        assert_eq!(state.trending.entries.len(), 1);
        assert_eq!(state.ui.message.as_deref(), Some("Trending refreshed"));

        let deadline = controller.next_deadline().unwrap();
        controller.tick(deadline);
        assert_eq!(controller.state().ui.message, None);
    }
}
