#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::catalog::{CatalogClient, CatalogResult, Endpoint};
    use crate::interactive::InteractiveSearch;
    use crate::interactive::application::{SearchController, SearchService, TrendingService};
    use crate::interactive::constants::EXIT_PROMPT;
    use crate::interactive::domain::models::Mode;
    use crate::interactive::ui::app_state::AppState;
    use crate::schemas::{CatalogPage, Movie};
    use crate::trending::MemoryStore;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct ThreePages;

    #[async_trait]
    impl CatalogClient for ThreePages {
        async fn fetch_page(&self, endpoint: &Endpoint) -> CatalogResult<CatalogPage> {
            let page = endpoint.page();
            Ok(CatalogPage {
                page,
                results: vec![Movie::new(page as u64, "Dune"), Movie::new(99, "Dune II")],
                total_pages: 3,
                total_results: 6,
            })
        }
    }

    fn create_search() -> InteractiveSearch {
        InteractiveSearch::new(SearchController::new(
            AppState::new(1000),
            SearchService::new(Arc::new(ThreePages)),
            TrendingService::new(Arc::new(MemoryStore::new()), 5),
        ))
    }

    async fn mounted_search() -> InteractiveSearch {
        let mut search = create_search();
        search.controller.mount(Instant::now());
        search.controller.settle().await;
        search
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[tokio::test]
    async fn test_esc_quits() {
        let mut search = mounted_search().await;
        assert!(search.handle_input(key(KeyCode::Esc), Instant::now()));
    }

    #[tokio::test]
    async fn test_double_ctrl_c_quits() {
        let mut search = mounted_search().await;
        let now = Instant::now();

        assert!(!search.handle_input(ctrl('c'), now));
        assert_eq!(
            search.controller().state().ui.message.as_deref(),
            Some(EXIT_PROMPT)
        );
        assert!(search.handle_input(ctrl('c'), now + Duration::from_millis(500)));
    }

    #[tokio::test]
    async fn test_slow_second_ctrl_c_does_not_quit() {
        let mut search = mounted_search().await;
        let now = Instant::now();

        assert!(!search.handle_input(ctrl('c'), now));
        assert!(!search.handle_input(ctrl('c'), now + Duration::from_secs(2)));
    }

    #[tokio::test]
    async fn test_typing_updates_query_and_arms_debounce() {
        let mut search = mounted_search().await;
        let now = Instant::now();

        search.handle_input(key(KeyCode::Char('d')), now);
        search.handle_input(key(KeyCode::Char('u')), now);

        let state = search.controller().state();
        assert_eq!(state.search.raw_query, "du");
        assert_eq!(state.search.debounced_query, "");
        assert_eq!(
            search.controller().next_deadline(),
            Some(now + Duration::from_millis(1000))
        );
    }

    #[tokio::test]
    async fn test_release_events_are_ignored() {
        let mut search = mounted_search().await;
        let mut release = key(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;

        assert!(!search.handle_input(release, Instant::now()));
        assert_eq!(search.controller().state().search.raw_query, "");
    }

    #[tokio::test]
    async fn test_page_keys_follow_bounds() {
        let mut search = mounted_search().await;

        search.handle_input(key(KeyCode::PageUp), Instant::now());
        assert_eq!(search.controller().state().page.current_page, 1);

        search.handle_input(key(KeyCode::PageDown), Instant::now());
        search.controller.settle().await;
        assert_eq!(search.controller().state().page.current_page, 2);
        assert_eq!(search.controller().state().results.movies[0].id, 2);

        search.handle_input(
            KeyEvent::new(KeyCode::Left, KeyModifiers::ALT),
            Instant::now(),
        );
        assert_eq!(search.controller().state().page.current_page, 1);
    }

    #[tokio::test]
    async fn test_arrow_keys_select_movies() {
        let mut search = mounted_search().await;

        search.handle_input(key(KeyCode::Down), Instant::now());
        assert_eq!(search.controller().state().results.selected_index, 1);

        search.handle_input(key(KeyCode::Up), Instant::now());
        assert_eq!(search.controller().state().results.selected_index, 0);
    }

    #[tokio::test]
    async fn test_help_opens_and_any_key_closes() {
        let mut search = mounted_search().await;

        search.handle_input(key(KeyCode::F(1)), Instant::now());
        assert_eq!(search.controller().state().mode, Mode::Help);

        // Keys go to the dialog, not the search bar
        assert!(!search.handle_input(key(KeyCode::Esc), Instant::now()));
        assert_eq!(search.controller().state().mode, Mode::Search);
        assert_eq!(search.controller().state().search.raw_query, "");
    }

    #[tokio::test]
    async fn test_ctrl_r_refreshes_trending() {
        let mut search = mounted_search().await;

        search.handle_input(ctrl('r'), Instant::now());
        assert!(search.controller().state().trending.is_loading);

        search.controller.settle().await;
        assert!(!search.controller().state().trending.is_loading);
    }

    #[tokio::test]
    async fn test_initial_query_is_searched_on_mount() {
        let mut search = create_search().with_initial_query("dune");
        search.controller.mount(Instant::now());
        search.controller.settle().await;

        let state = search.controller().state();
        assert_eq!(state.search.raw_query, "dune");
        assert_eq!(state.search.debounced_query, "dune");
        assert_eq!(state.results.movies.len(), 2);
        assert_eq!(search.controller().next_deadline(), None);

        // Typing continues from the seeded text
        search.handle_input(key(KeyCode::Char('s')), Instant::now());
        assert_eq!(search.controller().state().search.raw_query, "dunes");
    }

    #[test]
    fn test_poll_timeout_defaults_to_interval() {
        let search = create_search();
        assert_eq!(
            search.poll_timeout(Instant::now()),
            Duration::from_millis(crate::interactive::constants::EVENT_POLL_INTERVAL_MS)
        );
    }
}
