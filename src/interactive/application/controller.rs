use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::search_service::SearchService;
use super::timer::DeadlineTimer;
use super::trending_service::TrendingService;
use crate::catalog::TmdbClient;
use crate::config::AppConfig;
use crate::interactive::ui::{app_state::AppState, commands::Command, events::Message};

/// Drives the reducer: feeds it messages, runs the commands it returns and
/// routes async results back in as messages.
///
/// Timing is explicit. Callers pass `now` so the debounce can be stepped
/// deterministically; spawned work needs an entered tokio runtime.
pub struct SearchController {
    state: AppState,
    search_service: Arc<SearchService>,
    trending_service: Arc<TrendingService>,
    debounce: DeadlineTimer,
    message_timer: DeadlineTimer,
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
    tasks: JoinSet<()>,
}

impl SearchController {
    pub fn new(
        state: AppState,
        search_service: SearchService,
        trending_service: TrendingService,
    ) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            state,
            search_service: Arc::new(search_service),
            trending_service: Arc::new(trending_service),
            debounce: DeadlineTimer::new(),
            message_timer: DeadlineTimer::new(),
            tx,
            rx,
            tasks: JoinSet::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let catalog = TmdbClient::new(&config.catalog).context("Failed to create catalog client")?;
        let trending = TrendingService::from_config(&config.trending)?;

        Ok(Self::new(
            AppState::new(config.debounce_ms),
            SearchService::new(Arc::new(catalog)),
            trending,
        ))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn seed_query(&mut self, query: &str) {
        self.state.seed_query(query);
    }

    pub fn mount(&mut self, now: Instant) {
        let command = self.state.mount();
        self.execute(command, now);
    }

    /// Search right away, bypassing the debounce.
    pub fn search_now(&mut self, query: &str, page: u32, now: Instant) {
        self.debounce.cancel();
        let command = self.state.search_now(query, page);
        self.execute(command, now);
    }

    pub fn dispatch(&mut self, message: Message, now: Instant) {
        let command = self.state.update(message);
        self.execute(command, now);
    }

    /// Fire whichever timers are due.
    pub fn tick(&mut self, now: Instant) {
        if self.debounce.fire_if_due(now) {
            self.dispatch(Message::DebounceElapsed, now);
        }
        if self.message_timer.fire_if_due(now) {
            self.dispatch(Message::ClearStatus, now);
        }
    }

    /// Apply every message that async work has posted so far. Returns how
    /// many were applied.
    pub fn drain(&mut self, now: Instant) -> usize {
        while let Some(joined) = self.tasks.try_join_next() {
            log_join_failure(joined);
        }

        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.dispatch(message, now);
            applied += 1;
        }
        applied
    }

    /// Wait for all in-flight work, including work started by its results.
    pub async fn settle(&mut self) {
        loop {
            while let Some(joined) = self.tasks.join_next().await {
                log_join_failure(joined);
            }
            self.drain(Instant::now());
            if self.tasks.is_empty() {
                break;
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debounce.deadline(), self.message_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    fn execute(&mut self, command: Command, now: Instant) {
        for command in command.into_vec() {
            match command {
                Command::None | Command::Batch(_) => {}
                Command::ScheduleDebounce(delay) => {
                    self.debounce.arm(now, Duration::from_millis(delay));
                }
                Command::ScheduleClearMessage(delay) => {
                    self.message_timer.arm(now, Duration::from_millis(delay));
                }
                Command::ExecuteSearch(request) => {
                    debug!(seq = request.seq, query = %request.query, page = request.page, "search issued");
                    let service = Arc::clone(&self.search_service);
                    let tx = self.tx.clone();
                    self.tasks.spawn(async move {
                        let response = service.run(request).await;
                        // Receiver only goes away on shutdown
                        let _ = tx.send(Message::ResponseArrived(response));
                    });
                }
                Command::ReportSearch { query, movie } => {
                    let service = Arc::clone(&self.trending_service);
                    self.tasks.spawn(async move {
                        service.report(&query, &movie).await;
                    });
                }
                Command::LoadTrending => {
                    let service = Arc::clone(&self.trending_service);
                    let tx = self.tx.clone();
                    self.tasks.spawn(async move {
                        let message = match service.load().await {
                            Some(entries) => Message::TrendingLoaded(entries),
                            None => Message::TrendingUnavailable,
                        };
                        let _ = tx.send(message);
                    });
                }
            }
        }
    }
}

fn log_join_failure(joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        warn!(error = %e, "background task did not complete");
    }
}
