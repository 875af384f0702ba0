use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::info;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod tests;

use self::application::SearchController;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, EXIT_PROMPT};
use self::domain::models::Mode;
use self::ui::{components::Component, events::Message, renderer::Renderer};
use crate::config::AppConfig;

/// Full-screen movie finder. Must be run inside an entered tokio runtime.
pub struct InteractiveSearch {
    controller: SearchController,
    renderer: Renderer,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveSearch {
    pub fn new(controller: SearchController) -> Self {
        Self {
            controller,
            renderer: Renderer::new(),
            last_ctrl_c_press: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(SearchController::from_config(config)?))
    }

    /// Open with `query` already in the search box and searched.
    pub fn with_initial_query(mut self, query: &str) -> Self {
        self.controller.seed_query(query);
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.controller.mount(Instant::now());
        info!("interactive session started");

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        info!(
            pending_tasks = self.controller.in_flight(),
            "interactive session ended"
        );
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let now = Instant::now();
            self.controller.tick(now);
            self.controller.drain(now);

            terminal.draw(|f| {
                self.renderer.render(f, self.controller.state());
            })?;

            if poll(self.poll_timeout(Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key, Instant::now()) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Wake up for the next timer if it is due before the regular poll interval.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let interval = Duration::from_millis(EVENT_POLL_INTERVAL_MS);
        self.controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(interval))
            .unwrap_or(interval)
    }

    /// Returns true when the application should exit.
    fn handle_input(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if now.duration_since(last_press) < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS)
                {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(now);
            self.controller
                .dispatch(Message::SetStatus(EXIT_PROMPT.to_string()), now);
            return false;
        }

        self.renderer.sync(self.controller.state());
        let message = match self.controller.state().mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        match message {
            Some(Message::Quit) => true,
            Some(msg) => {
                self.controller.dispatch(msg, now);
                false
            }
            None => false,
        }
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => Some(Message::Quit),
            KeyCode::F(1) => Some(Message::ShowHelp),
            KeyCode::Char('r') if ctrl => Some(Message::RefreshTrending),
            KeyCode::PageUp | KeyCode::PageDown => {
                self.renderer.get_pagination_bar_mut().handle_key(key)
            }
            KeyCode::Left | KeyCode::Right if alt => {
                self.renderer.get_pagination_bar_mut().handle_key(key)
            }
            KeyCode::Up | KeyCode::Down => self.renderer.get_movie_list_mut().handle_key(key),
            KeyCode::Char('p') | KeyCode::Char('n') if ctrl => {
                self.renderer.get_movie_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }
}
