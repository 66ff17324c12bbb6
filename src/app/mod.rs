//! Terminal application: event loop, key routing and screen state

pub mod command;
pub mod input;
pub mod state;

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::config::Config;
use crate::content::ContentStore;
use crate::store::KeyValueStore;
use crate::ui;
use state::{AppState, Flow};

/// Redraw / timer resolution
const FRAME: Duration = Duration::from_millis(16);

/// The main application
pub struct App {
    config: Config,
    state: AppState,
    terminal: DefaultTerminal,
}

impl App {
    /// Take over the terminal. It is handed back when the app is dropped.
    pub fn new(
        config: Config,
        content: Rc<dyn ContentStore>,
        store: Rc<dyn KeyValueStore>,
    ) -> Result<Self> {
        let state = AppState::new(content, store, &config);
        let terminal = ratatui::try_init().context("Failed to initialise terminal")?;

        Ok(Self { config, state, terminal })
    }

    /// Draw, read keys and advance timers until the user quits
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("LearnFlow started");

        loop {
            let state = &self.state;
            self.terminal.draw(|frame| ui::draw(frame, state))?;

            if event::poll(FRAME)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) == Flow::Quit {
                        break;
                    }
                }
            }

            self.state.tick(Instant::now());
        }

        tracing::info!("LearnFlow exiting");
        Ok(())
    }

    /// Command line keys while typing, screen actions otherwise
    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if self.state.command_line.is_input_mode() {
            return input::key_to_command_input(key.code, key.modifiers)
                .map_or(Flow::Continue, |edit| self.state.handle_command_input(edit));
        }

        input::key_to_action(key.code, self.config.vim_mode)
            .map_or(Flow::Continue, |action| self.state.handle_action(action))
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = ratatui::try_restore() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}
