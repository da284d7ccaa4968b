use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use log::debug;
use ratatui::{backend::Backend, Terminal};

use super::keys::{map_key, Command};
use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{GameState, MoveOutcome, COLS};

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    messages: VecDeque<String>,
    config: UiConfig,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        let mut app = App {
            game_state: GameState::initial(),
            selected_column: config.start_column.min(COLS - 1),
            should_quit: false,
            messages: VecDeque::new(),
            config,
        };
        app.push_message(format!("{} to move", app.game_state.current_player()));
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.poll_interval_ms))? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = map_key(key) {
                    self.apply(command);
                }
            }
        }
        Ok(())
    }

    /// Carry out one command
    pub fn apply(&mut self, command: Command) {
        debug!("command {command:?}");

        match command {
            Command::Quit => {
                self.should_quit = true;
            }
            Command::PreviousColumn => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            Command::NextColumn => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            Command::SelectColumn(column) => {
                if column < COLS {
                    self.selected_column = column;
                }
            }
            Command::Drop => {
                self.drop_token();
            }
            Command::NewGame => {
                self.game_state.reset();
                self.selected_column = self.config.start_column.min(COLS - 1);
                self.push_message("New game started!".to_string());
            }
        }
    }

    /// Drop a token in the selected column
    fn drop_token(&mut self) {
        match self.game_state.drop_token(self.selected_column) {
            Ok(MoveOutcome::Placed(_)) => {}
            Ok(MoveOutcome::Won { placement, .. }) => {
                self.push_message(format!("{} wins!", placement.player));
            }
            Ok(MoveOutcome::Draw(_)) => {
                self.push_message("It's a draw!".to_string());
            }
            // The selector is clamped, so this only shows up in the log.
            Err(MoveError::InvalidColumn { column }) => {
                debug!("ignored drop into column {column}");
            }
            Err(err @ MoveError::ColumnFull { .. }) => {
                self.push_message(err.to_string());
            }
            Err(err @ MoveError::GameOver) => {
                self.push_message(format!("{err}, press 'r' for a new game"));
            }
        }
    }

    fn push_message(&mut self, message: String) {
        while self.messages.len() >= self.config.message_history.max(1) {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let view = super::game_view::ViewState {
            snapshot: self.game_state.snapshot(),
            selected_column: self.selected_column,
            messages: &self.messages,
            config: &self.config,
        };
        super::game_view::render(frame, &view);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
