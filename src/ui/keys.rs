use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::COLS;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PreviousColumn,
    NextColumn,
    SelectColumn(usize),
    Drop,
    NewGame,
    Quit,
}

/// Map a key event to a command. Releases and unbound keys map to nothing.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Up | KeyCode::Left => Some(Command::PreviousColumn),
        KeyCode::Down | KeyCode::Right => Some(Command::NextColumn),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Drop),
        KeyCode::Char('r') | KeyCode::Char('n') => Some(Command::NewGame),
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|&column| column < COLS)
            .map(Command::SelectColumn),
        _ => None,
    }
}
