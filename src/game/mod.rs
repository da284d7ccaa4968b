//! Core Connect Four game logic: board representation, player types, the game
//! state machine and the read-only snapshot handed to the UI.

mod board;
mod player;
mod snapshot;
mod state;

pub use board::{Board, Cell, Direction, Position, WinningLine, COLS, CONNECT, ROWS};
pub use player::Player;
pub use snapshot::GameSnapshot;
pub use state::{GameState, GameStatus, MoveOutcome, Placement};
