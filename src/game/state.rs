use log::{debug, info};

use super::{Board, GameSnapshot, Player, WinningLine, COLS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Where a token landed and who put it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Result of a successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Token placed, game continues with the other player.
    Placed(Placement),
    /// Token placed and completed a line for `placement.player`.
    Won {
        placement: Placement,
        line: WinningLine,
    },
    /// Token placed into the last free cell without a winner.
    Draw(Placement),
}

impl MoveOutcome {
    pub fn placement(&self) -> Placement {
        match *self {
            MoveOutcome::Placed(placement)
            | MoveOutcome::Won { placement, .. }
            | MoveOutcome::Draw(placement) => placement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::A, // A starts
            status: GameStatus::InProgress,
            winning_line: None,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The line that ended the game, if it was won
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Drop the current player's token into `column`.
    ///
    /// A rejected drop leaves the state untouched, including whose turn it is.
    pub fn drop_token(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            debug!("rejected drop into column {column}: game already finished");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player).map_err(|e| {
            debug!("rejected drop for {player}: {e}");
            e
        })?;
        self.moves_played += 1;

        let placement = Placement {
            column,
            row,
            player,
        };
        debug!("{player} placed at column {column}, row {row}");

        // Check for win
        if let Some(line) = self.board.winning_line(column, row) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            info!("{player} wins after {} moves", self.moves_played);
            return Ok(MoveOutcome::Won { placement, line });
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("game drawn after {} moves", self.moves_played);
            return Ok(MoveOutcome::Draw(placement));
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Placed(placement))
    }

    /// Start over with an empty board and A to move
    pub fn reset(&mut self) {
        info!("new game");
        *self = GameState::initial();
    }

    /// Owned read-only view for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.board.grid(),
            current_player: self.current_player,
            status: self.status,
            winning_line: self.winning_line,
            moves_played: self.moves_played,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    /// Column order that fills the board without any four-in-a-row.
    ///
    /// Columns are filled in pairs, so each column holds two bands of three
    /// and neighbouring columns carry opposite bands.
    const DRAW_SEQUENCE: [usize; 42] = [
        0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, //
        2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, //
        4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, //
        6, 6, 6, 6, 6, 6,
    ];

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
    }

    #[test]
    fn test_drop_token() {
        let mut state = GameState::initial();
        let outcome = state.drop_token(3).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Placed(Placement {
                column: 3,
                row: 0,
                player: Player::A
            })
        );
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.board().get(3, 0), Cell::A);
        assert_eq!(state.moves_played(), 1);
    }

    #[test]
    fn test_rejected_drop_keeps_turn() {
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.drop_token(0).unwrap();
        }
        let before = state;

        assert_eq!(state.drop_token(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(state.drop_token(7), Err(MoveError::InvalidColumn { column: 7 }));
        assert_eq!(state, before);
        assert!(!state.legal_columns().contains(&0));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // A builds row 0 in columns 0..4, B stacks on top of A
        for column in 0..4 {
            let outcome = state.drop_token(column).unwrap(); // A
            if column < 3 {
                assert!(matches!(outcome, MoveOutcome::Placed(_)));
                state.drop_token(column).unwrap(); // B (different row)
            } else {
                let MoveOutcome::Won { placement, line } = outcome else {
                    panic!("expected a win, got {outcome:?}");
                };
                assert_eq!(placement.player, Player::A);
                assert_eq!(line.len, 4);
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Won(Player::A));
        // Winner stays as the current player
        assert_eq!(state.current_player(), Player::A);
        assert!(state.winning_line().is_some());
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();
        let (last, rest) = DRAW_SEQUENCE.split_last().unwrap();

        for &column in rest {
            let outcome = state.drop_token(column).unwrap();
            assert!(
                matches!(outcome, MoveOutcome::Placed(_)),
                "unexpected {outcome:?} at column {column}"
            );
        }

        let outcome = state.drop_token(*last).unwrap();
        assert!(matches!(outcome, MoveOutcome::Draw(_)));
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.board().is_full());
        assert_eq!(state.drop_token(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_game_over_rejects_without_mutation() {
        let mut state = GameState::initial();
        for column in [0, 6, 0, 6, 0, 6, 0] {
            state.drop_token(column).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Won(Player::A));
        let before = state;

        assert_eq!(state.drop_token(1), Err(MoveError::GameOver));
        assert_eq!(state.drop_token(42), Err(MoveError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::initial();
        state.drop_token(2).unwrap();
        state.drop_token(2).unwrap();
        state.reset();
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = GameState::initial();
        state.drop_token(4).unwrap();
        let snapshot = state.snapshot();

        state.drop_token(4).unwrap();
        assert_eq!(snapshot.cell(4, 1), Cell::Empty);
        assert_eq!(snapshot.current_player, Player::B);
        assert_eq!(state.snapshot().cell(4, 1), Cell::B);
    }
}
