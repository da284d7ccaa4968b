use super::{Cell, GameStatus, Player, Position, WinningLine, COLS, ROWS};

/// Owned copy of everything the UI needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Indexed `[column][row]`, row 0 at the bottom
    pub grid: [[Cell; ROWS]; COLS],
    pub current_player: Player,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub moves_played: usize,
}

impl GameSnapshot {
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.grid[column][row]
    }

    /// Out-of-range columns count as full, as on [`Board`](super::Board)
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.grid[column][ROWS - 1] != Cell::Empty
    }

    pub fn is_winning_cell(&self, column: usize, row: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(Position::new(column, row)))
    }

    /// Rows from the top of the board down, in drawing order
    pub fn rows_top_down(&self) -> impl Iterator<Item = [Cell; COLS]> + '_ {
        (0..ROWS)
            .rev()
            .map(move |row| std::array::from_fn(|column| self.grid[column][row]))
    }
}
