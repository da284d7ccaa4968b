use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned tokens needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    /// The player holding this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
        }
    }
}

/// A cell address. Row 0 is the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Position { column, row }
    }

    /// Move one step along `direction`, `sign` being +1 or -1.
    fn step(self, direction: Direction, sign: isize) -> Option<Position> {
        let (dc, dr) = direction.delta();
        let column = self.column.checked_add_signed(dc * sign)?;
        let row = self.row.checked_add_signed(dr * sign)?;
        (column < COLS && row < ROWS).then_some(Position { column, row })
    }
}

/// The four axes a line can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right (/)
    DiagonalUp,
    /// Top-left to bottom-right (\)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (column, row) increment of one step
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (1, -1),
        }
    }
}

/// A contiguous run of same-player cells, at least [`CONNECT`] long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub start: Position,
    pub direction: Direction,
    pub len: usize,
}

impl WinningLine {
    /// Cells of the line, from `start` onward
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::successors(Some(self.start), move |pos| pos.step(self.direction, 1))
            .take(self.len)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells().any(|p| p == pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Column-major; gravity fills each column from index 0 upward.
    cells: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// Copy of the whole grid, indexed `[column][row]`
    pub fn grid(&self) -> [[Cell; ROWS]; COLS] {
        self.cells
    }

    /// Number of tokens already stacked in a column
    pub fn column_height(&self, column: usize) -> usize {
        self.cells[column]
            .iter()
            .position(|&cell| cell == Cell::Empty)
            .unwrap_or(ROWS)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.cells[column][ROWS - 1] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn { column });
        }

        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull { column });
        }

        let row = self.column_height(column);
        self.cells[column][row] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    /// Total number of tokens on the board
    pub fn token_count(&self) -> usize {
        (0..COLS).map(|column| self.column_height(column)).sum()
    }

    /// Check whether the token at (column, row) is part of a winning run.
    ///
    /// Only the four axes through that cell are examined, so this is the
    /// check to run right after a drop.
    pub fn winning_line(&self, column: usize, row: usize) -> Option<WinningLine> {
        let origin = Position::new(column, row);
        let cell = self.get(column, row);
        if cell == Cell::Empty {
            return None;
        }

        Direction::ALL
            .into_iter()
            .map(|direction| self.run_through(origin, direction, cell))
            .find(|line| line.len >= CONNECT)
    }

    /// Scan the whole board for any winning run.
    ///
    /// Yields the same verdict as [`Board::winning_line`] applied to every cell.
    pub fn find_win(&self) -> Option<(Player, WinningLine)> {
        for column in 0..COLS {
            for row in 0..self.column_height(column) {
                let pos = Position::new(column, row);
                let cell = self.get(column, row);
                for direction in Direction::ALL {
                    // Only measure from the first cell of a run.
                    let continues_backward = pos
                        .step(direction, -1)
                        .is_some_and(|prev| self.get(prev.column, prev.row) == cell);
                    if continues_backward {
                        continue;
                    }
                    let line = self.run_through(pos, direction, cell);
                    if line.len >= CONNECT {
                        return cell.owner().map(|player| (player, line));
                    }
                }
            }
        }
        None
    }

    /// The maximal run of `cell` along `direction` that contains `origin`
    fn run_through(&self, origin: Position, direction: Direction, cell: Cell) -> WinningLine {
        let matches = |pos: &Position| self.get(pos.column, pos.row) == cell;

        let start = std::iter::successors(Some(origin), |pos| pos.step(direction, -1))
            .take_while(matches)
            .last()
            .unwrap_or(origin);

        let len = std::iter::successors(Some(start), |pos| pos.step(direction, 1))
            .take_while(matches)
            .count();

        WinningLine {
            start,
            direction,
            len,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for column in 0..COLS {
            for row in 0..ROWS {
                assert_eq!(board.get(column, row), Cell::Empty);
            }
        }
        assert_eq!(board.token_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Player::A).unwrap();
        assert_eq!(row, 0); // Should land at bottom
        assert_eq!(board.get(3, 0), Cell::A);

        // Drop second piece in same column
        let row = board.drop_piece(3, Player::B).unwrap();
        assert_eq!(row, 1); // Should land on top of first piece
        assert_eq!(board.get(3, 1), Cell::B);
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Player::A).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Player::B),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board.column_height(0), ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Player::A),
            Err(MoveError::InvalidColumn { column: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(column, Player::A).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.token_count(), ROWS * COLS);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Create horizontal line at bottom row
        for column in 0..4 {
            board.drop_piece(column, Player::A).unwrap();
        }
        let line = board.winning_line(2, 0).unwrap(); // Check middle of the line
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.len, 4);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, Player::B).unwrap();
        }
        let line = board.winning_line(3, 3).unwrap(); // Check the 4th piece
        assert_eq!(line.direction, Direction::Vertical);
        let cells: Vec<_> = line.cells().collect();
        assert_eq!(
            cells,
            (0..4).map(|row| Position::new(3, row)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Player::A).unwrap();

        board.drop_piece(1, Player::B).unwrap();
        board.drop_piece(1, Player::A).unwrap();

        board.drop_piece(2, Player::B).unwrap();
        board.drop_piece(2, Player::B).unwrap();
        board.drop_piece(2, Player::A).unwrap();

        board.drop_piece(3, Player::B).unwrap();
        board.drop_piece(3, Player::B).unwrap();
        board.drop_piece(3, Player::B).unwrap();
        let row = board.drop_piece(3, Player::A).unwrap();

        let line = board.winning_line(3, row).unwrap();
        assert_eq!(line.direction, Direction::DiagonalUp);
        assert_eq!(line.start, Position::new(0, 0));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Player::A).unwrap();

        board.drop_piece(5, Player::B).unwrap();
        board.drop_piece(5, Player::A).unwrap();

        board.drop_piece(4, Player::B).unwrap();
        board.drop_piece(4, Player::B).unwrap();
        board.drop_piece(4, Player::A).unwrap();

        board.drop_piece(3, Player::B).unwrap();
        board.drop_piece(3, Player::B).unwrap();
        board.drop_piece(3, Player::B).unwrap();
        let row = board.drop_piece(3, Player::A).unwrap();

        let line = board.winning_line(3, row).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDown);
        assert_eq!(line.start, Position::new(3, 3));
        assert!(line.contains(Position::new(6, 0)));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for column in 0..3 {
            board.drop_piece(column, Player::A).unwrap();
        }
        assert!(board.winning_line(1, 0).is_none()); // Only 3 in a row
        assert!(board.find_win().is_none());
    }

    #[test]
    fn test_run_of_five_reported_whole() {
        let mut board = Board::new();
        for column in [0, 1, 3, 4] {
            board.drop_piece(column, Player::B).unwrap();
        }
        assert!(board.find_win().is_none());
        board.drop_piece(2, Player::B).unwrap();

        let line = board.winning_line(2, 0).unwrap();
        assert_eq!(line.len, 5);
        assert_eq!(board.find_win(), Some((Player::B, line)));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let mut board = Board::new();
        for column in [0, 1, 3, 4] {
            board.drop_piece(column, Player::A).unwrap();
        }
        board.drop_piece(2, Player::B).unwrap();
        assert!(board.winning_line(2, 0).is_none());
        assert!(board.winning_line(1, 0).is_none());
        assert!(board.find_win().is_none());
    }

    #[test]
    fn test_empty_cell_has_no_line() {
        let board = Board::new();
        assert!(board.winning_line(0, 0).is_none());
    }
}
